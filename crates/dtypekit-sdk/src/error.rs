//! Error types for the runtime translation boundary

use crate::type_num::TypeNum;

/// Result type for runtime type-code translation
pub type DTypeResult<T> = Result<T, DTypeError>;

/// Failures when turning runtime type codes back into registry entries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DTypeError {
    /// Integer outside the legacy numeric enumeration
    #[error("Unknown legacy type number: {0}")]
    UnknownTypeNum(i32),

    /// Type character without a legacy numeric type
    #[error("Unknown type character: {0:?}")]
    UnknownTypeChar(char),

    /// Legacy type number with no native registration
    #[error("No native type registered for {type_num}")]
    NotRegistered {
        /// The legacy type number that was looked up
        type_num: TypeNum,
    },
}
