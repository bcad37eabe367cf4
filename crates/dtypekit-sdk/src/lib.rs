//! dtypekit SDK - host runtime ABI surface
//!
//! This crate holds the pieces of the host array runtime that native
//! extension code is allowed to see, without depending on the runtime
//! itself:
//!
//! - [`TypeNum`]: the legacy numeric type numbering
//! - [`DTypeMeta`]: statically allocated runtime dtype metadata objects
//! - [`RefCountRuntime`]: the retain/release seam of the external object system
//! - [`DTypeError`]: failures at the runtime-code translation boundary
//!
//! # Example
//!
//! ```ignore
//! use dtypekit_sdk::{TypeNum, BOOL_DTYPE};
//!
//! let num = TypeNum::try_from(0)?;
//! assert_eq!(num, TypeNum::Bool);
//! assert_eq!(BOOL_DTYPE.type_num(), num);
//! ```

#![warn(missing_docs)]

pub mod dtype;
pub mod error;
pub mod object;
pub mod type_num;

pub use dtype::{DTypeMeta, BOOL_DTYPE, INT_DTYPE, UBYTE_DTYPE};
pub use error::{DTypeError, DTypeResult};
pub use object::RefCountRuntime;
pub use type_num::TypeNum;
