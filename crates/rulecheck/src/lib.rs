//! rulecheck: validate struct fields against declarative rule strings.
//!
//! Each field carries a rule string such as `"min:3;max:10"` or
//! `"in:draft,published"`. Validation parses the rule, applies every
//! constraint to the field's value, and collects all failures into one
//! composite error.
//!
//! This crate provides:
//!
//! - **Grammar**: splits rule strings into constraint specs (`len`, `min`, `max`, `in`)
//! - **Constraints**: pure evaluators for text and integer values
//! - **Dispatch**: walks a record's fields in declaration order
//! - **Errors**: the violation taxonomy and its rendering
//! - **Derive**: `#[derive(Record)]` generates the field descriptors
//!
//! # Example
//!
//! ```
//! use rulecheck::{Record, Validate};
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[validate = "min:3;max:16"]
//!     pub username: String,
//!     #[validate("min:18")]
//!     pub age: u32,
//!     #[validate = "in:free,pro"]
//!     pub plan: String,
//! }
//!
//! let signup = Signup {
//!     username: "al".into(),
//!     age: 30,
//!     plan: "enterprise".into(),
//! };
//!
//! let err = signup.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "[username]: field invalidated\n[plan]: field invalidated\n"
//! );
//! ```

pub mod config;
pub mod constraint;
pub mod dispatch;
pub mod dynamic;
pub mod error;
pub mod grammar;
pub mod record;
mod probe;
mod validator;

pub use config::{ColonSplit, Options};
pub use dynamic::{DynRecord, DynValue};
pub use error::{Error, Reason, ValidationErrors, Violation};
pub use grammar::{Constraint, Rule, SyntaxError, SyntaxErrorKind};
pub use record::{FieldDescriptor, FieldType, FieldValue, Inspect, Scalar, ScalarKind, ScalarValue, Shape};
pub use rulecheck_derive::Record;
pub use validator::{validate, Validate, Validator};

/// Support items for code generated by `#[derive(Record)]`. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::probe::{Probe, ProbeFallback, ProbeSupported};
}
