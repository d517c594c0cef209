//! Entry points.

use std::any::type_name;

use crate::config::Options;
use crate::dispatch::dispatch;
use crate::error::{aggregate, Error};
use crate::record::{Inspect, Shape};

/// Validates records with a fixed set of [`Options`].
///
/// Holds no state besides its options; one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: Options,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Validate every field of `record`.
    ///
    /// Returns [`Error::NotAStruct`] without looking further if `record` is
    /// not a record, otherwise every violation found across all fields.
    pub fn validate<T: Inspect + ?Sized>(&self, record: &T) -> Result<(), Error> {
        let fields = match record.inspect() {
            Shape::Record(fields) => fields,
            Shape::Other { type_name } => {
                tracing::debug!(type_name, "refusing to validate a non-record value");
                return Err(Error::NotAStruct { type_name });
            }
        };

        let span = tracing::debug_span!(
            "validate",
            record = type_name::<T>(),
            fields = fields.len()
        );
        let _enter = span.enter();

        aggregate(dispatch(&fields, self.options)).map_err(Error::from)
    }
}

/// Validate `record` with default options.
pub fn validate<T: Inspect + ?Sized>(record: &T) -> Result<(), Error> {
    Validator::default().validate(record)
}

/// `record.validate()` for anything that can be inspected.
pub trait Validate: Inspect {
    fn validate(&self) -> Result<(), Error> {
        Validator::default().validate(self)
    }
}

impl<T: Inspect + ?Sized> Validate for T {}
