//! Field classification for derived impls.
//!
//! `#[derive(Record)]` has to produce a [`FieldValue`] for every field,
//! including fields whose type implements no rulecheck trait at all (floats,
//! maps, nested structs). It does that with autoref-based dispatch:
//!
//! ```ignore
//! use rulecheck::__private::{Probe, ProbeFallback as _, ProbeSupported as _};
//! (&Probe(&self.field)).field_value()
//! ```
//!
//! Method lookup tries the receiver `&Probe<T>` before `&&Probe<T>`, so
//! [`ProbeSupported`] wins whenever `T: FieldType`, and [`ProbeFallback`]
//! reports the type as unsupported otherwise. This only resolves for
//! concrete types; a field typed by a generic parameter always lands on the
//! fallback.

use std::any::type_name;

use crate::record::{FieldType, FieldValue};

pub struct Probe<'a, T: ?Sized>(pub &'a T);

pub trait ProbeSupported<'a> {
    fn field_value(&self) -> FieldValue<'a>;
}

impl<'a, T: FieldType + ?Sized> ProbeSupported<'a> for Probe<'a, T> {
    fn field_value(&self) -> FieldValue<'a> {
        FieldType::field_value(self.0)
    }
}

pub trait ProbeFallback<'a> {
    fn field_value(&self) -> FieldValue<'a>;
}

impl<'a, T: ?Sized> ProbeFallback<'a> for &Probe<'a, T> {
    fn field_value(&self) -> FieldValue<'a> {
        FieldValue::Unsupported {
            type_name: type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Scalar;
    use std::collections::HashMap;

    #[test]
    fn supported_types_use_their_classification() {
        let name = String::from("ada");
        assert_eq!(
            (&Probe(&name)).field_value(),
            FieldValue::Scalar(Scalar::Text("ada"))
        );
        let age = 36u8;
        assert_eq!(
            (&Probe(&age)).field_value(),
            FieldValue::Scalar(Scalar::Int(36))
        );
    }

    #[test]
    fn other_types_fall_back_to_unsupported() {
        let ratio = 0.5f64;
        assert_eq!(
            (&Probe(&ratio)).field_value(),
            FieldValue::Unsupported { type_name: "f64" }
        );
        let flag = true;
        assert!(matches!(
            (&Probe(&flag)).field_value(),
            FieldValue::Unsupported { .. }
        ));
        let map: HashMap<String, String> = HashMap::new();
        assert!(matches!(
            (&Probe(&map)).field_value(),
            FieldValue::Unsupported { .. }
        ));
    }

    #[test]
    fn nested_sequences_are_unsupported() {
        let nested = vec![vec![1i32]];
        assert!(matches!(
            (&Probe(&nested)).field_value(),
            FieldValue::Unsupported { .. }
        ));
    }
}
