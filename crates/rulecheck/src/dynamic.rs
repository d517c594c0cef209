//! Records assembled at runtime.
//!
//! [`DynRecord`] is for field sets that are only known while the program
//! runs, e.g. form submissions keyed by a schema loaded from disk. It goes
//! through the same dispatcher as derived records.
//!
//! ```
//! use rulecheck::{validate, DynRecord};
//!
//! let record = DynRecord::new()
//!     .field("email", "min:3", "a@b")
//!     .field("age", "min:18", 17)
//!     .private_field("token", "len:32", "x");
//!
//! let err = validate(&record).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "[age]: field invalidated\nvalidation for unexported field is not allowed\n"
//! );
//! ```

use crate::record::{FieldDescriptor, FieldValue, Inspect, Scalar, ScalarKind, Shape};

/// An owned field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynValue {
    Text(String),
    Int(i128),
    TextSeq(Vec<String>),
    IntSeq(Vec<i128>),
    /// A value of a type no constraint applies to, by type name.
    Unsupported(&'static str),
}

impl DynValue {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            DynValue::Text(text) => FieldValue::Scalar(Scalar::Text(text)),
            DynValue::Int(n) => FieldValue::Scalar(Scalar::Int(*n)),
            DynValue::TextSeq(items) => FieldValue::Seq {
                element: ScalarKind::Text,
                items: items.iter().map(|s| Scalar::Text(s)).collect(),
            },
            DynValue::IntSeq(items) => FieldValue::Seq {
                element: ScalarKind::Int,
                items: items.iter().map(|n| Scalar::Int(*n)).collect(),
            },
            DynValue::Unsupported(type_name) => FieldValue::Unsupported {
                type_name: *type_name,
            },
        }
    }
}

impl From<String> for DynValue {
    fn from(value: String) -> Self {
        DynValue::Text(value)
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for DynValue {
    fn from(values: Vec<String>) -> Self {
        DynValue::TextSeq(values)
    }
}

impl From<Vec<&str>> for DynValue {
    fn from(values: Vec<&str>) -> Self {
        DynValue::TextSeq(values.into_iter().map(str::to_string).collect())
    }
}

macro_rules! dyn_ints {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for DynValue {
            fn from(value: $ty) -> Self {
                DynValue::Int(i128::from(value))
            }
        }

        impl From<Vec<$ty>> for DynValue {
            fn from(values: Vec<$ty>) -> Self {
                DynValue::IntSeq(values.into_iter().map(i128::from).collect())
            }
        }
    )*};
}

dyn_ints!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! dyn_unsupported {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for DynValue {
            fn from(_: $ty) -> Self {
                DynValue::Unsupported(stringify!($ty))
            }
        }
    )*};
}

dyn_unsupported!(bool, char, f32, f64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct DynField {
    name: String,
    accessible: bool,
    rule: Option<String>,
    value: DynValue,
}

/// A record whose fields are added one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynRecord {
    fields: Vec<DynField>,
}

impl DynRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a public field. An empty rule leaves it unvalidated.
    pub fn field(
        self,
        name: impl Into<String>,
        rule: impl Into<String>,
        value: impl Into<DynValue>,
    ) -> Self {
        self.push(name.into(), true, rule.into(), value.into())
    }

    /// Append a private field. Any non-empty rule on it is a violation.
    pub fn private_field(
        self,
        name: impl Into<String>,
        rule: impl Into<String>,
        value: impl Into<DynValue>,
    ) -> Self {
        self.push(name.into(), false, rule.into(), value.into())
    }

    fn push(mut self, name: String, accessible: bool, rule: String, value: DynValue) -> Self {
        self.fields.push(DynField {
            name,
            accessible,
            rule: Some(rule).filter(|r| !r.is_empty()),
            value,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Inspect for DynRecord {
    fn inspect(&self) -> Shape<'_> {
        Shape::Record(
            self.fields
                .iter()
                .map(|field| FieldDescriptor {
                    name: &field.name,
                    accessible: field.accessible,
                    rule: field.rule.as_deref(),
                    value: field.value.as_field_value(),
                })
                .collect(),
        )
    }
}
