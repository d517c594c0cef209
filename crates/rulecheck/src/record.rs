//! The record model the dispatcher walks.
//!
//! Anything that can be validated implements [`Inspect`]. A named-field
//! struct answers with [`Shape::Record`]: one [`FieldDescriptor`] per field,
//! in declaration order. Everything else (numbers, strings, collections,
//! options, boxes) answers with [`Shape::Other`] and is refused as a whole.
//!
//! Field values are classified through [`FieldType`]:
//!
//! | Rust type | Classified as |
//! |-----------|---------------|
//! | `String`, `str`, `Box<str>`, `Cow<str>` | text |
//! | `i8`..`i128`, `u8`..`u64`, `isize`, `usize` | integer |
//! | `Vec<T>`, `[T]`, `[T; N]`, `VecDeque<T>` of the above | sequence |
//! | `&T` for any `T` above | same as `T` |
//! | anything else | unsupported |
//!
//! `u128` is unsupported: it does not fit in the `i128` all integers widen to.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// What inspecting a value yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A record with named fields, in declaration order.
    Record(Vec<FieldDescriptor<'a>>),
    /// Not a record.
    Other { type_name: &'static str },
}

/// Types that can be handed to the validator.
///
/// Derive it for structs with `#[derive(Record)]`.
pub trait Inspect {
    fn inspect(&self) -> Shape<'_>;
}

/// One field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    /// The declared field name.
    pub name: &'a str,
    /// Whether the field is public. Rules on private fields are rejected.
    pub accessible: bool,
    /// The field's rule string. `None` means the field is not validated.
    pub rule: Option<&'a str>,
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// A public field with no rule.
    pub fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            accessible: true,
            rule: None,
            value,
        }
    }

    /// Attach a rule. An empty string leaves the field unvalidated.
    pub fn with_rule(mut self, rule: &'a str) -> Self {
        self.rule = Some(rule).filter(|r| !r.is_empty());
        self
    }

    /// Mark the field private.
    pub fn private(mut self) -> Self {
        self.accessible = false;
        self
    }
}

/// The two value families constraints understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Int,
}

/// A single text or integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    Text(&'a str),
    /// Every supported integer type widens losslessly into `i128`.
    Int(i128),
}

impl Scalar<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Text(_) => ScalarKind::Text,
            Scalar::Int(_) => ScalarKind::Int,
        }
    }
}

/// A field's value as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Scalar(Scalar<'a>),
    /// A sequence of scalars, in element order.
    Seq {
        element: ScalarKind,
        items: Vec<Scalar<'a>>,
    },
    /// A type no constraint applies to.
    Unsupported { type_name: &'a str },
}

impl FieldValue<'_> {
    /// Human-readable type family, logged with each violation.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldValue::Scalar(Scalar::Text(_)) => "text",
            FieldValue::Scalar(Scalar::Int(_)) => "integer",
            FieldValue::Seq {
                element: ScalarKind::Text,
                ..
            } => "sequence of text",
            FieldValue::Seq {
                element: ScalarKind::Int,
                ..
            } => "sequence of integer",
            FieldValue::Unsupported { .. } => "unsupported",
        }
    }
}

/// A type that is a single text or integer value.
pub trait ScalarValue {
    const KIND: ScalarKind;

    fn to_scalar(&self) -> Scalar<'_>;
}

/// A type a field can have and still be checked.
pub trait FieldType {
    fn field_value(&self) -> FieldValue<'_>;
}

macro_rules! text_types {
    ($($ty:ty),* $(,)?) => {$(
        impl ScalarValue for $ty {
            const KIND: ScalarKind = ScalarKind::Text;

            fn to_scalar(&self) -> Scalar<'_> {
                Scalar::Text(self)
            }
        }

        impl FieldType for $ty {
            fn field_value(&self) -> FieldValue<'_> {
                FieldValue::Scalar(self.to_scalar())
            }
        }
    )*};
}

macro_rules! int_types {
    ($($ty:ty),* $(,)?) => {$(
        impl ScalarValue for $ty {
            const KIND: ScalarKind = ScalarKind::Int;

            fn to_scalar(&self) -> Scalar<'_> {
                // Lossless: every listed type fits in i128.
                Scalar::Int(*self as i128)
            }
        }

        impl FieldType for $ty {
            fn field_value(&self) -> FieldValue<'_> {
                FieldValue::Scalar(self.to_scalar())
            }
        }
    )*};
}

text_types!(String, str, Box<str>, Cow<'_, str>);
int_types!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ScalarValue for i128 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Int(*self)
    }
}

impl FieldType for i128 {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(self.to_scalar())
    }
}

impl<T: ScalarValue + ?Sized> ScalarValue for &T {
    const KIND: ScalarKind = T::KIND;

    fn to_scalar(&self) -> Scalar<'_> {
        (**self).to_scalar()
    }
}

impl<T: FieldType + ?Sized> FieldType for &T {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

fn seq<'a, T, I>(items: I) -> FieldValue<'a>
where
    T: ScalarValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    FieldValue::Seq {
        element: T::KIND,
        items: items.into_iter().map(ScalarValue::to_scalar).collect(),
    }
}

impl<T: ScalarValue> FieldType for [T] {
    fn field_value(&self) -> FieldValue<'_> {
        seq(self)
    }
}

impl<T: ScalarValue, const N: usize> FieldType for [T; N] {
    fn field_value(&self) -> FieldValue<'_> {
        seq(self)
    }
}

impl<T: ScalarValue> FieldType for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        seq(self)
    }
}

impl<T: ScalarValue> FieldType for VecDeque<T> {
    fn field_value(&self) -> FieldValue<'_> {
        seq(self)
    }
}

macro_rules! not_records {
    ($($ty:ty),* $(,)?) => {$(
        impl Inspect for $ty {
            fn inspect(&self) -> Shape<'_> {
                Shape::Other { type_name: type_name::<Self>() }
            }
        }
    )*};
}

not_records!(
    (), bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    String, str,
);

macro_rules! not_records_generic {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($params)*> Inspect for $ty {
            fn inspect(&self) -> Shape<'_> {
                Shape::Other { type_name: type_name::<Self>() }
            }
        }
    )*};
}

not_records_generic!(
    [T] Vec<T>,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] VecDeque<T>,
    [T] Option<T>,
    [T: ?Sized] Box<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
);
