//! Compile-time record introspection.
//!
//! The [`Introspect`] trait is the Rust stand-in for reflective field
//! enumeration: a `#[derive(Introspect)]` on a named-field struct generates
//! an impl that yields one [`Field`] per declared attribute, in declaration
//! order. Values are rendered through [`IntrospectValue`], which gives every
//! supported scalar a stable textual form and renders an absent `Option` as
//! the literal `null`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// Textual sentinel for absent values.
pub const NULL: &str = "null";

/// A single introspected attribute: its declared name and rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(name: &'static str, value: String) -> Self {
        Self { name, value }
    }
}

/// A record whose attributes can be enumerated.
///
/// Derive this; hand-written impls are only needed for foreign types the
/// derive cannot reach.
pub trait Introspect {
    /// The record type's simple name, used as document title and XML root.
    fn type_name() -> &'static str;

    /// Every declared attribute, in declaration order.
    fn fields(&self) -> Vec<Field>;
}

/// Renders a field value into its textual form.
pub trait IntrospectValue {
    fn render(&self) -> String;
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntrospectValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_via_display!(
    String, &str, bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    Uuid,
    NaiveDateTime, NaiveDate, NaiveTime,
    DateTime<Utc>, DateTime<FixedOffset>,
);

// Floats keep a fractional part ("100.0", not "100"), matching the textual
// form the documents are specified against.
impl IntrospectValue for f32 {
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl IntrospectValue for f64 {
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T: IntrospectValue> IntrospectValue for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => NULL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use introspect_derive::Introspect;

    #[derive(Introspect)]
    struct Sample {
        name: String,
        count: u32,
        ratio: f64,
        note: Option<String>,
    }

    fn sample() -> Sample {
        Sample {
            name: "widget".to_string(),
            count: 3,
            ratio: 100.0,
            note: None,
        }
    }

    #[test]
    fn type_name_matches_struct_ident() {
        assert_eq!(Sample::type_name(), "Sample");
    }

    #[test]
    fn fields_cover_every_attribute_in_declaration_order() {
        let fields = sample().fields();
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "count", "ratio", "note"]);
    }

    #[test]
    fn absent_option_renders_as_null() {
        let fields = sample().fields();
        assert_eq!(fields[3].value, "null");

        let with_note = Sample {
            note: Some("fragile".to_string()),
            ..sample()
        };
        assert_eq!(with_note.fields()[3].value, "fragile");
    }

    #[test]
    fn floats_keep_a_fractional_part() {
        assert_eq!(100.0_f64.render(), "100.0");
        assert_eq!(50.5_f64.render(), "50.5");
        assert_eq!(0.0_f32.render(), "0.0");
    }

    #[test]
    fn scalars_render_via_display() {
        assert_eq!(true.render(), "true");
        assert_eq!(42_i64.render(), "42");
        let id = Uuid::parse_str("c249fc5b-4a25-4212-83ca-2c6ec0d57d0b").unwrap();
        assert_eq!(id.render(), "c249fc5b-4a25-4212-83ca-2c6ec0d57d0b");
    }
}
