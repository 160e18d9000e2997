//! Record-to-document serialization.
//!
//! Any struct deriving [`Introspect`] exposes its fields as an ordered
//! sequence of (name, textual value) pairs; the [`pdf`] and [`xml`] modules
//! render that sequence into a two-column PDF file or a tag-per-field XML
//! document. New record types need only the derive, never renderer changes.
//!
//! ```ignore
//! use serializer::{Introspect, PdfSerializer, XmlSerializer};
//!
//! #[derive(Introspect)]
//! struct Receipt {
//!     id: Uuid,
//!     total: f64,
//! }
//!
//! let xml = XmlSerializer::new().serialize(&receipt)?;
//! let path = PdfSerializer::new().serialize(&receipt)?;
//! ```

// Lets the derive macro refer to `::serializer` paths from within this
// crate's own tests.
extern crate self as serializer;

pub mod error;
pub mod introspect;
pub mod pdf;
pub mod xml;

pub use error::{SerializerError, SerializerResult};
pub use introspect::{Field, Introspect, IntrospectValue};
pub use introspect_derive::Introspect;
pub use pdf::PdfSerializer;
pub use xml::XmlSerializer;
