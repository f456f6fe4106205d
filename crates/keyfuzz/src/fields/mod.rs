//! Structural field access
//!
//! Items are searched through dotted key paths (`"CPU.Manufacturer"`). An item
//! type takes part either by implementing [`Fields`], which the default
//! [`StructuralResolver`] walks, or by handing the engine any closure
//! `Fn(&T, &KeyPath) -> FuzzyResult<FieldValue>` as its [`FieldResolver`].
//!
//! References and smart pointers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) delegate
//! to their target, so a field held by reference resolves like an inline one.
//!
//! # Example
//!
//! ```rust
//! use keyfuzz::fields::{Field, FieldResolver, FieldValue, Fields, KeyPath, StructuralResolver};
//!
//! struct Cpu {
//!     manufacturer: String,
//! }
//!
//! struct Laptop {
//!     cpu: Box<Cpu>,
//! }
//!
//! impl Fields for Cpu {
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "Manufacturer" => Some(Field::Text(&self.manufacturer)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Fields for Laptop {
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "CPU" => Some(Field::Record(&self.cpu)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let laptop = Laptop { cpu: Box::new(Cpu { manufacturer: "Intel".into() }) };
//! let path: KeyPath = "CPU.Manufacturer".parse().unwrap();
//! let value = StructuralResolver.resolve(&laptop, &path).unwrap();
//! assert_eq!(value, FieldValue::Text("Intel".into()));
//! ```

mod json;
mod path;
mod resolver;

pub use path::KeyPath;
pub use resolver::{FieldResolver, StructuralResolver};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A borrowed view of one named field
#[derive(Clone, Copy)]
pub enum Field<'a> {
    Text(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// A nested value with named fields of its own
    Record(&'a dyn Fields),
}

impl Field<'_> {
    /// Owned scalar value, if this field is (or wraps) one
    pub fn to_value(&self) -> Option<FieldValue> {
        match *self {
            Field::Text(s) => Some(FieldValue::Text(s.to_owned())),
            Field::Int(v) => Some(FieldValue::Int(v)),
            Field::UInt(v) => Some(FieldValue::UInt(v)),
            Field::Float(v) => Some(FieldValue::Float(v)),
            Field::Bool(v) => Some(FieldValue::Bool(v)),
            Field::Record(r) => r.as_value(),
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Field::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Field::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Field::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Field::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Field::Record(_) => f.write_str("Record(..)"),
        }
    }
}

/// An owned scalar found at the end of a key path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    /// The string, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Named, dot-addressable fields of a searchable item.
///
/// Records return their children from [`Fields::field`]; scalars (plain
/// strings, for instance) return themselves from [`Fields::as_value`].
pub trait Fields {
    /// Look up a direct child by name
    fn field(&self, name: &str) -> Option<Field<'_>>;

    /// The item's own scalar value, when it is one
    fn as_value(&self) -> Option<FieldValue> {
        None
    }
}

impl Fields for str {
    fn field(&self, _name: &str) -> Option<Field<'_>> {
        None
    }

    fn as_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Text(self.to_owned()))
    }
}

impl Fields for String {
    fn field(&self, _name: &str) -> Option<Field<'_>> {
        None
    }

    fn as_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Text(self.clone()))
    }
}

macro_rules! delegate_fields {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Fields + ?Sized> Fields for $ptr {
                fn field(&self, name: &str) -> Option<Field<'_>> {
                    (**self).field(name)
                }

                fn as_value(&self) -> Option<FieldValue> {
                    (**self).as_value()
                }
            }
        )*
    };
}

delegate_fields!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_are_scalars() {
        assert_eq!("acer".as_value(), Some(FieldValue::Text("acer".into())));
        assert_eq!(String::from("amd").as_value(), Some(FieldValue::from("amd")));
        assert!("acer".field("len").is_none());
    }

    #[test]
    fn test_pointers_delegate() {
        let boxed: Box<String> = Box::new("intel".into());
        let shared: Arc<str> = Arc::from("lenovo");
        let counted: Rc<String> = Rc::new("acer".into());
        assert_eq!(boxed.as_value(), Some(FieldValue::from("intel")));
        assert_eq!(shared.as_value(), Some(FieldValue::from("lenovo")));
        assert_eq!((&counted).as_value(), Some(FieldValue::from("acer")));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Text("i7".into()).to_string(), "i7");
        assert_eq!(FieldValue::Int(-3).to_string(), "-3");
        assert_eq!(FieldValue::UInt(16).to_string(), "16");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_field_to_value() {
        assert_eq!(Field::Text("x").to_value(), Some(FieldValue::from("x")));
        assert_eq!(Field::Bool(false).to_value(), Some(FieldValue::Bool(false)));
        let inner = String::from("nested");
        assert_eq!(Field::Record(&inner).to_value(), Some(FieldValue::from("nested")));
    }
}
