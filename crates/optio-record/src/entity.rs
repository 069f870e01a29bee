//! Entity abstraction
//!
//! An entity lists its own fields and hands each one out as an
//! [`AsJson`] capability. Serialization walks the list, so absent optional
//! fields show up as `null` instead of disappearing.

use serde_json::{Map, Value};

use optio_core::{AsJson, OptionalResult};

/// A record with a self-describing field list.
pub trait Entity {
    /// Field names in output order
    fn field_names(&self) -> &'static [&'static str];

    /// Value of one listed field
    fn field(&self, name: &str) -> Option<&dyn AsJson>;

    /// Render every listed field into a JSON object.
    ///
    /// A listed name with no value renders as `null`. The first field that
    /// fails to render aborts the whole record.
    fn serialize(&self) -> OptionalResult<Map<String, Value>> {
        let mut out = Map::new();
        for &name in self.field_names() {
            let value = match self.field(name) {
                Some(field) => field.to_json(name)?,
                None => {
                    tracing::debug!(field = name, "listed field has no value");
                    Value::Null
                }
            };
            out.insert(name.to_string(), value);
        }
        Ok(out)
    }
}

/// Give an [`Entity`] type the [`AsJson`] capability, rendering it through
/// [`Entity::serialize`].
///
/// ```rust
/// use optio_core::{AsJson, Optional};
/// use optio_record::{entity_as_json, Entity};
///
/// struct Tag {
///     label: String,
///     color: Optional<String>,
/// }
///
/// impl Entity for Tag {
///     fn field_names(&self) -> &'static [&'static str] {
///         &["label", "color"]
///     }
///
///     fn field(&self, name: &str) -> Option<&dyn AsJson> {
///         match name {
///             "label" => Some(&self.label),
///             "color" => Some(&self.color),
///             _ => None,
///         }
///     }
/// }
///
/// entity_as_json!(Tag);
///
/// let tag = Tag { label: "urgent".into(), color: Optional::empty() };
/// assert_eq!(
///     tag.as_json().unwrap(),
///     serde_json::json!({ "label": "urgent", "color": null })
/// );
/// ```
#[macro_export]
macro_rules! entity_as_json {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::AsJson for $ty {
                fn as_json(&self) -> $crate::OptionalResult<$crate::Value> {
                    $crate::Entity::serialize(self).map($crate::Value::Object)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use optio_core::{Optional, OptionalError};
    use serde_json::json;

    struct Address {
        city: String,
        postcode: Optional<String>,
    }

    impl Entity for Address {
        fn field_names(&self) -> &'static [&'static str] {
            &["city", "postcode"]
        }

        fn field(&self, name: &str) -> Option<&dyn AsJson> {
            match name {
                "city" => Some(&self.city),
                "postcode" => Some(&self.postcode),
                _ => None,
            }
        }
    }

    crate::entity_as_json!(Address);
    optio_core::always_present!(Address);

    struct Person {
        name: String,
        age: Optional<u32>,
        address: Optional<Address>,
    }

    impl Entity for Person {
        fn field_names(&self) -> &'static [&'static str] {
            &["name", "age", "address", "legacy_id"]
        }

        fn field(&self, name: &str) -> Option<&dyn AsJson> {
            match name {
                "name" => Some(&self.name),
                "age" => Some(&self.age),
                "address" => match &self.address {
                    Optional::Present(address) => Some(address),
                    Optional::Absent => None,
                },
                _ => None,
            }
        }
    }

    #[test]
    fn test_serialize_listed_fields() {
        let person = Person {
            name: "ada".into(),
            age: Optional::present(36),
            address: Optional::empty(),
        };

        let rendered = person.serialize().unwrap();
        assert_eq!(
            Value::Object(rendered),
            json!({ "name": "ada", "age": 36, "address": null, "legacy_id": null })
        );
    }

    #[test]
    fn test_nested_entity_uses_capability() {
        let person = Person {
            name: "ada".into(),
            age: Optional::empty(),
            address: Optional::present(Address {
                city: "London".into(),
                postcode: Optional::empty(),
            }),
        };

        let rendered = person.serialize().unwrap();
        assert_eq!(rendered["address"], json!({ "city": "London", "postcode": null }));
        assert_eq!(rendered["age"], Value::Null);
    }

    #[test]
    fn test_every_listed_field_rendered() {
        let address = Address {
            city: "Paris".into(),
            postcode: Optional::present("75001".into()),
        };
        let rendered = address.serialize().unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered["postcode"], json!("75001"));
    }

    struct Heatmap {
        cells: Optional<BTreeMap<(u8, u8), u32>>,
    }

    impl Entity for Heatmap {
        fn field_names(&self) -> &'static [&'static str] {
            &["cells"]
        }

        fn field(&self, name: &str) -> Option<&dyn AsJson> {
            match name {
                "cells" => Some(&self.cells),
                _ => None,
            }
        }
    }

    crate::entity_as_json!(Heatmap);

    #[test]
    fn test_unrenderable_field_fails_record() {
        let mut cells = BTreeMap::new();
        cells.insert((0, 1), 7);
        let heatmap = Heatmap {
            cells: Optional::present(cells),
        };

        assert!(matches!(heatmap.serialize(), Err(OptionalError::Json(_))));
        assert!(heatmap.as_json().is_err());

        let empty = Heatmap {
            cells: Optional::empty(),
        };
        assert_eq!(empty.as_json().unwrap(), json!({ "cells": null }));
    }
}
