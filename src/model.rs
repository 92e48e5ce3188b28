//! Item record shapes
//!
//! Two shapes travel over the wire:
//! - `ItemCreate`: the POST body, no identifier
//! - `Item`: the full record, identifier assigned by the store
//!
//! Type checking happens during deserialization. Values are otherwise
//! accepted as-is (empty names and non-positive prices included).

use serde::{Deserialize, Serialize};

/// Payload for creating a new item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub price: f64,
}

/// A persisted item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, opaque at the API boundary
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Item {
    /// Attach an identifier to a create payload
    pub fn from_create(id: impl Into<String>, item: ItemCreate) -> Self {
        Self {
            id: id.into(),
            name: item.name,
            price: item.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_create_keeps_fields() {
        let create = ItemCreate {
            name: "Widget".to_string(),
            price: 9.99,
        };
        let item = Item::from_create("abc", create);

        assert_eq!(item.id, "abc");
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
    }

    #[test]
    fn test_create_rejects_string_price() {
        let result: Result<ItemCreate, _> =
            serde_json::from_str(r#"{"name": "Widget", "price": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_requires_name() {
        let result: Result<ItemCreate, _> = serde_json::from_str(r#"{"price": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_ignores_client_id() {
        let create: ItemCreate =
            serde_json::from_str(r#"{"id": "client", "name": "Widget", "price": 1}"#).unwrap();
        assert_eq!(create.name, "Widget");
        assert_eq!(create.price, 1.0);
    }

    #[test]
    fn test_negative_price_accepted() {
        let create: ItemCreate =
            serde_json::from_str(r#"{"name": "Refund", "price": -5.0}"#).unwrap();
        assert_eq!(create.price, -5.0);
    }

    #[test]
    fn test_item_serialization() {
        let item = Item {
            id: "65f0c0ffee".to_string(),
            name: "Widget".to_string(),
            price: 12.5,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "65f0c0ffee", "name": "Widget", "price": 12.5})
        );
    }
}
