use serde::{Deserialize, Serialize};

/// Producto del catálogo. Varias columnas son NULLables en el backend,
/// de ahí los `Option`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub created_by: Option<i64>,
    pub creator_username: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

impl Product {
    /// Tags separados por coma, ya limpios
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.created_by == Some(user_id)
    }
}

/// Payload de alta/edición de producto
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub tags: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_list_splits_and_trims() {
        let product = Product {
            id: 1,
            name: "MacBook Pro".to_string(),
            description: None,
            price: 1999.0,
            category: Some("Electronics".to_string()),
            tags: Some("laptop, apple ,development,,creative".to_string()),
            created_by: Some(1),
            creator_username: Some("admin".to_string()),
            created_at: None,
            updated_at: None,
            is_active: true,
        };
        assert_eq!(product.tag_list(), vec!["laptop", "apple", "development", "creative"]);
    }

    #[test]
    fn deserializes_backend_nulls() {
        let json = r#"{
            "id": 7,
            "name": "Coffee Maker",
            "description": null,
            "price": 89.99,
            "category": null,
            "tags": null,
            "created_by": null,
            "creator_username": null,
            "created_at": "2024-03-01T09:30:00.123456",
            "updated_at": null,
            "is_active": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Coffee Maker");
        assert!(product.tag_list().is_empty());
        assert!(!product.is_owned_by(7));
    }
}
