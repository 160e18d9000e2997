use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serializer::Introspect;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity as the domain sees it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Price in the store currency
    pub price: f64,
    /// Weight in grams
    pub weight: f64,
    /// Creation timestamp (UTC, naive)
    pub created: NaiveDateTime,
}

/// DTO for creating or updating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub weight: f64,
}

/// Read model returned by the HTTP API and fed to the document
/// serializers. Field order matters to the generated documents.
#[derive(Debug, Clone, PartialEq, Serialize, Introspect, ToSchema)]
pub struct InfoProductDto {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub weight: f64,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Page size (default 20)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// 1-based page number (default 1)
    #[serde(default = "default_page_number")]
    pub page_number: usize,
}

fn default_page_size() -> usize {
    20
}

fn default_page_number() -> usize {
    1
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_number: default_page_number(),
        }
    }
}

impl ProductFilter {
    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }

    // Saturating: page numbers are caller-controlled and may be huge.
    pub fn offset(&self) -> u64 {
        (self.page_number.saturating_sub(1) as u64).saturating_mul(self.page_size as u64)
    }
}

impl Product {
    /// Create a new product from the DTO with a fresh id and timestamp.
    pub fn new(input: ProductDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
            weight: input.weight,
            created: Utc::now().naive_utc(),
        }
    }

    /// Apply updatable fields from the DTO. Id and creation timestamp
    /// are preserved.
    pub fn apply_update(&mut self, update: ProductDto) {
        self.name = update.name;
        self.price = update.price;
        self.weight = update.weight;
    }
}

impl From<Product> for InfoProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            weight: product.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            price: 10.0,
            weight: 5.0,
        }
    }

    #[test]
    fn new_product_gets_fresh_id() {
        let a = Product::new(dto("a"));
        let b = Product::new(dto("b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_preserves_id_and_created() {
        let mut product = Product::new(dto("before"));
        let id = product.id;
        let created = product.created;

        product.apply_update(ProductDto {
            name: "after".to_string(),
            price: 99.0,
            weight: 1.0,
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created, created);
        assert_eq!(product.name, "after");
        assert_eq!(product.price, 99.0);
    }

    #[test]
    fn filter_defaults_and_offset() {
        let filter = ProductFilter::default();
        assert_eq!(filter.limit(), 20);
        assert_eq!(filter.offset(), 0);

        let page_two = ProductFilter {
            page_size: 10,
            page_number: 3,
        };
        assert_eq!(page_two.offset(), 20);

        // Page number 0 behaves like page 1
        let zero = ProductFilter {
            page_size: 10,
            page_number: 0,
        };
        assert_eq!(zero.offset(), 0);
    }

    #[test]
    fn filter_offset_saturates_on_huge_pages() {
        let huge = ProductFilter {
            page_size: 2,
            page_number: usize::MAX,
        };
        assert_eq!(huge.offset(), u64::MAX);

        let huge_size = ProductFilter {
            page_size: usize::MAX,
            page_number: usize::MAX,
        };
        assert_eq!(huge_size.offset(), u64::MAX);
    }

    #[test]
    fn dto_validation_rejects_bad_input() {
        assert!(dto("ok").validate().is_ok());
        assert!(dto("").validate().is_err());
        assert!(ProductDto {
            name: "x".to_string(),
            price: -1.0,
            weight: 5.0,
        }
        .validate()
        .is_err());
    }
}
