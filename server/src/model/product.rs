use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use storefront_core::{Availability, FilterRequest, PageResult, Product, SortBy};

/// Filter request as sent by clients.
///
/// Every field is optional and lenient: a value of the wrong type is read as
/// absent, and unknown enum strings fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductFiltersDto {
    /// Case-insensitive substring of name or description
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// `name`, `price` or `-`
    #[serde(default, deserialize_with = "lenient_string")]
    pub sort_by: Option<String>,
    /// `inStock`, `arrivingSoon` or `all`
    #[serde(default, deserialize_with = "lenient_string")]
    pub availability: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_price: Option<f64>,
    /// Opaque token from `nextCursor` / `prevCursor`
    #[serde(default, deserialize_with = "lenient_string")]
    pub cursor: Option<String>,
    /// Defaults to 12
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page_size: Option<i64>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Value::deserialize(deserializer)?
        .as_str()
        .map(str::to_string))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

// Fractional sizes read as absent
fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_i64())
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedProductsDto {
    pub products: Vec<Product>,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
    pub total_pages: usize,
    pub current_page: usize,
}

impl From<ProductFiltersDto> for FilterRequest {
    fn from(dto: ProductFiltersDto) -> Self {
        FilterRequest {
            name: dto.name,
            sort_by: dto
                .sort_by
                .as_deref()
                .map(SortBy::from_wire)
                .unwrap_or_default(),
            availability: dto
                .availability
                .as_deref()
                .map(Availability::from_wire)
                .unwrap_or_default(),
            max_price: dto.max_price,
            cursor: dto.cursor,
            page_size: dto.page_size,
        }
    }
}

impl From<PageResult> for PaginatedProductsDto {
    fn from(page: PageResult) -> Self {
        PaginatedProductsDto {
            products: page.products,
            next_cursor: page.next_cursor,
            prev_cursor: page.prev_cursor,
            total_pages: page.total_pages,
            current_page: page.current_page,
        }
    }
}
