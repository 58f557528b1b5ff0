use serde::{Deserialize, Serialize};

/// Page size used when a request does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// A catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Non-negative price in the store currency
    pub price: f64,
    /// `true` = in stock, `false` = arriving soon
    pub availability: bool,
    /// Average rating, 0 to 5
    pub ratings: f64,
    /// Image URL
    pub image: String,
}

/// Sort order requested by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Keep the order produced by the filters (wire value `-`)
    #[default]
    #[serde(rename = "-")]
    None,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price")]
    Price,
}

impl SortBy {
    /// Lenient parse: anything unknown keeps the filtered order.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "name" => SortBy::Name,
            "price" => SortBy::Price,
            _ => SortBy::None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            SortBy::None => "-",
            SortBy::Name => "name",
            SortBy::Price => "price",
        }
    }
}

/// Stock filter requested by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    #[default]
    All,
    InStock,
    ArrivingSoon,
}

impl Availability {
    /// Lenient parse: anything unknown means no filtering.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "inStock" => Availability::InStock,
            "arrivingSoon" => Availability::ArrivingSoon,
            _ => Availability::All,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Availability::All => "all",
            Availability::InStock => "inStock",
            Availability::ArrivingSoon => "arrivingSoon",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Availability::All => true,
            Availability::InStock => product.availability,
            Availability::ArrivingSoon => !product.availability,
        }
    }
}

/// Filter, sort and pagination parameters for a catalog query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    /// Substring searched in name and description, case-insensitive
    pub name: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub availability: Availability,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Opaque page token from a previous result
    pub cursor: Option<String>,
    pub page_size: Option<i64>,
}

impl FilterRequest {
    /// Effective page size; missing or non-positive values fall back to the default.
    pub fn page_size(&self) -> usize {
        match self.page_size {
            Some(size) if size > 0 => usize::try_from(size).unwrap_or(DEFAULT_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a catalog query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub products: Vec<Product>,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
    pub total_pages: usize,
    /// 1-based
    pub current_page: usize,
}

impl PageResult {
    /// Whole catalog as a single page without cursors
    pub fn unpaginated(products: Vec<Product>) -> Self {
        PageResult {
            products,
            next_cursor: None,
            prev_cursor: None,
            total_pages: 1,
            current_page: 1,
        }
    }
}
