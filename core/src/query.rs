use std::cmp::Ordering;

use crate::cursor;
use crate::models::{FilterRequest, PageResult, Product, SortBy};

/// Filter, sort and paginate a catalog snapshot.
///
/// Never fails: unknown or malformed parameters fall back to their defaults
/// and an undecodable cursor selects the first page.
pub fn query_products(catalog: &[Product], request: &FilterRequest) -> PageResult {
    let mut filtered: Vec<&Product> = catalog
        .iter()
        .filter(|p| matches_name(p, request.name.as_deref()))
        .filter(|p| request.availability.matches(p))
        .filter(|p| request.max_price.map_or(true, |max| p.price <= max))
        .collect();

    // slice::sort_by is stable, so ties keep the filtered order
    match request.sort_by {
        SortBy::Name => filtered.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortBy::Price => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::None => {}
    }

    paginate(&filtered, request.page_size(), request.cursor.as_deref())
}

fn matches_name(product: &Product, name: Option<&str>) -> bool {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return true;
    };

    let term = name.to_lowercase();
    product.name.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
}

/// Case-insensitive order; on case-only differences lower case sorts first.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn paginate(filtered: &[&Product], page_size: usize, cursor: Option<&str>) -> PageResult {
    let total_pages = filtered.len().div_ceil(page_size);

    let requested = cursor.and_then(cursor::decode).unwrap_or(1);
    let current_page = requested.clamp(1, total_pages.max(1));

    let start = (current_page - 1).saturating_mul(page_size).min(filtered.len());
    let end = start.saturating_add(page_size).min(filtered.len());

    let products = filtered[start..end].iter().map(|p| (*p).clone()).collect();

    PageResult {
        products,
        next_cursor: (current_page < total_pages).then(|| cursor::encode(current_page + 1)),
        prev_cursor: (current_page > 1).then(|| cursor::encode(current_page - 1)),
        total_pages,
        current_page,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::Availability;

    fn product(id: u32, name: &str, price: f64, availability: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("Description of {}", name),
            price,
            availability,
            ratings: 4.0,
            image: format!("https://picsum.photos/seed/{}/400/300", id),
        }
    }

    /// 25 products, the first 10 in stock
    fn catalog() -> Vec<Product> {
        (1..=25)
            .map(|i| product(i, &format!("Item {:02}", i), f64::from(i) * 10.0, i <= 10))
            .collect()
    }

    #[test]
    fn test_first_page_of_unfiltered_catalog() {
        let result = query_products(&catalog(), &FilterRequest::default());

        assert_eq!(result.products.len(), 12);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.prev_cursor, None);
        assert_eq!(cursor::decode(result.next_cursor.as_deref().unwrap()), Some(2));
    }

    #[test]
    fn test_walk_all_pages() {
        let catalog = catalog();
        let mut request = FilterRequest::default();
        let mut seen = Vec::new();

        loop {
            let result = query_products(&catalog, &request);
            seen.extend(result.products.iter().map(|p| p.id));

            if result.current_page < result.total_pages {
                assert_eq!(result.products.len(), 12);
            }

            match result.next_cursor {
                Some(next) => request.cursor = Some(next),
                None => {
                    assert_eq!(result.current_page, 3);
                    assert_eq!(result.products.len(), 1);
                    assert_eq!(cursor::decode(result.prev_cursor.as_deref().unwrap()), Some(2));
                    break;
                }
            }
        }

        assert_eq!(seen, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_in_stock_only() {
        let request = FilterRequest {
            availability: Availability::InStock,
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.total_pages, 1);
        assert_eq!(result.products.len(), 10);
        assert!(result.products.iter().all(|p| p.availability));
        assert_eq!(result.next_cursor, None);
    }

    #[test]
    fn test_arriving_soon_only() {
        let request = FilterRequest {
            availability: Availability::ArrivingSoon,
            page_size: Some(5),
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.total_pages, 3);
        assert!(result.products.iter().all(|p| !p.availability));
    }

    #[test]
    fn test_empty_result() {
        let request = FilterRequest {
            name: Some("does not exist".to_string()),
            cursor: Some(cursor::encode(4)),
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.total_pages, 0);
        assert_eq!(result.current_page, 1);
        assert!(result.products.is_empty());
        assert_eq!(result.next_cursor, None);
        assert_eq!(result.prev_cursor, None);
    }

    #[test]
    fn test_name_matches_description_case_insensitive() {
        let mut catalog = catalog();
        catalog[3].description = "A sturdy WALNUT desk".to_string();

        let request = FilterRequest {
            name: Some("walnut".to_string()),
            ..Default::default()
        };
        let result = query_products(&catalog, &request);

        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].id, 4);
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let request = FilterRequest {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let request = FilterRequest {
            max_price: Some(50.0),
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.products.len(), 5);
        assert!(result.products.iter().all(|p| p.price <= 50.0));
    }

    #[test]
    fn test_zero_max_price_is_a_filter() {
        let mut catalog = catalog();
        catalog[7].price = 0.0;

        let request = FilterRequest {
            max_price: Some(0.0),
            ..Default::default()
        };
        let result = query_products(&catalog, &request);

        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].id, 8);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = vec![
            product(1, "c", 30.0, true),
            product(2, "a", 10.0, true),
            product(3, "b", 20.0, true),
        ];
        let request = FilterRequest {
            sort_by: SortBy::Price,
            ..Default::default()
        };
        let ids: Vec<u32> = query_products(&catalog, &request)
            .products
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let catalog = vec![
            product(1, "banana", 1.0, true),
            product(2, "Cherry", 1.0, true),
            product(3, "Apple", 1.0, true),
            product(4, "apple", 1.0, true),
        ];
        let request = FilterRequest {
            sort_by: SortBy::Name,
            ..Default::default()
        };
        let ids: Vec<u32> = query_products(&catalog, &request)
            .products
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![4, 3, 1, 2]);
    }

    #[test]
    fn test_sort_ties_keep_filtered_order() {
        let catalog = vec![
            product(1, "Lamp", 15.0, true),
            product(2, "Desk", 15.0, true),
            product(3, "Lamp", 5.0, true),
            product(4, "Desk", 15.0, true),
        ];

        let by_name = FilterRequest {
            sort_by: SortBy::Name,
            ..Default::default()
        };
        let ids: Vec<u32> = query_products(&catalog, &by_name)
            .products
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        let by_price = FilterRequest {
            sort_by: SortBy::Price,
            ..Default::default()
        };
        let ids: Vec<u32> = query_products(&catalog, &by_price)
            .products
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_bad_cursor_falls_back_to_first_page() {
        let request = FilterRequest {
            cursor: Some("%%%".to_string()),
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.current_page, 1);
        assert_eq!(result.products[0].id, 1);
    }

    #[test]
    fn test_cursor_past_the_end_is_clamped() {
        let request = FilterRequest {
            cursor: Some(cursor::encode(40)),
            ..Default::default()
        };
        let result = query_products(&catalog(), &request);

        assert_eq!(result.current_page, 3);
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.next_cursor, None);
    }

    #[test]
    fn test_same_request_same_result() {
        let catalog = catalog();
        let request = FilterRequest {
            name: Some("item 1".to_string()),
            sort_by: SortBy::Price,
            page_size: Some(4),
            cursor: Some(cursor::encode(2)),
            ..Default::default()
        };

        assert_eq!(query_products(&catalog, &request), query_products(&catalog, &request));
    }
}
