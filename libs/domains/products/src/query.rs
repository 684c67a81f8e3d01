//! Search, category filter, paging and statistics over a product snapshot.
//!
//! Everything here is pure; the service hands in a copy of the store.

use std::collections::BTreeMap;

use crate::models::{CategoryStats, ListQuery, Product, ProductPage};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Lenient integer parse of a query value.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits is read (`"2abc"` is 2). A `0x`/`0X` prefix switches to
/// hex digits (`"0x1f"` is 31). No digits, or a result of zero, yields
/// `default`. Out-of-range values saturate.
pub fn parse_int_or(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };

    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return default;
    }

    let value = digits.into_iter().fold(0_i64, |acc, digit| {
        let next = acc.saturating_mul(i64::from(radix));
        if negative {
            next.saturating_sub(digit)
        } else {
            next.saturating_add(digit)
        }
    });

    if value == 0 { default } else { value }
}

/// Keeps products whose name contains `term`, ignoring case. A blank term keeps everything.
pub fn apply_search(products: Vec<Product>, term: Option<&str>) -> Vec<Product> {
    match term.filter(|t| !t.is_empty()) {
        Some(term) => {
            let needle = term.to_lowercase();
            products
                .into_iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => products,
    }
}

/// Keeps products whose category equals `category`, ignoring case.
pub fn apply_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => {
            let wanted = category.to_lowercase();
            products
                .into_iter()
                .filter(|p| p.category.to_lowercase() == wanted)
                .collect()
        }
        None => products,
    }
}

// Negative positions count back from the end; everything is clamped to 0..=len.
fn resolve_index(index: i64, len: usize) -> usize {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 {
        len.saturating_add(index).max(0)
    } else {
        index.min(len)
    };
    usize::try_from(resolved).unwrap_or(0)
}

/// Returns the window `[(page - 1) * limit, page * limit)` of `products`.
///
/// Out-of-range windows are empty rather than an error.
pub fn paginate(products: Vec<Product>, page: i64, limit: i64) -> Vec<Product> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    let end = page.saturating_mul(limit);

    let len = products.len();
    let start = resolve_index(start, len);
    let end = resolve_index(end, len);
    if start >= end {
        return Vec::new();
    }

    products.into_iter().skip(start).take(end - start).collect()
}

/// Runs the full listing pipeline: search, then category, then paging.
pub fn list_page(products: Vec<Product>, query: &ListQuery) -> ProductPage {
    let filtered = apply_search(products, query.search.as_deref());
    let filtered = apply_category(filtered, query.category.as_deref());

    let page = parse_int_or(query.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_int_or(query.limit.as_deref(), DEFAULT_LIMIT);

    ProductPage {
        total: filtered.len(),
        page,
        limit,
        products: paginate(filtered, page, limit),
    }
}

/// Counts products per exact category string.
pub fn category_stats(products: &[Product]) -> CategoryStats {
    let mut stats = BTreeMap::new();
    for product in products {
        *stats.entry(product.category.clone()).or_insert(0) += 1;
    }
    CategoryStats { stats }
}
