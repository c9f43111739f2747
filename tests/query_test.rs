///! Tests for the listing query pipeline: raw-parameter normalization,
///! pagination arithmetic, and the response envelope.
///!
///! Everything here is pure; no server or database is needed.
///!
///! Run with: `cargo test --test query_test`
use serde_json::json;

use realty_backend::models::properties::ListingType;
use realty_backend::query::{
    DEFAULT_LIMIT, DEFAULT_PAGE, ListingParams, Paginated, QuerySpec, SortDirection, SortField,
    offset, total_pages,
};

/// Helper: params with a single field set.
fn params(f: impl FnOnce(&mut ListingParams)) -> ListingParams {
    let mut p = ListingParams::default();
    f(&mut p);
    p
}

#[test]
fn test_empty_params_yield_defaults() {
    let query = ListingParams::default().normalize();

    assert_eq!(query.page, DEFAULT_PAGE);
    assert_eq!(query.limit, DEFAULT_LIMIT);
    assert_eq!(query.sort_field, SortField::CreatedAt);
    assert_eq!(query.sort_direction, SortDirection::Desc);
    assert_eq!(query, QuerySpec::default());
}

#[test]
fn test_page_zero_restores_default() {
    let query = params(|p| p.page = Some("0".to_string())).normalize();
    assert_eq!(query.page, 1);
}

#[test]
fn test_page_garbage_restores_default() {
    for raw in ["abc", "-3", "1.5", ""] {
        let query = params(|p| p.page = Some(raw.to_string())).normalize();
        assert_eq!(query.page, 1, "page {raw:?} should fall back to 1");
    }
}

#[test]
fn test_limit_out_of_range_restores_default() {
    let query = params(|p| p.limit = Some("500".to_string())).normalize();
    assert_eq!(query.limit, 10);

    let query = params(|p| p.limit = Some("0".to_string())).normalize();
    assert_eq!(query.limit, 10);
}

#[test]
fn test_limit_boundaries_are_accepted() {
    let query = params(|p| p.limit = Some("1".to_string())).normalize();
    assert_eq!(query.limit, 1);

    let query = params(|p| p.limit = Some("100".to_string())).normalize();
    assert_eq!(query.limit, 100);
}

#[test]
fn test_sort_by_outside_allow_list_is_discarded() {
    let query = params(|p| p.sort_by = Some("password".to_string())).normalize();
    assert_eq!(query.sort_field, SortField::CreatedAt);

    // A plausible-looking column that simply isn't sortable.
    let query = params(|p| p.sort_by = Some("address".to_string())).normalize();
    assert_eq!(query.sort_field, SortField::CreatedAt);
}

#[test]
fn test_sort_by_allow_list_members_are_accepted() {
    let cases = [
        ("id", SortField::Id),
        ("created_at", SortField::CreatedAt),
        ("price", SortField::Price),
        ("title", SortField::Title),
        ("bedrooms", SortField::Bedrooms),
        ("bathrooms", SortField::Bathrooms),
    ];

    for (raw, expected) in cases {
        let query = params(|p| p.sort_by = Some(raw.to_string())).normalize();
        assert_eq!(query.sort_field, expected, "sort_by {raw:?}");
    }
}

#[test]
fn test_sort_order_must_be_exact() {
    let query = params(|p| p.sort_order = Some("asc".to_string())).normalize();
    assert_eq!(query.sort_direction, SortDirection::Asc);

    // Not case-insensitive: anything but the exact strings falls back.
    for raw in ["ASC", "Desc", "sideways", ""] {
        let query = params(|p| p.sort_order = Some(raw.to_string())).normalize();
        assert_eq!(query.sort_direction, SortDirection::Desc, "sort_order {raw:?}");
    }
}

#[test]
fn test_price_bounds_validation() {
    let query = params(|p| p.min_price = Some("1000".to_string())).normalize();
    assert_eq!(query.min_price, Some(1000));

    // Zero means "not applied" for both bounds.
    let query = params(|p| p.min_price = Some("0".to_string())).normalize();
    assert_eq!(query.min_price, None);

    let query = params(|p| p.max_price = Some("0".to_string())).normalize();
    assert_eq!(query.max_price, None);

    let query = params(|p| p.min_price = Some("-5".to_string())).normalize();
    assert_eq!(query.min_price, None);

    let query = params(|p| p.max_price = Some("cheap".to_string())).normalize();
    assert_eq!(query.max_price, None);
}

#[test]
fn test_listing_type_filter_accepts_only_searchable_kinds() {
    let query = params(|p| p.listing_type = Some("WTS".to_string())).normalize();
    assert_eq!(query.listing_type, Some(ListingType::Wts));

    let query = params(|p| p.listing_type = Some("WTR".to_string())).normalize();
    assert_eq!(query.listing_type, Some(ListingType::Wtr));

    for raw in ["WTB", "wts", "condo", ""] {
        let query = params(|p| p.listing_type = Some(raw.to_string())).normalize();
        assert_eq!(query.listing_type, None, "listing_type {raw:?}");
    }
}

#[test]
fn test_room_thresholds_reject_negatives() {
    let query = params(|p| p.bedrooms = Some("2".to_string())).normalize();
    assert_eq!(query.bedrooms, Some(2));

    let query = params(|p| p.bedrooms = Some("-1".to_string())).normalize();
    assert_eq!(query.bedrooms, None);

    // A threshold of zero constrains nothing and is treated as unset.
    let query = params(|p| p.bedrooms = Some("0".to_string())).normalize();
    assert_eq!(query.bedrooms, None);

    let query = params(|p| p.bathrooms = Some("many".to_string())).normalize();
    assert_eq!(query.bathrooms, None);
}

#[test]
fn test_text_filters_require_non_empty() {
    let query = params(|p| p.location = Some("".to_string())).normalize();
    assert_eq!(query.location, None);

    let query = params(|p| {
        p.certificate = Some("SHM".to_string());
        p.location = Some("Bandung".to_string());
        p.title = Some("villa".to_string());
    })
    .normalize();
    assert_eq!(query.certificate.as_deref(), Some("SHM"));
    assert_eq!(query.location.as_deref(), Some("Bandung"));
    assert_eq!(query.title.as_deref(), Some("villa"));
}

#[test]
fn test_normalize_is_idempotent() {
    let raw = params(|p| {
        p.page = Some("3".to_string());
        p.limit = Some("25".to_string());
        p.sort_by = Some("price".to_string());
        p.sort_order = Some("asc".to_string());
        p.min_price = Some("100".to_string());
        p.listing_type = Some("WTR".to_string());
        p.bedrooms = Some("2".to_string());
        p.location = Some("Jakarta".to_string());
    });

    assert_eq!(raw.normalize(), raw.normalize());
}

#[test]
fn test_offset_arithmetic() {
    assert_eq!(offset(1, 10), 0);
    assert_eq!(offset(2, 5), 5);
    assert_eq!(offset(3, 10), 20);

    for page in 1..=20u64 {
        for limit in [1u64, 25, 100] {
            assert_eq!(offset(page, limit), (page - 1) * limit);
        }
    }
}

#[test]
fn test_total_pages_arithmetic() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(20, 10), 2);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(5, 0), 0);
}

#[test]
fn test_envelope_omits_filters_when_none_applied() {
    let query = QuerySpec::default();
    let envelope = Paginated::new(Vec::<i32>::new(), &query, 0);

    let value = serde_json::to_value(envelope).unwrap();
    assert!(value.get("filters").is_none(), "filters must be absent, not empty");
    assert_eq!(value["pagination"]["total_pages"], 0);
}

#[test]
fn test_envelope_echoes_only_applied_filters() {
    let query = QuerySpec {
        min_price: Some(100),
        ..QuerySpec::default()
    };
    let envelope = Paginated::new(Vec::<i32>::new(), &query, 1);

    let value = serde_json::to_value(envelope).unwrap();
    assert_eq!(value["filters"], json!({ "min_price": 100 }));
}

#[test]
fn test_envelope_pagination_metadata() {
    let query = QuerySpec {
        page: 2,
        limit: 5,
        min_price: Some(1000),
        ..QuerySpec::default()
    };
    let envelope = Paginated::new(vec![1, 2, 3, 4, 5], &query, 12);

    let value = serde_json::to_value(envelope).unwrap();
    assert_eq!(
        value["pagination"],
        json!({ "page": 2, "limit": 5, "total": 12, "total_pages": 3 })
    );
    assert_eq!(value["filters"], json!({ "min_price": 1000 }));
    assert_eq!(value["data"].as_array().unwrap().len(), 5);
}

#[test]
fn test_past_the_end_page_is_well_formed() {
    let query = params(|p| {
        p.page = Some("99".to_string());
        p.limit = Some("10".to_string());
    })
    .normalize();

    // The storage query would return no rows; the envelope still carries
    // the true totals.
    let envelope = Paginated::new(Vec::<i32>::new(), &query, 25);
    let value = serde_json::to_value(envelope).unwrap();

    assert_eq!(value["pagination"]["page"], 99);
    assert_eq!(value["pagination"]["total_pages"], 3);
    assert_eq!(value["data"].as_array().unwrap().len(), 0);
}
