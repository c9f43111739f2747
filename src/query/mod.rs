use sea_orm::Order;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::models::properties;
use crate::models::properties::ListingType;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Raw query-string parameters of `GET /api/properties`.
///
/// Every field is an optional string so extraction can never fail on a
/// malformed value; [`ListingParams::normalize`] replaces anything invalid
/// or out of range with the defaults instead of surfacing an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub listing_type: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub certificate: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
}

impl ListingParams {
    /// Turn raw parameters into a validated [`QuerySpec`].
    ///
    /// Pure and deterministic: the same input always yields the same result,
    /// so calling it twice is idempotent.
    pub fn normalize(&self) -> QuerySpec {
        let page = self
            .page
            .as_deref()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE);

        let limit = self
            .limit
            .as_deref()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|l| (1..=MAX_LIMIT).contains(l))
            .unwrap_or(DEFAULT_LIMIT);

        let sort_field = self
            .sort_by
            .as_deref()
            .and_then(SortField::parse)
            .unwrap_or(SortField::CreatedAt);

        let sort_direction = self
            .sort_order
            .as_deref()
            .and_then(SortDirection::parse)
            .unwrap_or(SortDirection::Desc);

        // Zero is the "not applied" value for the numeric filters: a price
        // floor or room threshold of 0 constrains nothing and is dropped.
        let min_price = self
            .min_price
            .as_deref()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|p| *p > 0);

        let max_price = self
            .max_price
            .as_deref()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|p| *p > 0);

        let listing_type = self.listing_type.as_deref().and_then(|v| match v {
            "WTS" => Some(ListingType::Wts),
            "WTR" => Some(ListingType::Wtr),
            _ => None,
        });

        let bedrooms = self
            .bedrooms
            .as_deref()
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|n| *n > 0);

        let bathrooms = self
            .bathrooms
            .as_deref()
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|n| *n > 0);

        QuerySpec {
            page,
            limit,
            sort_field,
            sort_direction,
            min_price,
            max_price,
            listing_type,
            bedrooms,
            bathrooms,
            certificate: non_empty(&self.certificate),
            location: non_empty(&self.location),
            title: non_empty(&self.title),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Validated, typed listing query. Built fresh per request and discarded
/// after the query executes; an unset filter places no constraint at all.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub page: u64,
    pub limit: u64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub listing_type: Option<ListingType>,
    /// Minimum bedroom count ("at least N", not an exact match).
    pub bedrooms: Option<i32>,
    /// Minimum bathroom count ("at least N", not an exact match).
    pub bathrooms: Option<i32>,
    pub certificate: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_field: SortField::CreatedAt,
            sort_direction: SortDirection::Desc,
            min_price: None,
            max_price: None,
            listing_type: None,
            bedrooms: None,
            bathrooms: None,
            certificate: None,
            location: None,
            title: None,
        }
    }
}

impl QuerySpec {
    /// OFFSET for the paginated row query.
    pub fn offset(&self) -> u64 {
        offset(self.page, self.limit)
    }

    /// The filters that are actually applied, keyed by their wire names.
    /// Empty when the request carried no optional filter.
    pub fn applied_filters(&self) -> Map<String, Value> {
        let mut filters = Map::new();

        if let Some(min) = self.min_price {
            filters.insert("min_price".to_string(), min.into());
        }
        if let Some(max) = self.max_price {
            filters.insert("max_price".to_string(), max.into());
        }
        if let Some(listing_type) = self.listing_type {
            filters.insert("listing_type".to_string(), json!(listing_type));
        }
        if let Some(n) = self.bedrooms {
            filters.insert("bedrooms".to_string(), n.into());
        }
        if let Some(n) = self.bathrooms {
            filters.insert("bathrooms".to_string(), n.into());
        }
        if let Some(certificate) = &self.certificate {
            filters.insert("certificate".to_string(), certificate.clone().into());
        }
        if let Some(location) = &self.location {
            filters.insert("location".to_string(), location.clone().into());
        }
        if let Some(title) = &self.title {
            filters.insert("title".to_string(), title.clone().into());
        }

        filters
    }
}

/// The closed set of sortable columns. Anything outside this enum cannot be
/// expressed as a sort clause, so an attacker-controlled `sort_by` can never
/// reach the generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    CreatedAt,
    Price,
    Title,
    Bedrooms,
    Bathrooms,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "created_at" => Some(Self::CreatedAt),
            "price" => Some(Self::Price),
            "title" => Some(Self::Title),
            "bedrooms" => Some(Self::Bedrooms),
            "bathrooms" => Some(Self::Bathrooms),
            _ => None,
        }
    }

    pub fn column(self) -> properties::Column {
        match self {
            Self::Id => properties::Column::Id,
            Self::CreatedAt => properties::Column::CreatedAt,
            Self::Price => properties::Column::Price,
            Self::Title => properties::Column::Title,
            Self::Bedrooms => properties::Column::Bedrooms,
            Self::Bathrooms => properties::Column::Bathrooms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// OFFSET for a LIMIT/OFFSET query; `page` is 1-based.
pub fn offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1) * limit
}

/// Number of pages needed to cover `total` rows, or 0 when `limit` is 0.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Pagination metadata echoed alongside every listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Uniform response envelope for paginated listings. The `filters` map is
/// left out of the JSON entirely when no optional filter was applied, so
/// clients must tolerate its absence.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
}

impl<T: Serialize> Paginated<T> {
    /// Assemble the envelope from the fetched page, the query that produced
    /// it, and the total row count before pagination.
    pub fn new(data: Vec<T>, query: &QuerySpec, total: u64) -> Self {
        let filters = query.applied_filters();

        Self {
            data,
            pagination: PaginationMeta {
                page: query.page,
                limit: query.limit,
                total,
                total_pages: total_pages(total, query.limit),
            },
            filters: (!filters.is_empty()).then_some(filters),
        }
    }
}
