use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::properties::{self, CreateProperty, UpdateProperty};
use crate::query::QuerySpec;

/// Insert a new property owned by `user_id`.
pub async fn insert_property(
    db: &DatabaseConnection,
    input: CreateProperty,
    user_id: Uuid,
) -> Result<properties::Model, DbErr> {
    let new_property = properties::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        listing_type: Set(input.listing_type),
        price: Set(input.price),
        land_size: Set(input.land_size),
        building_size: Set(input.building_size),
        bedrooms: Set(input.bedrooms),
        bathrooms: Set(input.bathrooms),
        certificate: Set(input.certificate),
        address: Set(input.address),
        user_id: Set(user_id),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_property.insert(db).await
}

/// Conjunction of storage predicates for the filters that are set. An unset
/// filter contributes nothing, which is not the same as matching a zero or
/// empty value.
pub fn filter_conditions(query: &QuerySpec) -> Condition {
    let mut cond = Condition::all();

    if let Some(min) = query.min_price {
        cond = cond.add(properties::Column::Price.gte(min));
    }
    if let Some(max) = query.max_price {
        cond = cond.add(properties::Column::Price.lte(max));
    }
    if let Some(listing_type) = query.listing_type {
        cond = cond.add(properties::Column::ListingType.eq(listing_type));
    }
    if let Some(n) = query.bedrooms {
        cond = cond.add(properties::Column::Bedrooms.gte(n));
    }
    if let Some(n) = query.bathrooms {
        cond = cond.add(properties::Column::Bathrooms.gte(n));
    }
    if let Some(certificate) = &query.certificate {
        cond = cond.add(properties::Column::Certificate.eq(certificate.as_str()));
    }
    if let Some(location) = &query.location {
        cond = cond.add(Expr::col(properties::Column::Address).ilike(format!("%{location}%")));
    }
    if let Some(title) = &query.title {
        cond = cond.add(Expr::col(properties::Column::Title).ilike(format!("%{title}%")));
    }

    cond
}

/// Base SELECT over one owner's properties with every applied filter. The
/// caller layers ordering and pagination on top; the row query and the total
/// count both run over this same predicate set.
pub fn filtered_select(owner_id: Uuid, query: &QuerySpec) -> Select<properties::Entity> {
    properties::Entity::find()
        .filter(properties::Column::UserId.eq(owner_id))
        .filter(filter_conditions(query))
}

/// Fetch one page of an owner's properties plus the total number of rows
/// matching the filters. The count runs before OFFSET/LIMIT are applied.
pub async fn find_with_filters(
    db: &DatabaseConnection,
    owner_id: Uuid,
    query: &QuerySpec,
) -> Result<(Vec<properties::Model>, u64), DbErr> {
    let base = filtered_select(owner_id, query);

    let total = base.clone().count(db).await?;

    let rows = base
        .order_by(query.sort_field.column(), query.sort_direction.order())
        .offset(query.offset())
        .limit(query.limit)
        .all(db)
        .await?;

    Ok((rows, total))
}

/// Fetch a single property, scoped to its owner.
pub async fn get_property_by_id(
    db: &DatabaseConnection,
    owner_id: Uuid,
    id: Uuid,
) -> Result<Option<properties::Model>, DbErr> {
    properties::Entity::find_by_id(id)
        .filter(properties::Column::UserId.eq(owner_id))
        .one(db)
        .await
}

/// Update an existing property. Only fields present in the input are
/// written; `updated_at` is stamped on every successful update.
pub async fn update_property(
    db: &DatabaseConnection,
    owner_id: Uuid,
    id: Uuid,
    input: UpdateProperty,
) -> Result<Option<properties::Model>, DbErr> {
    let Some(property) = get_property_by_id(db, owner_id, id).await? else {
        return Ok(None);
    };

    let mut active: properties::ActiveModel = property.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(listing_type) = input.listing_type {
        active.listing_type = Set(listing_type);
    }
    if let Some(price) = input.price {
        active.price = Set(price);
    }
    if let Some(land_size) = input.land_size {
        active.land_size = Set(land_size);
    }
    if let Some(building_size) = input.building_size {
        active.building_size = Set(building_size);
    }
    if let Some(bedrooms) = input.bedrooms {
        active.bedrooms = Set(bedrooms);
    }
    if let Some(bathrooms) = input.bathrooms {
        active.bathrooms = Set(bathrooms);
    }
    if let Some(certificate) = input.certificate {
        active.certificate = Set(Some(certificate));
    }
    if let Some(address) = input.address {
        active.address = Set(address);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await.map(Some)
}

/// Delete a property, scoped to its owner.
pub async fn delete_property(
    db: &DatabaseConnection,
    owner_id: Uuid,
    id: Uuid,
) -> Result<DeleteResult, DbErr> {
    properties::Entity::delete_many()
        .filter(properties::Column::Id.eq(id))
        .filter(properties::Column::UserId.eq(owner_id))
        .exec(db)
        .await
}
