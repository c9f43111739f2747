use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::properties as property_db;
use crate::error::ApiError;
use crate::models::properties::{CreateProperty, UpdateProperty};
use crate::query::{ListingParams, Paginated};

/// GET /api/properties — list the caller's properties with filtering,
/// sorting, and pagination.
///
/// Query params: `page`, `limit`, `sort_by`, `sort_order`, `min_price`,
/// `max_price`, `listing_type`, `bedrooms`, `bathrooms`, `certificate`,
/// `location`, `title`. Invalid values are silently replaced with defaults;
/// this endpoint never fails on parameter shape.
pub async fn get_properties(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    params: web::Query<ListingParams>,
) -> Result<HttpResponse, ApiError> {
    let query = params.normalize();

    let (rows, total) = property_db::find_with_filters(db.get_ref(), user.0.id, &query).await?;

    Ok(HttpResponse::Ok().json(Paginated::new(rows, &query, total)))
}

/// POST /api/properties — create a new property owned by the caller.
pub async fn create_property(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProperty>,
) -> Result<HttpResponse, ApiError> {
    let property = property_db::insert_property(db.get_ref(), body.into_inner(), user.0.id).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "data": property })))
}

/// GET /api/properties/{id} — fetch one of the caller's properties.
pub async fn get_property(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let property = property_db::get_property_by_id(db.get_ref(), user.0.id, id)
        .await?
        .ok_or(ApiError::NotFound("property"))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": property })))
}

/// PUT /api/properties/{id} — partially update one of the caller's
/// properties; only fields present in the body are written.
pub async fn update_property(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProperty>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let property = property_db::update_property(db.get_ref(), user.0.id, id, body.into_inner())
        .await?
        .ok_or(ApiError::NotFound("property"))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": property })))
}

/// DELETE /api/properties/{id} — delete one of the caller's properties.
pub async fn delete_property(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let result = property_db::delete_property(db.get_ref(), user.0.id, id).await?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("property"));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Property {id} deleted"),
    })))
}
