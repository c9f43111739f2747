use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::photos as photo_db;
use crate::db::properties as property_db;
use crate::error::ApiError;
use crate::models::photos::CreatePhoto;

/// POST /api/properties/{id}/photos — attach a photo to one of the caller's
/// properties.
pub async fn add_property_photo(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreatePhoto>,
) -> Result<HttpResponse, ApiError> {
    let property_id = path.into_inner();

    // A photo can only be attached to a property the caller owns; someone
    // else's property is indistinguishable from a missing one.
    property_db::get_property_by_id(db.get_ref(), user.0.id, property_id)
        .await?
        .ok_or(ApiError::NotFound("property"))?;

    let photo = photo_db::insert_photo(db.get_ref(), property_id, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "data": photo })))
}

/// GET /api/properties/{id}/photos — list the photos of one of the caller's
/// properties.
pub async fn get_property_photos(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let property_id = path.into_inner();

    property_db::get_property_by_id(db.get_ref(), user.0.id, property_id)
        .await?
        .ok_or(ApiError::NotFound("property"))?;

    let photos = photo_db::get_photos_by_property(db.get_ref(), property_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": photos })))
}

/// DELETE /api/photos/{id} — delete a photo whose parent property the
/// caller owns.
pub async fn delete_photo(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let photo = photo_db::get_photo_by_id(db.get_ref(), id)
        .await?
        .ok_or(ApiError::NotFound("photo"))?;

    property_db::get_property_by_id(db.get_ref(), user.0.id, photo.property_id)
        .await?
        .ok_or(ApiError::NotFound("photo"))?;

    photo_db::delete_photo(db.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Photo {id} deleted"),
    })))
}
