use sea_orm::*;
use uuid::Uuid;

use crate::models::photos::{self, CreatePhoto};

/// Attach a photo to a property. Ownership of the property is the caller's
/// responsibility to verify.
pub async fn insert_photo(
    db: &DatabaseConnection,
    property_id: Uuid,
    input: CreatePhoto,
) -> Result<photos::Model, DbErr> {
    let new_photo = photos::ActiveModel {
        id: Set(Uuid::new_v4()),
        property_id: Set(property_id),
        photo_path: Set(input.photo_path),
        caption: Set(input.caption),
        created_at: Set(chrono::Utc::now()),
    };

    new_photo.insert(db).await
}

/// Fetch all photos of a property, oldest first.
pub async fn get_photos_by_property(
    db: &DatabaseConnection,
    property_id: Uuid,
) -> Result<Vec<photos::Model>, DbErr> {
    photos::Entity::find()
        .filter(photos::Column::PropertyId.eq(property_id))
        .order_by_asc(photos::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single photo by ID.
pub async fn get_photo_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<photos::Model>, DbErr> {
    photos::Entity::find_by_id(id).one(db).await
}

/// Delete a photo by ID.
pub async fn delete_photo(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    photos::Entity::delete_by_id(id).exec(db).await
}
