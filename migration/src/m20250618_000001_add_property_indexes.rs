use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Properties {
    Table,
    UserId,
    Price,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PropertyPhotos {
    Table,
    PropertyId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on properties.user_id for owner-scoped listing queries
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_user_id")
                    .table(Properties::Table)
                    .col(Properties::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on properties.price for range filters and price sorting
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_price")
                    .table(Properties::Table)
                    .col(Properties::Price)
                    .to_owned(),
            )
            .await?;

        // Index on properties.created_at for the default sort order
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_created_at")
                    .table(Properties::Table)
                    .col(Properties::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Index on property_photos.property_id for fetching a listing's photos
        manager
            .create_index(
                Index::create()
                    .name("idx_property_photos_property_id")
                    .table(PropertyPhotos::Table)
                    .col(PropertyPhotos::PropertyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_properties_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_properties_price").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_properties_created_at").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_property_photos_property_id")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
