use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `property_photos` table and its columns.
#[derive(DeriveIden)]
enum PropertyPhotos {
    Table,
    Id,
    PropertyId,
    PhotoPath,
    Caption,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyPhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PropertyPhotos::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PropertyPhotos::PropertyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PropertyPhotos::PhotoPath)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PropertyPhotos::Caption).string().null())
                    .col(
                        ColumnDef::new(PropertyPhotos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_photos_property_id")
                            .from(PropertyPhotos::Table, PropertyPhotos::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyPhotos::Table).to_owned())
            .await
    }
}
