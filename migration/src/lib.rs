pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_properties_table;
mod m20250601_000003_create_property_photos_table;
mod m20250618_000001_add_property_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_properties_table::Migration),
            Box::new(m20250601_000003_create_property_photos_table::Migration),
            Box::new(m20250618_000001_add_property_indexes::Migration),
        ]
    }
}
