use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Listing intent, stored as the uppercase wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingType {
    /// Want to sell.
    #[sea_orm(string_value = "WTS")]
    Wts,
    /// Want to buy.
    #[sea_orm(string_value = "WTB")]
    Wtb,
    /// Want to rent out.
    #[sea_orm(string_value = "WTR")]
    Wtr,
}

/// SeaORM entity for the `properties` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub listing_type: ListingType,
    /// Asking price in the smallest currency unit.
    pub price: i64,
    /// Lot area in square meters.
    pub land_size: i32,
    /// Built area in square meters.
    pub building_size: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    /// Land certificate type (e.g. SHM, HGB); optional.
    pub certificate: Option<String>,
    pub address: String,
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::photos::Entity")]
    Photos,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::photos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photos.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProperty {
    pub title: String,
    pub description: String,
    pub listing_type: ListingType,
    pub price: i64,
    pub land_size: i32,
    pub building_size: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub certificate: Option<String>,
    pub address: String,
}

/// Partial update: only fields present in the body are written, so a client
/// sending `{"price": 0}` zeroes the price while an absent field is left
/// untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub listing_type: Option<ListingType>,
    pub price: Option<i64>,
    pub land_size: Option<i32>,
    pub building_size: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub certificate: Option<String>,
    pub address: Option<String>,
}
