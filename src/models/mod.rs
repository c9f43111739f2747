pub mod photos;
pub mod properties;
pub mod users;
