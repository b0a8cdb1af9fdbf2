use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub user_name: String,
    pub email: String,
    pub image: Option<String>,
    pub is_online: bool,
    pub connected_at: Option<DateTimeWithTimeZone>,
    pub disconnected_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

// Requests and friendships each reference users twice, so the
// relations are declared on their side only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
