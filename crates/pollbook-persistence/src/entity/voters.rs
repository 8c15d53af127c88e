//! `SeaORM` Entity for voters table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "voters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub number: String,
    pub name: String,
    pub voted: bool,
    pub notes: Option<String>,
    pub ballot_box_id: Option<String>,
    pub running_number: Option<i32>,
    /// UTC ISO-8601 with millisecond precision, set once at check-in
    pub timestamp: Option<String>,
    pub checked_in_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::operators::Entity",
        from = "Column::CheckedInBy",
        to = "super::operators::Column::Username",
        on_delete = "SetNull"
    )]
    Operators,
}

impl Related<super::operators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
