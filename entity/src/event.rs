use sea_orm::entity::prelude::*;

/// A single Paralympic Games edition.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub event_type: String,
    pub year: i32,
    pub country: String,
    pub host: String,
    #[sea_orm(column_name = "NOC")]
    pub noc: String,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub duration: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub disabilities_included: Option<String>,
    pub countries: Option<i32>,
    pub events: Option<i32>,
    pub sports: Option<i32>,
    pub participants_m: Option<i32>,
    pub participants_f: Option<i32>,
    pub participants: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub highlights: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::Noc",
        to = "super::region::Column::Noc",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Region,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
