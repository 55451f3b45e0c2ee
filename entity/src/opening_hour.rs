use sea_orm::entity::prelude::*;

/// Weekly opening hours, one row per (business, weekday).
///
/// `day_of_week` uses the 0=Monday .. 6=Sunday convention. When
/// `is_closed` is false both time bounds must be present and
/// `open_time < close_time`; the write path enforces this.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "opening_hour")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_id: Uuid,
    pub day_of_week: i32,
    pub is_closed: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business::Entity",
        from = "Column::BusinessId",
        to = "super::business::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Business,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
