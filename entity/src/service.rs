use sea_orm::entity::prelude::*;

/// A bookable service offered by a business.
///
/// `duration_minutes` is the billable length of the appointment;
/// `buffer_minutes` is idle time appended after it during which no new
/// appointment may start. Their sum is the slot width used by the
/// availability walk.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub buffer_minutes: i32,
    pub price_amount: Option<f64>,
    pub price_currency: String,
    pub is_active: bool,
    pub color: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    pub fn total_slot_minutes(&self) -> i32 {
        self.duration_minutes + self.buffer_minutes
    }
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
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
