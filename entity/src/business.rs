use sea_orm::entity::prelude::*;

/// Category a business advertises itself under, stored as a short slug.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Category {
    #[sea_orm(string_value = "hairdresser")]
    Hairdresser,
    #[sea_orm(string_value = "doctor")]
    Doctor,
    #[sea_orm(string_value = "beauty")]
    Beauty,
    #[sea_orm(string_value = "spa")]
    Spa,
    #[sea_orm(string_value = "fitness")]
    Fitness,
    #[sea_orm(string_value = "other")]
    Other,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Hairdresser => "Hairdresser",
            Category::Doctor => "Doctor",
            Category::Beauty => "Beauty salon",
            Category::Spa => "SPA",
            Category::Fitness => "Fitness",
            Category::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "business")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub category: Category,
    pub description: String,
    pub email: String,
    pub phone_number: String,
    pub website_url: String,
    /// IANA timezone name, e.g. "Europe/Warsaw".
    pub timezone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub google_calendar_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::opening_hour::Entity")]
    OpeningHour,
    #[sea_orm(has_many = "super::service::Entity")]
    Service,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::opening_hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpeningHour.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
