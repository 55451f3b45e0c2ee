use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::util::time::{format_hhmm, weekday_name};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BusinessListDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub city: String,
    pub address_line1: String,
    pub address_line2: String,
    pub postal_code: String,
    pub country: String,
    pub phone_number: String,
    pub website_url: String,
    pub services_count: u64,
}

impl BusinessListDto {
    pub fn from_model(business: entity::business::Model, services_count: u64) -> Self {
        Self {
            id: business.id,
            name: business.name,
            slug: business.slug,
            category: category_slug(&business.category).to_string(),
            description: business.description,
            city: business.city,
            address_line1: business.address_line1,
            address_line2: business.address_line2,
            postal_code: business.postal_code,
            country: business.country,
            phone_number: business.phone_number,
            website_url: business.website_url,
            services_count,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BusinessDetailDto {
    #[serde(flatten)]
    pub summary: BusinessListDto,
    pub email: String,
    pub timezone: String,
    pub opening_hours: Vec<OpeningHourDto>,
    pub services: Vec<ServiceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct OpeningHourDto {
    pub day_of_week: i32,
    pub day_name: String,
    pub is_closed: bool,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

impl OpeningHourDto {
    pub fn from_model(hours: entity::opening_hour::Model) -> Self {
        Self {
            day_of_week: hours.day_of_week,
            day_name: weekday_name(hours.day_of_week).to_string(),
            is_closed: hours.is_closed,
            open_time: hours.open_time.map(format_hhmm),
            close_time: hours.close_time.map(format_hhmm),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ServiceDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub buffer_minutes: i32,
    pub total_slot_minutes: i32,
    pub price_amount: Option<f64>,
    pub price_currency: String,
    pub is_active: bool,
    pub color: String,
}

impl ServiceDto {
    pub fn from_model(service: entity::service::Model) -> Self {
        Self {
            id: service.id,
            total_slot_minutes: service.total_slot_minutes(),
            name: service.name,
            description: service.description,
            duration_minutes: service.duration_minutes,
            buffer_minutes: service.buffer_minutes,
            price_amount: service.price_amount,
            price_currency: service.price_currency,
            is_active: service.is_active,
            color: service.color,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct CategoryCountDto {
    pub slug: String,
    pub name: String,
    pub count: i64,
}

/// Query parameters for the business listing.
#[derive(Deserialize, Debug)]
pub struct BusinessListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Query parameters for the availability endpoint.
#[derive(Deserialize, Debug)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub service_id: Uuid,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct AvailabilityDto {
    pub date: NaiveDate,
    pub service_id: Uuid,
    /// Free slot starts as zero-padded `HH:MM` strings, ascending.
    pub slots: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateServiceDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub buffer_minutes: i32,
    pub price_amount: Option<f64>,
    #[serde(default = "default_currency")]
    pub price_currency: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub color: String,
}

/// Full-replace service update payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateServiceDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub buffer_minutes: i32,
    pub price_amount: Option<f64>,
    #[serde(default = "default_currency")]
    pub price_currency: String,
    pub is_active: bool,
    #[serde(default)]
    pub color: String,
}

/// Opening-hours write payload; times are `HH:MM` strings.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct OpeningHourWriteDto {
    pub day_of_week: i32,
    #[serde(default)]
    pub is_closed: bool,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

/// Owner-dashboard appointment counts.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct BusinessStatsDto {
    pub total: u64,
    pub upcoming: u64,
    pub confirmed: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub last_30_days: u64,
}

pub fn category_slug(category: &entity::business::Category) -> &'static str {
    match category {
        entity::business::Category::Hairdresser => "hairdresser",
        entity::business::Category::Doctor => "doctor",
        entity::business::Category::Beauty => "beauty",
        entity::business::Category::Spa => "spa",
        entity::business::Category::Fitness => "fitness",
        entity::business::Category::Other => "other",
    }
}

/// Parses a category slug from a query parameter.
pub fn parse_category(value: &str) -> Option<entity::business::Category> {
    match value {
        "hairdresser" => Some(entity::business::Category::Hairdresser),
        "doctor" => Some(entity::business::Category::Doctor),
        "beauty" => Some(entity::business::Category::Beauty),
        "spa" => Some(entity::business::Category::Spa),
        "fitness" => Some(entity::business::Category::Fitness),
        "other" => Some(entity::business::Category::Other),
        _ => None,
    }
}

fn default_currency() -> String {
    "PLN".to_string()
}

fn default_true() -> bool {
    true
}
