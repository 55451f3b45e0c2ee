//! Business browsing and owner management operations.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        appointment::AppointmentRepository, business::BusinessRepository,
        opening_hour::OpeningHourRepository, service::ServiceRepository,
    },
    error::AppError,
    model::{
        business::{BusinessStats, CreateServiceParams, OpeningHourParams, UpdateServiceParams},
        named::Named,
    },
};

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists businesses with their active-service counts.
    ///
    /// # Arguments
    /// - `category`: Optional category filter
    /// - `search`: Optional name/city substring filter
    pub async fn list(
        &self,
        category: Option<entity::business::Category>,
        search: Option<&str>,
    ) -> Result<Vec<(entity::business::Model, u64)>, AppError> {
        let businesses = BusinessRepository::new(self.db)
            .list(category, search)
            .await?;

        let service_repo = ServiceRepository::new(self.db);
        let mut result = Vec::with_capacity(businesses.len());
        for business in businesses {
            let services_count = service_repo.count_active(business.id).await?;
            result.push((business, services_count));
        }

        Ok(result)
    }

    /// Business counts per category, zero-filled for empty categories.
    pub async fn category_counts(
        &self,
    ) -> Result<Vec<(entity::business::Category, i64)>, AppError> {
        let counts = BusinessRepository::new(self.db).category_counts().await?;

        let all = [
            entity::business::Category::Hairdresser,
            entity::business::Category::Doctor,
            entity::business::Category::Beauty,
            entity::business::Category::Spa,
            entity::business::Category::Fitness,
            entity::business::Category::Other,
        ];

        Ok(all
            .into_iter()
            .map(|category| {
                let total = counts
                    .iter()
                    .find(|(c, _)| *c == category)
                    .map(|(_, total)| *total)
                    .unwrap_or(0);
                (category, total)
            })
            .collect())
    }

    /// Gets a business with its opening hours and active services.
    pub async fn detail(
        &self,
        slug: &str,
    ) -> Result<
        (
            entity::business::Model,
            Vec<entity::opening_hour::Model>,
            Vec<entity::service::Model>,
        ),
        AppError,
    > {
        let business = BusinessRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let hours = OpeningHourRepository::new(self.db)
            .list_for_business(business.id)
            .await?;
        let services = ServiceRepository::new(self.db)
            .list_active(business.id)
            .await?;

        Ok((business, hours, services))
    }

    /// Owner-dashboard appointment statistics.
    pub async fn stats(
        &self,
        business: &entity::business::Model,
    ) -> Result<BusinessStats, AppError> {
        Ok(AppointmentRepository::new(self.db)
            .stats(business.id, Utc::now())
            .await?)
    }

    pub async fn list_services(
        &self,
        business: &entity::business::Model,
    ) -> Result<Vec<entity::service::Model>, AppError> {
        Ok(ServiceRepository::new(self.db)
            .list_all(business.id)
            .await?)
    }

    /// Creates a service after validating its slot arithmetic.
    pub async fn create_service(
        &self,
        business: &entity::business::Model,
        params: CreateServiceParams,
    ) -> Result<entity::service::Model, AppError> {
        validate_slot_minutes(params.duration_minutes, params.buffer_minutes)?;

        let service = ServiceRepository::new(self.db)
            .create(business.id, params)
            .await?;

        tracing::info!(
            business = %business.display_name(),
            service = %service.display_name(),
            "Service created"
        );

        Ok(service)
    }

    pub async fn update_service(
        &self,
        business: &entity::business::Model,
        service_id: Uuid,
        params: UpdateServiceParams,
    ) -> Result<entity::service::Model, AppError> {
        let repo = ServiceRepository::new(self.db);
        let service = repo
            .get_by_id(business.id, service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        let duration = params.duration_minutes.unwrap_or(service.duration_minutes);
        let buffer = params.buffer_minutes.unwrap_or(service.buffer_minutes);
        validate_slot_minutes(duration, buffer)?;

        Ok(repo.update(service, params).await?)
    }

    pub async fn delete_service(
        &self,
        business: &entity::business::Model,
        service_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = ServiceRepository::new(self.db);
        let service = repo
            .get_by_id(business.id, service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        repo.delete(service.id).await?;

        tracing::info!(
            business = %business.display_name(),
            service = %service.display_name(),
            "Service deleted"
        );

        Ok(())
    }

    pub async fn list_opening_hours(
        &self,
        business: &entity::business::Model,
    ) -> Result<Vec<entity::opening_hour::Model>, AppError> {
        Ok(OpeningHourRepository::new(self.db)
            .list_for_business(business.id)
            .await?)
    }

    /// Adds a single opening-hours row for a weekday not yet configured.
    pub async fn create_opening_hour(
        &self,
        business: &entity::business::Model,
        params: OpeningHourParams,
    ) -> Result<entity::opening_hour::Model, AppError> {
        validate_opening_hour(&params)?;

        let repo = OpeningHourRepository::new(self.db);
        if repo
            .get_for_day(business.id, params.day_of_week)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Opening hours for {} already exist",
                crate::server::util::time::weekday_name(params.day_of_week)
            )));
        }

        Ok(repo.create(business.id, params).await?)
    }

    /// Replaces the whole weekly schedule in one transaction.
    ///
    /// Validates every row first (weekday range, duplicates, bound
    /// ordering) so a rejected payload leaves the existing schedule
    /// untouched.
    pub async fn replace_opening_hours(
        &self,
        business: &entity::business::Model,
        rows: Vec<OpeningHourParams>,
    ) -> Result<Vec<entity::opening_hour::Model>, AppError> {
        let mut seen_days = [false; 7];
        for params in &rows {
            validate_opening_hour(params)?;
            let day = params.day_of_week as usize;
            if seen_days[day] {
                return Err(AppError::BadRequest(format!(
                    "Duplicate opening hours for {}",
                    crate::server::util::time::weekday_name(params.day_of_week)
                )));
            }
            seen_days[day] = true;
        }

        let txn = self.db.begin().await?;
        let created = OpeningHourRepository::new(&txn)
            .replace_week(business.id, rows)
            .await?;
        txn.commit().await?;

        tracing::info!(
            business = %business.display_name(),
            days = created.len(),
            "Opening hours replaced"
        );

        Ok(created)
    }
}

fn validate_slot_minutes(duration_minutes: i32, buffer_minutes: i32) -> Result<(), AppError> {
    if duration_minutes <= 0 {
        return Err(AppError::BadRequest(
            "Service duration must be at least one minute".to_string(),
        ));
    }
    if buffer_minutes < 0 {
        return Err(AppError::BadRequest(
            "Service buffer cannot be negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_opening_hour(params: &OpeningHourParams) -> Result<(), AppError> {
    if !(0..=6).contains(&params.day_of_week) {
        return Err(AppError::BadRequest(
            "day_of_week must be between 0 (Monday) and 6 (Sunday)".to_string(),
        ));
    }

    if params.is_closed {
        return Ok(());
    }

    let (Some(open_time), Some(close_time)) = (params.open_time, params.close_time) else {
        return Err(AppError::BadRequest(
            "Open and close times are required unless the day is marked closed".to_string(),
        ));
    };
    if open_time >= close_time {
        return Err(AppError::BadRequest(
            "Closing time must be after opening time".to_string(),
        ));
    }

    Ok(())
}
