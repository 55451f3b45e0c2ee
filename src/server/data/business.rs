use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

pub struct BusinessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::business::Model>, DbErr> {
        entity::prelude::Business::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::business::Model>, DbErr> {
        entity::prelude::Business::find()
            .filter(entity::business::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets a business by slug only if it is owned by the given user.
    pub async fn get_by_slug_for_owner(
        &self,
        slug: &str,
        owner_id: Uuid,
    ) -> Result<Option<entity::business::Model>, DbErr> {
        entity::prelude::Business::find()
            .filter(entity::business::Column::Slug.eq(slug))
            .filter(entity::business::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Lists businesses ordered by name, with optional category and
    /// name/city substring filters.
    pub async fn list(
        &self,
        category: Option<entity::business::Category>,
        search: Option<&str>,
    ) -> Result<Vec<entity::business::Model>, DbErr> {
        let mut query =
            entity::prelude::Business::find().order_by_asc(entity::business::Column::Name);

        if let Some(category) = category {
            query = query.filter(entity::business::Column::Category.eq(category));
        }

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::business::Column::Name.contains(search))
                    .add(entity::business::Column::City.contains(search)),
            );
        }

        query.all(self.db).await
    }

    pub async fn list_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<entity::business::Model>, DbErr> {
        entity::prelude::Business::find()
            .filter(entity::business::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::business::Column::Name)
            .all(self.db)
            .await
    }

    /// Counts businesses per category.
    ///
    /// Categories with no businesses are absent from the result; the
    /// service layer fills in zeroes for the full category list.
    pub async fn category_counts(
        &self,
    ) -> Result<Vec<(entity::business::Category, i64)>, DbErr> {
        entity::prelude::Business::find()
            .select_only()
            .column(entity::business::Column::Category)
            .column_as(entity::business::Column::Id.count(), "total")
            .group_by(entity::business::Column::Category)
            .into_tuple()
            .all(self.db)
            .await
    }
}
