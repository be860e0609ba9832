use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::catalog::application::ports::outgoing::product_query::{
    ProductQuery, ProductQueryError,
};
use crate::catalog::domain::entities::Product;

use super::sea_orm_entity::products::{Column, Entity as ProductEntity, Model as ProductModel};

#[derive(Clone, Debug)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_product(model: ProductModel) -> Product {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            is_available: model.is_available,
            creator_account_id: model.creator_account_id,
            is_deleted: model.is_deleted,
            created_at: model.created_at.to_utc(),
        }
    }
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, ProductQueryError> {
        // Soft-deleted rows come back too; the ownership guard denies them.
        let model = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_product))
    }

    async fn list_by_creator(
        &self,
        creator_account_id: i32,
    ) -> Result<Vec<Product>, ProductQueryError> {
        let models = ProductEntity::find()
            .filter(Column::CreatorAccountId.eq(creator_account_id))
            .filter(Column::IsDeleted.eq(false))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Self::map_to_product).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn product_model(id: i32, creator: i32) -> ProductModel {
        ProductModel {
            id,
            name: format!("Widget {id}"),
            description: "A widget".to_string(),
            price: Decimal::new(1999, 2),
            is_available: true,
            creator_account_id: creator,
            is_deleted: false,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![product_model(3, 7)]])
            .into_connection();

        let query = ProductQueryPostgres::new(Arc::new(db));

        let found = query.find_by_id(3).await.unwrap();

        let product = found.expect("product should be found");
        assert_eq!(product.id, 3);
        assert_eq!(product.creator_account_id, 7);
    }

    #[tokio::test]
    async fn test_find_by_id_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<ProductModel>::new()])
            .into_connection();

        let query = ProductQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_id(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_creator_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![product_model(1, 7), product_model(2, 7)]])
            .into_connection();

        let query = ProductQueryPostgres::new(Arc::new(db));

        let products = query.list_by_creator(7).await.unwrap();

        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.creator_account_id == 7));
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = ProductQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_by_creator(7).await,
            Err(ProductQueryError::DatabaseError(_))
        ));
    }
}
