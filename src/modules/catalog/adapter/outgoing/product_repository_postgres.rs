use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::catalog::application::ports::outgoing::product_repository::{
    CreateProductData, ProductRepository, ProductRepositoryError, UpdateProductData,
};
use crate::catalog::domain::entities::Product;

use super::sea_orm_entity::products::{
    ActiveModel as ProductActiveModel, Entity as ProductEntity, Model as ProductModel,
};

#[derive(Clone, Debug)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
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
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let active_product = ProductActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            is_available: Set(data.is_available),
            creator_account_id: Set(data.creator_account_id),
            is_deleted: Set(false),
            created_at: NotSet,
        };

        let inserted = active_product
            .insert(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_product(inserted))
    }

    async fn update_product(
        &self,
        product_id: i32,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProductRepositoryError::NotFound)?;

        let mut active_product: ProductActiveModel = product.into();
        // creator_account_id is deliberately never touched here.
        active_product.name = Set(data.name);
        active_product.description = Set(data.description);
        active_product.price = Set(data.price);
        active_product.is_available = Set(data.is_available);

        let updated = active_product
            .update(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_product(updated))
    }

    async fn soft_delete_product(&self, product_id: i32) -> Result<(), ProductRepositoryError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProductRepositoryError::NotFound)?;

        let mut active_product: ProductActiveModel = product.into();
        active_product.is_deleted = Set(true);

        active_product
            .update(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
