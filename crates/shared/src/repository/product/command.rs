use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::{Product as ProductModel, ProductStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        seller_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (seller_id, name, category, price, quantity, status, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'pending', $6, current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(seller_id)
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.price)
        .bind(req.quantity)
        .bind(&req.image_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "Created product ID {} ({}) for seller {}",
            result.product_id, result.name, seller_id
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("missing product id".into()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // A manual quantity edit that brings stock back above zero reopens an
        // out-of-stock listing; moderation states are left alone.
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                category = $3,
                price = $4,
                quantity = $5,
                status = CASE
                    WHEN $5 = 0 AND status = 'active' THEN 'out_of_stock'
                    WHEN $5 > 0 AND status = 'out_of_stock' THEN 'active'
                    ELSE status
                END,
                image_url = $6,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.price)
        .bind(req.quantity)
        .bind(&req.image_url)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Updated product ID {}", result.product_id);
        Ok(result)
    }

    async fn set_status(
        &self,
        id: i32,
        status: ProductStatus,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET status = $2,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to set status for product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(result)
    }

    async fn restock(&self, id: i32, qty: i32) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET quantity = quantity + $2,
                status = CASE WHEN status = 'out_of_stock' THEN 'active' ELSE status END,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(qty)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to restock product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Restocked product ID {} by {}", id, qty);
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("Failed to delete product {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("Deleted product ID {}", id);
        Ok(())
    }
}
