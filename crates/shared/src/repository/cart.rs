use crate::{
    abstract_trait::CartRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::CartItemWithProduct,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// Carts are created lazily on the first add.
    async fn ensure_cart(
        &self,
        conn: &mut sqlx::PgConnection,
        user_id: i32,
    ) -> Result<i32, RepositoryError> {
        let (cart_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO carts (user_id, updated_at)
            VALUES ($1, current_timestamp)
            ON CONFLICT (user_id) DO UPDATE SET updated_at = current_timestamp
            RETURNING cart_id
            "#,
        )
        .bind(user_id)
        .fetch_one(conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(cart_id)
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn get_items(&self, user_id: i32) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, CartItemWithProduct>(
            r#"
            SELECT ci.product_id,
                   p.name,
                   ci.quantity,
                   ci.price,
                   p.price AS live_price,
                   p.quantity AS stock,
                   p.image_url
            FROM carts c
            JOIN cart_items ci ON ci.cart_id = c.cart_id
            JOIN products p ON p.product_id = ci.product_id
            WHERE c.user_id = $1
            ORDER BY ci.item_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
        price: i64,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let cart_id = self.ensure_cart(&mut conn, user_id).await?;

        // A repeat add replaces the line's quantity and captured price, it
        // does not accumulate.
        sqlx::query(
            r#"
            INSERT INTO cart_items (cart_id, product_id, quantity, price)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = EXCLUDED.quantity, price = EXCLUDED.price
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .bind(price)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "Failed to upsert cart item (user {}, product {}): {:?}",
                user_id, product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "Cart of user {} now holds product {} x{}",
            user_id, product_id, quantity
        );
        Ok(())
    }

    async fn remove_item(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Removing an absent line is not an error.
        sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE product_id = $2
              AND cart_id IN (SELECT cart_id FROM carts WHERE user_id = $1)
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        sqlx::query("UPDATE carts SET updated_at = current_timestamp WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn clear(&self, user_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM carts WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
