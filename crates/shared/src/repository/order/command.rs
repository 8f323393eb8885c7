use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::OrderLine,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn place_order(
        &self,
        user_id: i32,
        lines: &[OrderLine],
        address: &str,
        payment_method: &str,
        total: i64,
    ) -> Result<OrderModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (user_id, total, address, payment_method, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, 'pending', current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(total)
        .bind(address)
        .bind(payment_method)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("Failed to create order for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, name, price, quantity)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.order_id)
            .bind(line.product_id)
            .bind(&line.name)
            .bind(line.price)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            // Conditional atomic decrement: the WHERE clause is the stock
            // check, so a racing checkout can never drive quantity negative.
            // Zero rows means a concurrent order consumed the stock after
            // our pre-check; the transaction rollback undoes everything done
            // so far for this order.
            let decremented = sqlx::query(
                r#"
                UPDATE products
                SET quantity = quantity - $2,
                    status = CASE WHEN quantity - $2 = 0 THEN 'out_of_stock' ELSE status END,
                    updated_at = current_timestamp
                WHERE product_id = $1 AND quantity >= $2
                "#,
            )
            .bind(line.product_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            if decremented.rows_affected() == 0 {
                warn!(
                    "Stock race lost on product {} ({}), aborting order for user {}",
                    line.product_id, line.name, user_id
                );
                return Err(RepositoryError::Conflict(format!(
                    "Insufficient stock for {}",
                    line.name
                )));
            }
        }

        // The buyer's cart is cleared unconditionally, even when the order
        // was placed without going through it.
        sqlx::query("DELETE FROM carts WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "Created order ID {} for user {} ({} items, total {})",
            order.order_id,
            user_id,
            lines.len(),
            total
        );
        Ok(order)
    }

    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status = $2,
                updated_at = current_timestamp
            WHERE order_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to update status of order {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Order ID {} moved to {:?}", id, status);
        Ok(order)
    }
}
