use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::responses::{MonthlyStat, StatsTotals},
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItemDetail},
};
use async_trait::async_trait;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderModel>(
            "SELECT * FROM orders WHERE user_id = $1 ORDER BY order_id DESC",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderModel>("SELECT * FROM orders ORDER BY order_id DESC")
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>("SELECT * FROM orders WHERE order_id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // seller_id is resolved through the live product row; items whose
        // product has been deleted since keep the snapshot but lose the
        // seller attribution.
        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_id,
                   oi.product_id,
                   oi.name,
                   oi.price,
                   oi.quantity,
                   p.seller_id AS seller_id
            FROM order_items oi
            LEFT JOIN products p ON p.product_id = oi.product_id
            WHERE oi.order_id = ANY($1)
            ORDER BY oi.item_id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn stats_totals(&self) -> Result<StatsTotals, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let totals = sqlx::query_as::<_, StatsTotals>(
            r#"
            SELECT (SELECT COUNT(*) FROM orders) AS total_orders,
                   (SELECT COALESCE(SUM(total), 0)::BIGINT FROM orders WHERE status <> 'cancelled') AS total_revenue,
                   (SELECT COUNT(*) FROM users) AS total_users,
                   (SELECT COUNT(*) FROM users WHERE is_seller) AS total_sellers,
                   (SELECT COUNT(*) FROM users WHERE NOT is_seller AND NOT is_admin) AS total_buyers,
                   (SELECT COUNT(*) FROM products) AS total_products
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(totals)
    }

    async fn monthly_stats(&self, months: i32) -> Result<Vec<MonthlyStat>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let stats = sqlx::query_as::<_, MonthlyStat>(
            r#"
            SELECT to_char(date_trunc('month', created_at), 'YYYY-MM') AS month,
                   COALESCE(SUM(total), 0)::BIGINT AS revenue,
                   COUNT(*)::BIGINT AS orders
            FROM orders
            WHERE created_at >= date_trunc('month', current_timestamp) - ($1 - 1) * INTERVAL '1 month'
              AND status <> 'cancelled'
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(months)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(stats)
    }
}
