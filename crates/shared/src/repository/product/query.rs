use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllProducts, errors::RepositoryError, model::Product as ProductModel,
};
use async_trait::async_trait;

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let page = req.page.max(1);
        let page_size = req.page_size.clamp(1, 100);
        let offset = (page - 1) * page_size;
        let search = format!("%{}%", req.search);

        // Public catalog listing; only active products are visible.
        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT *
            FROM products
            WHERE status = 'active'
              AND name ILIKE $1
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY product_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&search)
        .bind(&req.category)
        .bind(page_size as i64)
        .bind(offset as i64)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE status = 'active'
              AND name ILIKE $1
              AND ($2::TEXT IS NULL OR category = $2)
            "#,
        )
        .bind(&search)
        .bind(&req.category)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product =
            sqlx::query_as::<_, ProductModel>("SELECT * FROM products WHERE product_id = $1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn find_by_seller(&self, seller_id: i32) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            "SELECT * FROM products WHERE seller_id = $1 ORDER BY product_id DESC",
        )
        .bind(seller_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(products)
    }
}
