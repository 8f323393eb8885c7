use crate::{
    abstract_trait::ReviewRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateReviewRequest, errors::RepositoryError, model::ReviewWithAuthor,
};
use async_trait::async_trait;
use tracing::error;

pub struct ReviewRepository {
    db: ConnectionPool,
}

impl ReviewRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    async fn upsert_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<ReviewWithAuthor, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let review = sqlx::query_as::<_, ReviewWithAuthor>(
            r#"
            WITH upserted AS (
                INSERT INTO reviews (product_id, user_id, rating, comment, created_at)
                VALUES ($1, $2, $3, $4, current_timestamp)
                ON CONFLICT (product_id, user_id)
                DO UPDATE SET rating = EXCLUDED.rating, comment = EXCLUDED.comment
                RETURNING *
            )
            SELECT r.review_id, r.product_id, r.user_id, u.name AS author,
                   r.rating, r.comment, r.created_at
            FROM upserted r
            JOIN users u ON u.user_id = r.user_id
            "#,
        )
        .bind(req.product_id)
        .bind(user_id)
        .bind(req.rating)
        .bind(&req.comment)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepositoryError::ForeignKey(format!("product {} does not exist", req.product_id))
            }
            _ => {
                error!(
                    "Failed to save review (user {}, product {}): {:?}",
                    user_id, req.product_id, err
                );
                RepositoryError::from(err)
            }
        })?;

        Ok(review)
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<ReviewWithAuthor>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reviews = sqlx::query_as::<_, ReviewWithAuthor>(
            r#"
            SELECT r.review_id, r.product_id, r.user_id, u.name AS author,
                   r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.user_id = r.user_id
            WHERE r.product_id = $1
            ORDER BY r.review_id DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(reviews)
    }
}
