use crate::{
    abstract_trait::{DynProductQueryRepository, DynReviewRepository, ReviewServiceTrait},
    domain::{
        requests::CreateReviewRequest,
        responses::{ApiResponse, ReviewResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct ReviewService {
    review_repository: DynReviewRepository,
    product_query: DynProductQueryRepository,
}

impl ReviewService {
    pub fn new(
        review_repository: DynReviewRepository,
        product_query: DynProductQueryRepository,
    ) -> Self {
        Self {
            review_repository,
            product_query,
        }
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn create_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        self.product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;

        let review = self.review_repository.upsert_review(user_id, req).await?;

        info!(
            "User {} reviewed product {} with rating {}",
            user_id, req.product_id, req.rating
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Review saved successfully".to_string(),
            data: ReviewResponse::from(review),
        })
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError> {
        let reviews = self.review_repository.find_by_product(product_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Reviews fetched successfully".to_string(),
            data: reviews.into_iter().map(ReviewResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{ProductQueryRepositoryTrait, ReviewRepositoryTrait},
        domain::requests::FindAllProducts,
        errors::RepositoryError,
        model::{Product, ProductStatus, ReviewWithAuthor},
    };
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    #[derive(Default)]
    struct MockReviewStore {
        products: Mutex<HashMap<i32, Product>>,
        // (product_id, user_id) -> review
        reviews: Mutex<HashMap<(i32, i32), ReviewWithAuthor>>,
    }

    impl MockReviewStore {
        fn add_product(&self, id: i32) {
            self.products.lock().unwrap().insert(
                id,
                Product {
                    product_id: id,
                    seller_id: 1,
                    name: format!("product-{id}"),
                    category: "Food".to_string(),
                    price: 10,
                    quantity: 5,
                    status: ProductStatus::Active,
                    image_url: None,
                    created_at: None,
                    updated_at: None,
                },
            );
        }
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for MockReviewStore {
        async fn find_all(
            &self,
            _req: &FindAllProducts,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            let products: Vec<Product> = self.products.lock().unwrap().values().cloned().collect();
            let total = products.len() as i64;
            Ok((products, total))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.products.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_seller(&self, _seller_id: i32) -> Result<Vec<Product>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl ReviewRepositoryTrait for MockReviewStore {
        async fn upsert_review(
            &self,
            user_id: i32,
            req: &CreateReviewRequest,
        ) -> Result<ReviewWithAuthor, RepositoryError> {
            let mut reviews = self.reviews.lock().unwrap();
            let id = reviews.len() as i32 + 1;
            let review = reviews
                .entry((req.product_id, user_id))
                .and_modify(|r| {
                    r.rating = req.rating;
                    r.comment = req.comment.clone();
                })
                .or_insert(ReviewWithAuthor {
                    review_id: id,
                    product_id: req.product_id,
                    user_id,
                    author: format!("user-{user_id}"),
                    rating: req.rating,
                    comment: req.comment.clone(),
                    created_at: None,
                });
            Ok(review.clone())
        }

        async fn find_by_product(
            &self,
            product_id: i32,
        ) -> Result<Vec<ReviewWithAuthor>, RepositoryError> {
            Ok(self
                .reviews
                .lock()
                .unwrap()
                .values()
                .filter(|r| r.product_id == product_id)
                .cloned()
                .collect())
        }
    }

    fn service_over(store: &Arc<MockReviewStore>) -> ReviewService {
        ReviewService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn repeat_review_overwrites_instead_of_duplicating() {
        let store = Arc::new(MockReviewStore::default());
        store.add_product(1);
        let service = service_over(&store);

        let req = CreateReviewRequest {
            product_id: 1,
            rating: 3,
            comment: Some("fine".to_string()),
        };
        service.create_review(7, &req).await.unwrap();

        let req = CreateReviewRequest {
            product_id: 1,
            rating: 5,
            comment: Some("actually great".to_string()),
        };
        service.create_review(7, &req).await.unwrap();

        let response = service.find_by_product(1).await.unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].rating, 5);
    }

    #[tokio::test]
    async fn review_for_unknown_product_is_not_found() {
        let store = Arc::new(MockReviewStore::default());
        let service = service_over(&store);

        let req = CreateReviewRequest {
            product_id: 42,
            rating: 4,
            comment: None,
        };
        let err = service.create_review(7, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn product_without_reviews_returns_empty_list() {
        let store = Arc::new(MockReviewStore::default());
        store.add_product(1);
        let service = service_over(&store);

        let response = service.find_by_product(1).await.unwrap();
        assert!(response.data.is_empty());
    }
}
