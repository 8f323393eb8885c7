use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        let page = req.page.max(1);
        let page_size = req.page_size.clamp(1, 100);
        let total_pages = ((total as f64) / (page_size as f64)).ceil() as i32;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items: total as i32,
                total_pages,
            },
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn find_by_seller(
        &self,
        seller_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_by_seller(seller_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }
}
