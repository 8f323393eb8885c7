use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, DynUserRepository,
        ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, ModerateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::ServiceError,
    model::ProductStatus,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    user_repository: DynUserRepository,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        user_repository: DynUserRepository,
    ) -> Self {
        Self {
            query,
            command,
            user_repository,
        }
    }

    async fn ensure_owner_or_admin(
        &self,
        caller_id: i32,
        product_id: i32,
    ) -> Result<(), ServiceError> {
        let product = self
            .query
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;

        if product.seller_id == caller_id {
            return Ok(());
        }

        let caller = self
            .user_repository
            .find_by_id(caller_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User".to_string()))?;

        if caller.is_admin {
            return Ok(());
        }

        warn!(
            "User {} tried to modify product {} they do not own",
            caller_id, product_id
        );
        Err(ServiceError::Forbidden(
            "You do not own this product".to_string(),
        ))
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        seller_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let seller = self
            .user_repository
            .find_by_id(seller_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User".to_string()))?;

        // Listing requires a verified seller account.
        if !seller.is_seller {
            return Err(ServiceError::Forbidden(
                "Only verified sellers can list products".to_string(),
            ));
        }

        let product = self.command.create_product(seller_id, req).await?;

        info!(
            "Seller {} listed product {} (pending moderation)",
            seller_id, product.product_id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        caller_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Validation(vec!["missing product id".to_string()]))?;

        self.ensure_owner_or_admin(caller_id, id).await?;

        let product = self.command.update_product(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn moderate_product(
        &self,
        id: i32,
        req: &ModerateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        // Moderation only moves a listing between active and rejected;
        // out_of_stock is owned by the inventory ledger.
        if !matches!(req.status, ProductStatus::Active | ProductStatus::Rejected) {
            return Err(ServiceError::Validation(vec![
                "status must be 'active' or 'rejected'".to_string(),
            ]));
        }

        let product = self.command.set_status(id, req.status).await?;

        info!("Product {} moderated to {:?}", id, req.status);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product status updated".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(
        &self,
        caller_id: i32,
        id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        self.ensure_owner_or_admin(caller_id, id).await?;

        self.command.delete_product(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}
