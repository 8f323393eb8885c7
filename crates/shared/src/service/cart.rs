use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynProductQueryRepository},
    domain::{
        requests::UpsertCartItemRequest,
        responses::{ApiResponse, CartItemResponse, CartResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct CartService {
    product_query: DynProductQueryRepository,
    cart_repository: DynCartRepository,
}

impl CartService {
    pub fn new(product_query: DynProductQueryRepository, cart_repository: DynCartRepository) -> Self {
        Self {
            product_query,
            cart_repository,
        }
    }

    async fn cart_of(&self, user_id: i32) -> Result<CartResponse, ServiceError> {
        let items = self.cart_repository.get_items(user_id).await?;
        Ok(CartResponse {
            items: items.into_iter().map(CartItemResponse::from).collect(),
        })
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        // A user without a cart row simply has an empty cart.
        let cart = self.cart_of(user_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Cart fetched successfully".to_string(),
            data: cart,
        })
    }

    async fn upsert_item(
        &self,
        user_id: i32,
        req: &UpsertCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product".to_string()))?;

        if product.quantity <= 0 {
            return Err(ServiceError::ProductUnavailable(format!(
                "{} is sold out",
                product.name
            )));
        }

        // The captured price is advisory; checkout re-reads the ledger.
        self.cart_repository
            .upsert_item(user_id, req.product_id, req.quantity, product.price)
            .await?;

        info!(
            "User {} set cart line product={} qty={}",
            user_id, req.product_id, req.quantity
        );

        let cart = self.cart_of(user_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Cart updated successfully".to_string(),
            data: cart,
        })
    }

    async fn remove_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        self.cart_repository.remove_item(user_id, product_id).await?;

        let cart = self.cart_of(user_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Item removed from cart".to_string(),
            data: cart,
        })
    }

    async fn clear(&self, user_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.cart_repository.clear(user_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Cart cleared".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{CartRepositoryTrait, ProductQueryRepositoryTrait},
        domain::requests::FindAllProducts,
        errors::RepositoryError,
        model::{CartItemWithProduct, Product, ProductStatus},
    };
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    struct MockProductQuery {
        products: Mutex<HashMap<i32, Product>>,
    }

    impl MockProductQuery {
        fn with(products: Vec<Product>) -> Arc<Self> {
            Arc::new(Self {
                products: Mutex::new(products.into_iter().map(|p| (p.product_id, p)).collect()),
            })
        }
    }

    fn product(id: i32, name: &str, price: i64, quantity: i32) -> Product {
        Product {
            product_id: id,
            seller_id: 1,
            name: name.to_string(),
            category: "Food".to_string(),
            price,
            quantity,
            status: if quantity > 0 {
                ProductStatus::Active
            } else {
                ProductStatus::OutOfStock
            },
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for MockProductQuery {
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

        async fn find_by_seller(&self, seller_id: i32) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.seller_id == seller_id)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct MockCartRepository {
        // user_id -> product_id -> (quantity, price)
        carts: Mutex<HashMap<i32, HashMap<i32, (i32, i64)>>>,
    }

    #[async_trait]
    impl CartRepositoryTrait for MockCartRepository {
        async fn get_items(
            &self,
            user_id: i32,
        ) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
            let carts = self.carts.lock().unwrap();
            let items = carts
                .get(&user_id)
                .map(|lines| {
                    lines
                        .iter()
                        .map(|(product_id, (quantity, price))| CartItemWithProduct {
                            product_id: *product_id,
                            name: format!("product-{product_id}"),
                            quantity: *quantity,
                            price: *price,
                            live_price: *price,
                            stock: 10,
                            image_url: None,
                        })
                        .collect()
                })
                .unwrap_or_default();
            Ok(items)
        }

        async fn upsert_item(
            &self,
            user_id: i32,
            product_id: i32,
            quantity: i32,
            price: i64,
        ) -> Result<(), RepositoryError> {
            self.carts
                .lock()
                .unwrap()
                .entry(user_id)
                .or_default()
                .insert(product_id, (quantity, price));
            Ok(())
        }

        async fn remove_item(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError> {
            if let Some(lines) = self.carts.lock().unwrap().get_mut(&user_id) {
                lines.remove(&product_id);
            }
            Ok(())
        }

        async fn clear(&self, user_id: i32) -> Result<(), RepositoryError> {
            self.carts.lock().unwrap().remove(&user_id);
            Ok(())
        }
    }

    fn service_with(products: Vec<Product>) -> CartService {
        CartService::new(
            MockProductQuery::with(products),
            Arc::new(MockCartRepository::default()),
        )
    }

    #[tokio::test]
    async fn get_cart_for_user_without_cart_is_empty_not_error() {
        let service = service_with(vec![]);
        let response = service.get_cart(99).await.unwrap();
        assert!(response.data.items.is_empty());
    }

    #[tokio::test]
    async fn repeat_add_overwrites_quantity_instead_of_accumulating() {
        let service = service_with(vec![product(1, "Honey", 2500, 10)]);

        let req = UpsertCartItemRequest {
            product_id: 1,
            quantity: 2,
        };
        service.upsert_item(7, &req).await.unwrap();

        let req = UpsertCartItemRequest {
            product_id: 1,
            quantity: 5,
        };
        let response = service.upsert_item(7, &req).await.unwrap();

        assert_eq!(response.data.items.len(), 1);
        assert_eq!(response.data.items[0].quantity, 5);
    }

    #[tokio::test]
    async fn adding_sold_out_product_is_rejected() {
        let service = service_with(vec![product(2, "Jam", 1200, 0)]);

        let req = UpsertCartItemRequest {
            product_id: 2,
            quantity: 1,
        };
        let err = service.upsert_item(7, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::ProductUnavailable(msg) if msg.contains("Jam")));
    }

    #[tokio::test]
    async fn adding_unknown_product_is_not_found() {
        let service = service_with(vec![]);

        let req = UpsertCartItemRequest {
            product_id: 42,
            quantity: 1,
        };
        let err = service.upsert_item(7, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn removing_absent_item_succeeds() {
        let service = service_with(vec![]);
        let response = service.remove_item(7, 42).await.unwrap();
        assert!(response.data.items.is_empty());
    }

    #[tokio::test]
    async fn clearing_empty_cart_succeeds() {
        let service = service_with(vec![]);
        assert!(service.clear(7).await.is_ok());
    }
}
