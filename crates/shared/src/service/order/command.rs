use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductCommandRepository,
        DynProductQueryRepository, DynUserRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, OrderLine, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderItemResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderStatus,
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct OrderCommandService {
    product_query: DynProductQueryRepository,
    product_command: DynProductCommandRepository,
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
    user_repository: DynUserRepository,
}

impl OrderCommandService {
    pub fn new(
        product_query: DynProductQueryRepository,
        product_command: DynProductCommandRepository,
        command: DynOrderCommandRepository,
        query: DynOrderQueryRepository,
        user_repository: DynUserRepository,
    ) -> Self {
        Self {
            product_query,
            product_command,
            command,
            query,
            user_repository,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn place_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if req.items.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Order must contain at least one item".to_string(),
            ]));
        }

        // Re-validate every line against the inventory ledger before any
        // write. Prices and names are snapshotted server-side here; nothing
        // the client sent beyond product id and quantity is trusted.
        let mut lines = Vec::with_capacity(req.items.len());
        let mut total: i64 = 0;

        for item in &req.items {
            let product = self
                .product_query
                .find_by_id(item.product_id)
                .await?
                .ok_or_else(|| {
                    ServiceError::ProductUnavailable(format!(
                        "Product {} not found",
                        item.product_id
                    ))
                })?;

            if product.quantity < item.quantity {
                return Err(ServiceError::InsufficientStock {
                    name: product.name,
                    requested: item.quantity,
                    available: product.quantity,
                });
            }

            total += product.price * item.quantity as i64;

            lines.push(OrderLine {
                product_id: product.product_id,
                name: product.name,
                price: product.price,
                quantity: item.quantity,
            });
        }

        if let Some(client_total) = req.total
            && client_total != total
        {
            warn!(
                "Client-sent total {} differs from computed total {}, using computed",
                client_total, total
            );
        }

        let order = match self
            .command
            .place_order(user_id, &lines, &req.address, &req.payment_method, total)
            .await
        {
            Ok(order) => order,
            // A concurrent checkout won the race between our pre-check and
            // the conditional decrement; nothing was persisted.
            Err(RepositoryError::Conflict(msg)) => {
                return Err(ServiceError::ProductUnavailable(msg));
            }
            Err(e) => {
                error!("Failed to place order for user {}: {:?}", user_id, e);
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "Order {} placed by user {} for total {}",
            order.order_id, user_id, total
        );

        let items = lines
            .into_iter()
            .map(|line| OrderItemResponse {
                product_id: line.product_id,
                name: line.name,
                price: line.price,
                quantity: line.quantity,
            })
            .collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order placed successfully".to_string(),
            data: OrderResponse {
                id: order.order_id,
                user_id: order.user_id,
                items,
                total: order.total,
                address: order.address,
                payment_method: order.payment_method,
                status: order.status,
                created_at: order.created_at.map(|dt| dt.to_string()),
                updated_at: order.updated_at.map(|dt| dt.to_string()),
            },
        })
    }

    async fn update_status(
        &self,
        caller_id: i32,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order".to_string()))?;

        let items = self.query.items_for_orders(&[order_id]).await?;

        let caller = self
            .user_repository
            .find_by_id(caller_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User".to_string()))?;

        let sells_in_order = items
            .iter()
            .any(|item| item.seller_id == Some(caller_id));

        if !caller.is_admin && !sells_in_order {
            return Err(ServiceError::Forbidden(
                "Only the seller or an admin can update this order".to_string(),
            ));
        }

        if !order.status.can_transition_to(req.status) {
            return Err(ServiceError::Validation(vec![format!(
                "Cannot move order from {:?} to {:?}",
                order.status, req.status
            )]));
        }

        let updated = self.command.update_status(order_id, req.status).await?;

        // Cancellation puts the stock back; a product deleted since the
        // order was placed simply has nothing left to restock.
        if req.status == OrderStatus::Cancelled {
            for item in &items {
                match self
                    .product_command
                    .restock(item.product_id, item.quantity)
                    .await
                {
                    Ok(_) | Err(RepositoryError::NotFound) => {}
                    Err(e) => {
                        error!(
                            "Failed to restock product {} after cancelling order {}: {:?}",
                            item.product_id, order_id, e
                        );
                        return Err(ServiceError::Repo(e));
                    }
                }
            }
            info!("Order {} cancelled, {} line(s) restocked", order_id, items.len());
        }

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order status updated".to_string(),
            data: OrderResponse::from_parts(updated, items),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, ProductCommandRepositoryTrait,
            ProductQueryRepositoryTrait, UserRepositoryTrait,
        },
        domain::{
            requests::{
                CreateProductRequest, FindAllProducts, OrderItemRequest, UpdateProductRequest,
            },
            responses::{MonthlyStat, StatsTotals},
        },
        model::{Order, OrderItemDetail, Product, ProductStatus, User},
    };
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    /// In-memory stand-in for the whole store. `place_order` holds the lock
    /// for the whole check-and-decrement, mirroring the transactional
    /// conditional update of the real repository.
    #[derive(Default)]
    struct MockStore {
        products: Mutex<HashMap<i32, Product>>,
        users: Mutex<HashMap<i32, User>>,
        orders: Mutex<Vec<Order>>,
        items: Mutex<Vec<OrderItemDetail>>,
        cleared_carts: Mutex<Vec<i32>>,
    }

    impl MockStore {
        fn add_product(&self, id: i32, name: &str, price: i64, quantity: i32) {
            self.products.lock().unwrap().insert(
                id,
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
                },
            );
        }

        fn add_user(&self, id: i32, is_seller: bool, is_admin: bool) {
            self.users.lock().unwrap().insert(
                id,
                User {
                    user_id: id,
                    name: format!("user-{id}"),
                    email: format!("user{id}@example.com"),
                    password: String::new(),
                    is_seller,
                    is_admin,
                    created_at: None,
                    updated_at: None,
                },
            );
        }

        fn quantity_of(&self, id: i32) -> i32 {
            self.products.lock().unwrap()[&id].quantity
        }
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for MockStore {
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

    #[async_trait]
    impl ProductCommandRepositoryTrait for MockStore {
        async fn create_product(
            &self,
            _seller_id: i32,
            _req: &CreateProductRequest,
        ) -> Result<Product, RepositoryError> {
            unimplemented!("not exercised by order tests")
        }

        async fn update_product(
            &self,
            _req: &UpdateProductRequest,
        ) -> Result<Product, RepositoryError> {
            unimplemented!("not exercised by order tests")
        }

        async fn set_status(
            &self,
            _id: i32,
            _status: ProductStatus,
        ) -> Result<Product, RepositoryError> {
            unimplemented!("not exercised by order tests")
        }

        async fn restock(&self, id: i32, qty: i32) -> Result<Product, RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let product = products.get_mut(&id).ok_or(RepositoryError::NotFound)?;
            product.quantity += qty;
            if product.status == ProductStatus::OutOfStock {
                product.status = ProductStatus::Active;
            }
            Ok(product.clone())
        }

        async fn delete_product(&self, _id: i32) -> Result<(), RepositoryError> {
            unimplemented!("not exercised by order tests")
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for MockStore {
        async fn place_order(
            &self,
            user_id: i32,
            lines: &[OrderLine],
            address: &str,
            payment_method: &str,
            total: i64,
        ) -> Result<Order, RepositoryError> {
            let mut products = self.products.lock().unwrap();

            // Conditional decrement per line; any failure aborts with no
            // mutation applied, like a rolled-back transaction.
            for line in lines {
                let available = products
                    .get(&line.product_id)
                    .map(|p| p.quantity)
                    .unwrap_or(0);
                if available < line.quantity {
                    return Err(RepositoryError::Conflict(format!(
                        "Insufficient stock for {}",
                        line.name
                    )));
                }
            }

            for line in lines {
                let product = products.get_mut(&line.product_id).unwrap();
                product.quantity -= line.quantity;
                if product.quantity == 0 {
                    product.status = ProductStatus::OutOfStock;
                }
            }

            let mut orders = self.orders.lock().unwrap();
            let order = Order {
                order_id: orders.len() as i32 + 1,
                user_id,
                total,
                address: address.to_string(),
                payment_method: payment_method.to_string(),
                status: OrderStatus::Pending,
                created_at: None,
                updated_at: None,
            };
            orders.push(order.clone());

            let mut items = self.items.lock().unwrap();
            for line in lines {
                items.push(OrderItemDetail {
                    order_id: order.order_id,
                    product_id: line.product_id,
                    name: line.name.clone(),
                    price: line.price,
                    quantity: line.quantity,
                    seller_id: Some(1),
                });
            }

            self.cleared_carts.lock().unwrap().push(user_id);

            Ok(order)
        }

        async fn update_status(
            &self,
            id: i32,
            status: OrderStatus,
        ) -> Result<Order, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let order = orders
                .iter_mut()
                .find(|o| o.order_id == id)
                .ok_or(RepositoryError::NotFound)?;
            order.status = status;
            Ok(order.clone())
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for MockStore {
        async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .filter(|o| o.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.order_id == id)
                .cloned())
        }

        async fn items_for_orders(
            &self,
            order_ids: &[i32],
        ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|item| order_ids.contains(&item.order_id))
                .cloned()
                .collect())
        }

        async fn stats_totals(&self) -> Result<StatsTotals, RepositoryError> {
            let orders = self.orders.lock().unwrap();
            Ok(StatsTotals {
                total_orders: orders.len() as i64,
                total_revenue: orders.iter().map(|o| o.total).sum(),
                total_users: self.users.lock().unwrap().len() as i64,
                total_sellers: 0,
                total_buyers: 0,
                total_products: self.products.lock().unwrap().len() as i64,
            })
        }

        async fn monthly_stats(&self, _months: i32) -> Result<Vec<MonthlyStat>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockStore {
        async fn create_user(
            &self,
            _name: &str,
            _email: &str,
            _password_hash: &str,
        ) -> Result<User, RepositoryError> {
            unimplemented!("not exercised by order tests")
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn set_is_seller(&self, _user_id: i32, _is_seller: bool) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn service_over(store: &Arc<MockStore>) -> OrderCommandService {
        OrderCommandService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )
    }

    fn checkout(items: Vec<(i32, i32)>) -> CreateOrderRequest {
        CreateOrderRequest {
            items: items
                .into_iter()
                .map(|(product_id, quantity)| OrderItemRequest {
                    product_id,
                    quantity,
                })
                .collect(),
            address: "12 Hill Road".to_string(),
            payment_method: "cod".to_string(),
            total: None,
        }
    }

    #[tokio::test]
    async fn successful_checkout_decrements_stock_and_clears_cart() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        let service = service_over(&store);

        let response = service.place_order(7, &checkout(vec![(1, 3)])).await.unwrap();

        assert_eq!(response.data.total, 30);
        assert_eq!(response.data.items.len(), 1);
        assert_eq!(store.quantity_of(1), 2);
        assert_eq!(store.orders.lock().unwrap().len(), 1);
        assert_eq!(*store.cleared_carts.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn second_checkout_short_on_stock_fails_naming_product() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        let service = service_over(&store);

        service.place_order(7, &checkout(vec![(1, 3)])).await.unwrap();

        let err = service
            .place_order(8, &checkout(vec![(1, 3)]))
            .await
            .unwrap_err();

        match err {
            ServiceError::InsufficientStock {
                name,
                requested,
                available,
            } => {
                assert_eq!(name, "Honey");
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        assert_eq!(store.quantity_of(1), 2);
        assert_eq!(store.orders.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_item_list_is_rejected_without_side_effects() {
        let store = Arc::new(MockStore::default());
        let service = service_over(&store);

        let err = service.place_order(7, &checkout(vec![])).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(store.orders.lock().unwrap().is_empty());
        assert!(store.cleared_carts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_product_aborts_whole_order() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        let service = service_over(&store);

        let err = service
            .place_order(7, &checkout(vec![(1, 2), (99, 1)]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::ProductUnavailable(msg) if msg.contains("99")));
        assert_eq!(store.quantity_of(1), 5);
        assert!(store.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sold_out_product_is_rejected_before_persistence() {
        let store = Arc::new(MockStore::default());
        store.add_product(2, "Jam", 12, 0);
        let service = service_over(&store);

        let err = service
            .place_order(7, &checkout(vec![(2, 1)]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InsufficientStock { .. }));
        assert!(store.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn one_short_line_aborts_the_whole_order() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        store.add_product(2, "Jam", 12, 1);
        let service = service_over(&store);

        let err = service
            .place_order(7, &checkout(vec![(1, 2), (2, 3)]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InsufficientStock { .. }));
        assert_eq!(store.quantity_of(1), 5);
        assert_eq!(store.quantity_of(2), 1);
        assert!(store.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn client_sent_total_is_ignored() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        let service = service_over(&store);

        let mut req = checkout(vec![(1, 2)]);
        req.total = Some(1);

        let response = service.place_order(7, &req).await.unwrap();
        assert_eq!(response.data.total, 20);
    }

    #[tokio::test]
    async fn concurrent_checkouts_never_oversell() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 1);
        let service = Arc::new(service_over(&store));

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.place_order(7, &checkout(vec![(1, 1)])).await })
        };
        let second = {
            let service = service.clone();
            tokio::spawn(async move { service.place_order(8, &checkout(vec![(1, 1)])).await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(successes, 1, "exactly one checkout may win the last unit");
        assert_eq!(store.quantity_of(1), 0);
        assert_eq!(store.orders.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn decrement_to_zero_flips_status_to_out_of_stock() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 3);
        let service = service_over(&store);

        service.place_order(7, &checkout(vec![(1, 3)])).await.unwrap();

        let status = store.products.lock().unwrap()[&1].status;
        assert_eq!(status, ProductStatus::OutOfStock);
    }

    #[tokio::test]
    async fn cancelling_an_order_restocks_its_items() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        store.add_user(99, false, true);
        let service = service_over(&store);

        let placed = service.place_order(7, &checkout(vec![(1, 3)])).await.unwrap();
        assert_eq!(store.quantity_of(1), 2);

        let req = UpdateOrderStatusRequest {
            status: OrderStatus::Cancelled,
        };
        service
            .update_status(99, placed.data.id, &req)
            .await
            .unwrap();

        assert_eq!(store.quantity_of(1), 5);
    }

    #[tokio::test]
    async fn invalid_status_transition_is_rejected() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        store.add_user(99, false, true);
        let service = service_over(&store);

        let placed = service.place_order(7, &checkout(vec![(1, 1)])).await.unwrap();

        let req = UpdateOrderStatusRequest {
            status: OrderStatus::Delivered,
        };
        let err = service
            .update_status(99, placed.data.id, &req)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn stranger_cannot_update_order_status() {
        let store = Arc::new(MockStore::default());
        store.add_product(1, "Honey", 10, 5);
        store.add_user(55, false, false);
        let service = service_over(&store);

        let placed = service.place_order(7, &checkout(vec![(1, 1)])).await.unwrap();

        let req = UpdateOrderStatusRequest {
            status: OrderStatus::Processing,
        };
        let err = service
            .update_status(55, placed.data.id, &req)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
    }
}
