use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse, StatsResponse},
    errors::ServiceError,
    model::{Order, OrderItemDetail},
};
use async_trait::async_trait;

const STATS_WINDOW_MONTHS: i32 = 6;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }

    /// Hydrates a batch of orders with their line items in one query.
    async fn assemble(&self, orders: Vec<Order>) -> Result<Vec<OrderResponse>, ServiceError> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
        let mut items = self.query.items_for_orders(&ids).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let (mine, rest): (Vec<OrderItemDetail>, Vec<OrderItemDetail>) =
                    std::mem::take(&mut items)
                        .into_iter()
                        .partition(|item| item.order_id == order.order_id);
                items = rest;
                OrderResponse::from_parts(order, mine)
            })
            .collect())
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_my_orders(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;
        let data = self.assemble(orders).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data,
        })
    }

    async fn find_seller_orders(
        &self,
        seller_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_all().await?;
        if orders.is_empty() {
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Orders fetched successfully".to_string(),
                data: Vec::new(),
            });
        }

        let ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
        let details = self.query.items_for_orders(&ids).await?;

        // An order belongs to a seller's view when any of its lines was
        // sold by them; the full order is returned for context.
        let seller_order_ids: Vec<i32> = details
            .iter()
            .filter(|item| item.seller_id == Some(seller_id))
            .map(|item| item.order_id)
            .collect();

        let data = orders
            .into_iter()
            .filter(|order| seller_order_ids.contains(&order.order_id))
            .map(|order| {
                let mine = details
                    .iter()
                    .filter(|item| item.order_id == order.order_id)
                    .cloned()
                    .collect();
                OrderResponse::from_parts(order, mine)
            })
            .collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data,
        })
    }

    async fn find_all_orders(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_all().await?;
        let data = self.assemble(orders).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data,
        })
    }

    async fn stats(&self) -> Result<ApiResponse<StatsResponse>, ServiceError> {
        let totals = self.query.stats_totals().await?;
        let monthly = self.query.monthly_stats(STATS_WINDOW_MONTHS).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Stats fetched successfully".to_string(),
            data: StatsResponse { totals, monthly },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OrderQueryRepositoryTrait,
        domain::responses::{MonthlyStat, StatsTotals},
        errors::RepositoryError,
        model::OrderStatus,
    };
    use std::sync::Arc;

    struct MockOrderQuery {
        orders: Vec<Order>,
        items: Vec<OrderItemDetail>,
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for MockOrderQuery {
        async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
            Ok(self
                .orders
                .iter()
                .filter(|o| o.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
            Ok(self.orders.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(self.orders.iter().find(|o| o.order_id == id).cloned())
        }

        async fn items_for_orders(
            &self,
            order_ids: &[i32],
        ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
            Ok(self
                .items
                .iter()
                .filter(|item| order_ids.contains(&item.order_id))
                .cloned()
                .collect())
        }

        async fn stats_totals(&self) -> Result<StatsTotals, RepositoryError> {
            Ok(StatsTotals {
                total_orders: self.orders.len() as i64,
                total_revenue: self.orders.iter().map(|o| o.total).sum(),
                total_users: 0,
                total_sellers: 0,
                total_buyers: 0,
                total_products: 0,
            })
        }

        async fn monthly_stats(&self, _months: i32) -> Result<Vec<MonthlyStat>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    fn order(id: i32, user_id: i32, total: i64) -> Order {
        Order {
            order_id: id,
            user_id,
            total,
            address: "12 Hill Road".to_string(),
            payment_method: "cod".to_string(),
            status: OrderStatus::Pending,
            created_at: None,
            updated_at: None,
        }
    }

    fn item(order_id: i32, product_id: i32, seller_id: i32) -> OrderItemDetail {
        OrderItemDetail {
            order_id,
            product_id,
            name: format!("product-{product_id}"),
            price: 10,
            quantity: 1,
            seller_id: Some(seller_id),
        }
    }

    #[tokio::test]
    async fn seller_view_only_includes_orders_with_their_items() {
        let service = OrderQueryService::new(Arc::new(MockOrderQuery {
            orders: vec![order(1, 7, 10), order(2, 8, 20), order(3, 7, 30)],
            items: vec![
                item(1, 100, 5),
                item(2, 200, 6),
                item(3, 100, 5),
                item(3, 200, 6),
            ],
        }));

        let response = service.find_seller_orders(5).await.unwrap();
        let ids: Vec<i32> = response.data.iter().map(|o| o.id).collect();

        assert_eq!(ids, vec![1, 3]);
        // The mixed order keeps all of its lines, not just the seller's.
        assert_eq!(response.data[1].items.len(), 2);
    }

    #[tokio::test]
    async fn seller_with_no_sales_sees_empty_list() {
        let service = OrderQueryService::new(Arc::new(MockOrderQuery {
            orders: vec![order(1, 7, 10)],
            items: vec![item(1, 100, 5)],
        }));

        let response = service.find_seller_orders(99).await.unwrap();
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn my_orders_are_hydrated_with_items() {
        let service = OrderQueryService::new(Arc::new(MockOrderQuery {
            orders: vec![order(1, 7, 10), order(2, 8, 20)],
            items: vec![item(1, 100, 5), item(2, 200, 6)],
        }));

        let response = service.find_my_orders(7).await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].items[0].product_id, 100);
    }
}
