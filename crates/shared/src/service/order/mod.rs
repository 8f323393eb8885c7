mod command;
mod query;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;

use crate::abstract_trait::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, DynProductCommandRepository, DynProductQueryRepository,
    DynUserRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub user_repository: DynUserRepository,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            product_query,
            product_command,
            command,
            query,
            user_repository,
        } = deps;

        let query_service =
            Arc::new(OrderQueryService::new(query.clone())) as DynOrderQueryService;

        let command_service = Arc::new(OrderCommandService::new(
            product_query,
            product_command,
            command,
            query,
            user_repository,
        )) as DynOrderCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
