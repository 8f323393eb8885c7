mod command;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

use crate::abstract_trait::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, DynUserRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl ProductService {
    pub fn new(
        query_repository: DynProductQueryRepository,
        command_repository: DynProductCommandRepository,
        user_repository: DynUserRepository,
    ) -> Self {
        let query =
            Arc::new(ProductQueryService::new(query_repository.clone())) as DynProductQueryService;

        let command = Arc::new(ProductCommandService::new(
            query_repository,
            command_repository,
            user_repository,
        )) as DynProductCommandService;

        Self { query, command }
    }
}
