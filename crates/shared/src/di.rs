use crate::{
    abstract_trait::{
        DynAuthService, DynCartService, DynHashing, DynJwtService, DynOrderCommandService,
        DynOrderQueryService, DynProductCommandService, DynProductQueryService, DynReviewService,
        DynSellerService, DynTranslationService, DynUserRepository,
    },
    config::{ConnectionPool, TranslateConfig},
    repository::{
        CartRepository, OrderRepository, ProductRepository, ReviewRepository, SellerRepository,
        UserRepository,
    },
    service::{
        AuthService, CartService, OrderService, OrderServiceDeps, ProductService, ReviewService,
        SellerService, TranslationService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub cart_service: DynCartService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub seller_service: DynSellerService,
    pub review_service: DynReviewService,
    pub translation_service: DynTranslationService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("product_service", &"ProductService")
            .field("cart_service", &"CartService")
            .field("order_service", &"OrderService")
            .field("seller_service", &"SellerService")
            .field("review_service", &"ReviewService")
            .field("translation_service", &"TranslationService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub translate: TranslateConfig,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            translate,
        } = deps;

        let user_repository =
            Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let product_repository = ProductRepository::new(pool.clone());
        let cart_repository = Arc::new(CartRepository::new(pool.clone()));
        let order_repository = OrderRepository::new(pool.clone());
        let seller_repository = Arc::new(SellerRepository::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepository::new(pool.clone()));

        let auth_service = Arc::new(AuthService::new(
            hash,
            jwt_config,
            user_repository.clone(),
        )) as DynAuthService;

        let product_service = ProductService::new(
            product_repository.query.clone(),
            product_repository.command.clone(),
            user_repository.clone(),
        );

        let cart_service = Arc::new(CartService::new(
            product_repository.query.clone(),
            cart_repository,
        )) as DynCartService;

        let order_service = OrderService::new(OrderServiceDeps {
            product_query: product_repository.query.clone(),
            product_command: product_repository.command.clone(),
            command: order_repository.command,
            query: order_repository.query,
            user_repository: user_repository.clone(),
        });

        let seller_service = Arc::new(SellerService::new(
            seller_repository,
            user_repository,
        )) as DynSellerService;

        let review_service = Arc::new(ReviewService::new(
            review_repository,
            product_repository.query,
        )) as DynReviewService;

        let translation_service =
            Arc::new(TranslationService::new(&translate)) as DynTranslationService;

        Self {
            auth_service,
            product_query_service: product_service.query,
            product_command_service: product_service.command,
            cart_service,
            order_query_service: order_service.query,
            order_command_service: order_service.command,
            seller_service,
            review_service,
            translation_service,
        }
    }
}
