mod auth;
mod cart;
mod hashing;
mod jwt;
mod order;
mod product;
mod review;
mod seller;
mod translation;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::review::{
    DynReviewRepository, DynReviewService, ReviewRepositoryTrait, ReviewServiceTrait,
};
pub use self::seller::{
    DynSellerRepository, DynSellerService, SellerRepositoryTrait, SellerServiceTrait,
};
pub use self::translation::{DynTranslationService, TranslationServiceTrait};
pub use self::user::{DynUserRepository, UserRepositoryTrait};
