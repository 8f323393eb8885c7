mod auth;
mod cart;
mod order;
mod product;
mod review;
mod seller;
mod translation;

pub use self::auth::AuthService;
pub use self::cart::CartService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::ProductService;
pub use self::review::ReviewService;
pub use self::seller::SellerService;
pub use self::translation::TranslationService;
