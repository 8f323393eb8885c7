mod auth;
mod cart;
mod order;
mod product;
mod review;
mod seller;
mod translate;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::cart::UpsertCartItemRequest;
pub use self::order::{CreateOrderRequest, OrderItemRequest, OrderLine, UpdateOrderStatusRequest};
pub use self::product::{
    CreateProductRequest, FindAllProducts, ModerateProductRequest, UpdateProductRequest,
};
pub use self::review::CreateReviewRequest;
pub use self::seller::{AttachDocumentsRequest, RegisterSellerRequest, UpdateSellerStatusRequest};
pub use self::translate::TranslateRequest;
