mod api;
mod cart;
mod order;
mod product;
mod review;
mod seller;
mod stats;
mod token;
mod translate;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination, Pagination};
pub use self::cart::{CartItemResponse, CartResponse};
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::product::ProductResponse;
pub use self::review::ReviewResponse;
pub use self::seller::SellerProfileResponse;
pub use self::stats::{MonthlyStat, StatsResponse, StatsTotals};
pub use self::token::TokenResponse;
pub use self::translate::TranslateResponse;
pub use self::user::UserResponse;
