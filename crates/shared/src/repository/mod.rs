mod cart;
mod order;
mod product;
mod review;
mod seller;
mod user;

pub use self::cart::CartRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::review::ReviewRepository;
pub use self::seller::SellerRepository;
pub use self::user::UserRepository;
