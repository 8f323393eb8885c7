mod cart;
mod order;
mod product;
mod review;
mod seller;
mod user;

pub use self::cart::CartItemWithProduct;
pub use self::order::{Order, OrderItemDetail, OrderStatus};
pub use self::product::{Product, ProductStatus};
pub use self::review::ReviewWithAuthor;
pub use self::seller::{SellerProfile, SellerStatus};
pub use self::user::User;
