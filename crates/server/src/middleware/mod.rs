mod admin;
mod jwt;
mod validate;

pub use self::admin::admin_middleware;
pub use self::jwt::auth_middleware;
pub use self::validate::SimpleValidatedJson;
