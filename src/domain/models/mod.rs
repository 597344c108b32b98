pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
