pub mod cookies;
pub mod error;
pub mod extractors;
pub mod forms;
pub mod handlers;
pub mod views;

pub use cookies::SESSION_COOKIE;
pub use error::{WebError, WebResult};
pub use extractors::session_user::SessionUser;
