pub mod error;
pub mod health;
pub mod routes;
pub mod state;
pub mod web;


pub use error::{Result, ServerError};
pub use routes::build_router;
pub use state::AppState;
pub use web::{SESSION_COOKIE, SessionUser, WebError, WebResult};
