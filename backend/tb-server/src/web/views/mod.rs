//! Server-rendered HTML pages

pub mod error_page;
pub mod html;
pub mod issue_detail;
pub mod issue_list;
pub mod layout;
pub mod login;
pub mod register;

pub use html::{escape, query_value};
