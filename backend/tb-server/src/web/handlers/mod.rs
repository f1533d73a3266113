pub mod issues;
pub mod login;
pub mod register;
