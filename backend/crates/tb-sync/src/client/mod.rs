pub mod github_client;
pub mod wire;
