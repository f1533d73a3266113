use serde::Serialize;

/// One-time registration token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserToken {
    pub id: i64,
    pub token: String,
    pub used: bool,
}

impl UserToken {
    pub fn is_available(&self) -> bool {
        !self.used
    }
}
