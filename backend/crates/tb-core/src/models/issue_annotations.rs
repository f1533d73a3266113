use serde::{Deserialize, Serialize};

/// The user-editable part of an issue. Sync never writes these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAnnotations {
    pub notes: Option<String>,
    pub attention_of: Option<String>,
    pub kill_factor: Option<i64>,
}

impl IssueAnnotations {
    /// Build from raw form input: text is trimmed, blank text becomes `None`
    pub fn from_input(notes: &str, attention_of: &str, kill_factor: Option<i64>) -> Self {
        Self {
            notes: non_blank(notes),
            attention_of: non_blank(attention_of),
            kill_factor,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
