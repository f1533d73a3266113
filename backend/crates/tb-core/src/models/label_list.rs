use serde::{Deserialize, Serialize};

/// Separator used when the label list is stored as a single column
pub const LABEL_DELIMITER: char = ',';

/// Ordered list of label names.
///
/// Stored as one delimited string, so no name may contain [`LABEL_DELIMITER`].
/// Names coming from the remote side are normalised on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelList(Vec<String>);

impl LabelList {
    /// Build from remote label names, replacing any embedded delimiter with a space
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| name.as_ref().replace(LABEL_DELIMITER, " "))
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Parse the stored column value
    pub fn from_db_string(value: &str) -> Self {
        Self(
            value
                .split(LABEL_DELIMITER)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Render the stored column value
    pub fn to_db_string(&self) -> String {
        self.0.join(&LABEL_DELIMITER.to_string())
    }

    /// Same predicate the list view applies in SQL
    pub fn contains_substring(&self, needle: &str) -> bool {
        self.to_db_string().contains(needle)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
