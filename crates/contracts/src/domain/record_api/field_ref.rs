use serde::{Deserialize, Serialize};

/// Qualified field name in `<object-or-relationship>.<field>` form, as
/// supplied to the component and passed through to the record API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldReference(String);

impl FieldReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Full qualified name, as used for API parameters.
    pub fn qualified(&self) -> &str {
        &self.0
    }

    /// Bare field name: everything after the first dot. A reference without
    /// a dot is returned unchanged.
    pub fn field_name(&self) -> &str {
        match self.0.split_once('.') {
            Some((_, rest)) => rest,
            None => &self.0,
        }
    }
}

impl std::fmt::Display for FieldReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FieldReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for FieldReference {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
