use serde::{Deserialize, Serialize};

/// Distinct-value catalogs for populating filter selectors.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct FilterOptions {
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub priorities: Vec<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<NamedOption>,
    #[serde(default)]
    pub reporters: Vec<NamedOption>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NamedOption {
    pub id: String,
    pub name: String,
}
