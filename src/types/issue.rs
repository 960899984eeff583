use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub id: String,
    pub jira_key: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub priority: Option<String>,
    /// The API serves this as a string, an array, or null. Normalized to a
    /// list here so nothing downstream has to type-check it again.
    #[serde(default, deserialize_with = "fix_versions_list")]
    pub fix_versions: Vec<String>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub resolution_date: Option<String>,
}

impl Issue {
    /// Comma-joined versions for display and substring search.
    pub fn versions_joined(&self) -> String {
        self.fix_versions.join(", ")
    }
}

/// Accept `null`, a bare string, or an array of strings.
///
/// A bare string stays a single entry; it is not split on commas, so exact
/// version matching sees the same value the server stored.
fn fix_versions_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(Raw::One(s)) if s.is_empty() => Vec::new(),
        Some(Raw::One(s)) => vec![s],
        Some(Raw::Many(list)) => list.into_iter().filter(|v| !v.is_empty()).collect(),
    })
}

/// A page of issues with pagination bookkeeping from the server.
#[derive(Deserialize, Debug)]
pub struct IssuePage {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "one")]
    pub pages: u32,
    #[serde(default = "one")]
    pub current_page: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

fn one() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_versions_null() {
        let issue: Issue =
            serde_json::from_str(r#"{"id":"1","jira_key":"PROJ-1","fix_versions":null}"#).unwrap();
        assert!(issue.fix_versions.is_empty());
    }

    #[test]
    fn test_fix_versions_absent() {
        let issue: Issue = serde_json::from_str(r#"{"id":"1","jira_key":"PROJ-1"}"#).unwrap();
        assert!(issue.fix_versions.is_empty());
    }

    #[test]
    fn test_fix_versions_bare_string() {
        let issue: Issue =
            serde_json::from_str(r#"{"id":"1","jira_key":"PROJ-1","fix_versions":"1.0, 2.0"}"#)
                .unwrap();
        // Not split: a bare string is one value.
        assert_eq!(issue.fix_versions, vec!["1.0, 2.0"]);
    }

    #[test]
    fn test_fix_versions_array() {
        let issue: Issue = serde_json::from_str(
            r#"{"id":"1","jira_key":"PROJ-1","fix_versions":["1.0","","2.0"]}"#,
        )
        .unwrap();
        assert_eq!(issue.fix_versions, vec!["1.0", "2.0"]);
        assert_eq!(issue.versions_joined(), "1.0, 2.0");
    }

    #[test]
    fn test_page_defaults() {
        let page: IssuePage = serde_json::from_str(r#"{"issues":[]}"#).unwrap();
        assert_eq!(page.pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(!page.has_next);
    }
}
