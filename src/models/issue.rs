use serde::{Deserialize, Serialize};

/// An issue in a workspace's backlog. The payload mirrors the GitHub
/// issue shape the backend relays; only the fields the client renders
/// are typed and everything else is dropped at the serde boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: i64,
    pub title: String,
    pub state: Option<String>,
    pub body: Option<String>,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some("open")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_with_extra_fields() {
        let json = r#"{
            "number": 12,
            "title": "Fix login redirect",
            "state": "open",
            "body": null,
            "labels": [{"name": "bug"}],
            "milestone": null
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 12);
        assert_eq!(issue.title, "Fix login redirect");
        assert!(issue.is_open());
        assert_eq!(issue.body, None);
    }

    #[test]
    fn test_closed_issue_is_not_open() {
        let json = r#"{"number": 3, "title": "Done", "state": "closed"}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(!issue.is_open());
    }
}
