use serde::{Deserialize, Serialize};

/// A workspace groups the repositories whose issues are planned
/// together. Unknown fields from the server are ignored; the server is
/// the source of truth for the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    #[serde(rename = "repositoryIDs", default)]
    pub repository_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workspace() {
        let json = r#"{"id": 7, "name": "Acme", "repositoryIDs": [101, 102]}"#;
        let workspace: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(workspace.id, 7);
        assert_eq!(workspace.name, "Acme");
        assert_eq!(workspace.repository_ids, vec![101, 102]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"id": 7, "name": "Acme", "owner": {"login": "someone"}}"#;
        let workspace: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(workspace.id, 7);
        assert!(workspace.repository_ids.is_empty());
    }
}
