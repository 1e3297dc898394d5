//! Wire types for the GitHub repository listing

use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /users/{username}/repos`
///
/// `pinned` is a presentation flag local to this site; GitHub does not carry
/// it, so it defaults to `false` on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub forks_count: i64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
}

/// Fields accepted by `PATCH /repos/{full_name}`
#[derive(Debug, Clone, Serialize)]
pub struct RepoUpdate {
    pub name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_deserialization_defaults() {
        // A trimmed GitHub payload: no topics, no language, no pinned flag
        let json = r#"{
            "id": 101,
            "name": "dotfiles",
            "full_name": "octocat/dotfiles",
            "description": null,
            "html_url": "https://github.com/octocat/dotfiles",
            "stargazers_count": 12,
            "forks_count": 3
        }"#;

        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "octocat/dotfiles");
        assert!(repo.description.is_none());
        assert!(repo.topics.is_empty());
        assert!(!repo.pinned);
    }

    #[test]
    fn test_repo_update_serialization() {
        let update = RepoUpdate {
            name: "dotfiles".to_string(),
            description: Some("My configs".to_string()),
            topics: vec!["shell".to_string(), "vim".to_string()],
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["name"], "dotfiles");
        assert_eq!(json["topics"][1], "vim");
    }
}
