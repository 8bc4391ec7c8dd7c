use serde::{Deserialize, Serialize};

/// A team and its ordered list of projects.
///
/// Teams scope uploaded documents; every upload names one team and one of its
/// projects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    /// Backend-assigned team ID.
    pub id: u64,
    /// Team display name.
    pub name: String,
    /// Ordered list of project names within the team.
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Team {
    /// Creates a new team.
    pub fn new(id: u64, name: impl Into<String>, projects: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            projects,
        }
    }

    /// The team catalog used when `GET /teams` is unreachable.
    ///
    /// Mirrors the list the backend itself serves, so the upload form stays
    /// usable while the backend is down.
    pub fn default_catalog() -> Vec<Team> {
        fn strings(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }
        vec![
            Team::new(
                1,
                "Engineering",
                strings(&[
                    "Cloud Team",
                    "IT Support",
                    "IRI",
                    "INSW",
                    "Meraki",
                    "Nautilux",
                    "Database",
                    "Custom Project…",
                ]),
            ),
            Team::new(
                2,
                "Marketing",
                strings(&["Campaign 2025", "Brand Guidelines", "Social Media"]),
            ),
            Team::new(
                3,
                "Sales",
                strings(&["Q1 Strategy", "Training Materials", "Product Demos"]),
            ),
            Team::new(4, "HR", strings(&["Onboarding", "Policies", "Benefits Guide"])),
        ]
    }
}

/// Response body for `GET /teams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamsResponse {
    /// All teams known to the backend.
    pub teams: Vec<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{"teams":[{"id":2,"name":"Marketing","projects":["Campaign 2025"]}]}"#;
        let response: TeamsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.teams.len(), 1);
        assert_eq!(response.teams[0].name, "Marketing");
        assert_eq!(response.teams[0].projects, vec!["Campaign 2025"]);
    }

    #[test]
    fn missing_projects_defaults_to_empty() {
        let json = r#"{"id":9,"name":"Legal"}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert!(team.projects.is_empty());
    }

    #[test]
    fn default_catalog_matches_backend_seed() {
        let teams = Team::default_catalog();
        assert_eq!(teams.len(), 4);
        assert_eq!(teams[0].name, "Engineering");
        assert!(teams[0].projects.contains(&"Cloud Team".to_string()));
        assert_eq!(teams[3].name, "HR");
    }
}
