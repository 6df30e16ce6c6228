//! Skills map - which projects use a given skill.
//!
//! Matching is a substring heuristic: the project's tech tags are joined with
//! spaces and lowercased, and the skill's first dot-delimited segment is
//! searched for in that string. "Node.js" therefore matches on "node" alone,
//! and "C" would match any tag containing the letter c. Kept as-is; changing
//! it changes which projects the map shows.

use crate::types::Project;

/// Shown when no project matches.
pub const NO_PROJECTS: &str = "—";

pub const CONFIDENCE: &str = "Confidence: ★★★★☆";

pub const SKILLS_HINT: &str =
    "Click a skill to see projects that use it and a quick confidence level.";

/// The lowercased key a skill label is matched on.
pub fn skill_key(skill: &str) -> String {
    skill.split('.').next().unwrap_or_default().to_lowercase()
}

/// Projects whose tech tags mention the skill, in list order.
pub fn projects_using<'a>(skill: &str, projects: &'a [Project]) -> Vec<&'a Project> {
    let key = skill_key(skill);
    projects
        .iter()
        .filter(|p| p.tech.join(" ").to_lowercase().contains(&key))
        .collect()
}

/// Comma-joined titles of matching projects, or the placeholder.
pub fn usage_summary(skill: &str, projects: &[Project]) -> String {
    let titles: Vec<&str> = projects_using(skill, projects)
        .into_iter()
        .map(|p| p.title.as_str())
        .collect();

    if titles.is_empty() {
        NO_PROJECTS.to_string()
    } else {
        titles.join(", ")
    }
}

/// Skills map widget state: at most one selected skill.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SkillsMap {
    selected: Option<String>,
}

impl SkillsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, skill: impl Into<String>) {
        self.selected = Some(skill.into());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Detail lines for the current selection.
    pub fn detail(&self, projects: &[Project]) -> Vec<String> {
        match &self.selected {
            Some(skill) => vec![
                skill.clone(),
                format!("Used in these projects: {}", usage_summary(skill, projects)),
                CONFIDENCE.to_string(),
            ],
            None => vec![SKILLS_HINT.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn titles<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_skill_key() {
        assert_eq!(skill_key("Node.js"), "node");
        assert_eq!(skill_key("Three.js"), "three");
        assert_eq!(skill_key("React"), "react");
        assert_eq!(skill_key(""), "");
    }

    #[test]
    fn test_react_matches_tech_lists_containing_react() {
        let catalog = Catalog::builtin();
        let matched = projects_using("React", &catalog.projects);
        let expected: Vec<&Project> = catalog
            .projects
            .iter()
            .filter(|p| p.tech.iter().any(|t| t.to_lowercase().contains("react")))
            .collect();
        assert_eq!(matched, expected);
        assert_eq!(titles(&matched), vec!["AI-Powered Task Manager"]);
    }

    #[test]
    fn test_node_matches_on_first_segment() {
        let catalog = Catalog::builtin();
        assert_eq!(usage_summary("Node.js", &catalog.projects), "Observify");
        assert_eq!(usage_summary("TypeScript", &catalog.projects), "Observify");
    }

    #[test]
    fn test_substring_heuristic_is_loose() {
        // "css" is not a tag, but nothing contains it either
        let catalog = Catalog::builtin();
        assert_eq!(usage_summary("CSS", &catalog.projects), NO_PROJECTS);
        // "c" hits every project with a 'c' in its joined tags
        assert_eq!(
            usage_summary("C", &catalog.projects),
            "Observify, AI-Powered Task Manager, AI-Enhanced Custom Shell"
        );
    }

    #[test]
    fn test_no_match_placeholder() {
        let catalog = Catalog::builtin();
        assert_eq!(usage_summary("MediaPipe", &catalog.projects), "—");
        assert!(projects_using("Docker", &catalog.projects).is_empty());
    }

    #[test]
    fn test_skills_map_detail() {
        let catalog = Catalog::builtin();
        let mut map = SkillsMap::new();
        assert_eq!(map.detail(&catalog.projects), vec![SKILLS_HINT.to_string()]);

        map.select("Postgres");
        assert_eq!(map.selected(), Some("Postgres"));
        assert_eq!(
            map.detail(&catalog.projects),
            vec![
                "Postgres".to_string(),
                "Used in these projects: —".to_string(),
                "Confidence: ★★★★☆".to_string(),
            ]
        );
    }
}
