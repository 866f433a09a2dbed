//! Content model for the roadmap
//!
//! This module defines the core data structures for curriculum modules, their
//! checklists, and their linked resources. The catalog supplies initial values;
//! every mutable flag here is owned by the progress store afterwards.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a module (or project)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    /// Prerequisites not yet met
    Locked,
    /// Unlocked, nothing done yet
    Available,
    /// At least one checklist item done
    InProgress,
    /// Every checklist item done
    Completed,
}

/// Kind of learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Article,
    Leetcode,
    Book,
    Doc,
    Code,
}

/// Problem difficulty (LeetCode convention)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A top-level unit of the curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique identifier (e.g., "module-1")
    pub id: String,
    /// Display title
    pub title: String,
    /// Abbreviated title for compact views
    pub short_title: String,
    /// One-paragraph description
    pub description: String,
    /// Current lifecycle status
    pub status: ModuleStatus,
    /// Locked until every prerequisite module is completed
    pub is_locked: bool,
    /// True iff completion percentage is 100
    pub is_completed: bool,
    /// Rounded percentage of completed checklist items (0-100)
    pub completion_percentage: u8,
    /// IDs of modules that must be completed first
    pub prerequisites: Vec<String>,
    /// Checklist items, in curriculum order
    pub checklist: Vec<ChecklistItem>,
    /// Linked resources, in curriculum order
    pub resources: Vec<Resource>,
    /// Rough duration estimate in days
    pub estimated_days: u32,
    /// Target number of practice problems (DSA module only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_problems: Option<u32>,
    /// Display color tag
    pub color: String,
}

impl Module {
    /// Number of completed checklist items
    pub fn completed_items(&self) -> usize {
        self.checklist.iter().filter(|i| i.is_completed).count()
    }

    /// Total number of checklist items
    pub fn total_items(&self) -> usize {
        self.checklist.len()
    }

    /// Recompute percentage, completed flag, and status from the checklist.
    ///
    /// A locked module stays locked; unlocking is the evaluator's job.
    pub fn recalculate(&mut self) {
        let total = self.total_items();
        let done = self.completed_items();
        self.completion_percentage = percentage(done, total);
        self.is_completed = self.completion_percentage == 100;
        self.status = if self.is_locked {
            ModuleStatus::Locked
        } else if self.is_completed {
            ModuleStatus::Completed
        } else if done > 0 {
            ModuleStatus::InProgress
        } else {
            ModuleStatus::Available
        };
    }

    /// Find a checklist item by ID
    pub fn checklist_item_mut(&mut self, item_id: &str) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|i| i.id == item_id)
    }

    /// Find a resource by ID
    pub fn resource_mut(&mut self, resource_id: &str) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|r| r.id == resource_id)
    }
}

/// Rounded completion percentage; empty collections count as 0%.
pub fn percentage(done: usize, total: usize) -> u8 {
    if total == 0 { 0 } else { ((done as f64 / total as f64) * 100.0).round() as u8 }
}

/// A single actionable item in a module's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique identifier (e.g., "m1-arrays")
    pub id: String,
    /// Display text
    pub text: String,
    /// Done flag
    pub is_completed: bool,
    /// Owning module ID
    pub module_id: String,
    /// Free-text category label, used for grouping in views
    pub category: String,
    /// IDs of resources that support this item
    #[serde(default)]
    pub resource_ids: Vec<String>,
    /// Checkpoint items require explicit confirmation before completion.
    /// The store does not enforce this; the presentation layer prompts.
    #[serde(default)]
    pub is_checkpoint: bool,
    /// Rough effort estimate in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u32>,
}

impl ChecklistItem {
    /// Create a new incomplete item
    pub fn new(
        id: impl Into<String>,
        module_id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_completed: false,
            module_id: module_id.into(),
            category: category.into(),
            resource_ids: Vec::new(),
            is_checkpoint: false,
            time_estimate: None,
        }
    }

    /// Mark as a checkpoint item
    pub fn checkpoint(mut self) -> Self {
        self.is_checkpoint = true;
        self
    }

    /// Set the effort estimate
    pub fn minutes(mut self, minutes: u32) -> Self {
        self.time_estimate = Some(minutes);
        self
    }

    /// Link supporting resources
    pub fn with_resources(mut self, ids: &[&str]) -> Self {
        self.resource_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// An external learning resource linked from a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Link target
    pub url: String,
    /// Resource kind
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Owning module ID
    pub module_id: String,
    /// Rough time to consume, in minutes
    pub estimated_minutes: u32,
    /// Done flag (independent of checklist completion)
    pub is_completed: bool,
    /// Favorite flag
    pub is_favorite: bool,
    /// Problem difficulty (leetcode resources only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Problem pattern label (leetcode resources only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Resource {
    /// Create a new untouched resource
    pub fn new(
        id: impl Into<String>,
        module_id: impl Into<String>,
        resource_type: ResourceType,
        title: impl Into<String>,
        url: impl Into<String>,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            resource_type,
            module_id: module_id.into(),
            estimated_minutes,
            is_completed: false,
            is_favorite: false,
            difficulty: None,
            pattern: None,
        }
    }

    /// Set the difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the pattern label
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// A practice problem inside a DSA pattern group.
///
/// Problem completion is browse-session state only; persistent problem
/// statistics are derived from the DSA module's leetcode resources instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Problem difficulty
    pub difficulty: Difficulty,
    /// Pattern this problem teaches
    pub pattern: String,
    /// Owning module ID
    pub module_id: String,
}

/// A named group of practice problems sharing a solution pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsaPattern {
    /// Pattern name (e.g., "Two Pointers")
    pub name: String,
    /// One-line description of when the pattern applies
    pub description: String,
    /// Problems in recommended order
    pub problems: Vec<Problem>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn module_with_items(n: usize) -> Module {
        Module {
            id: "test".into(),
            title: "Test Module".into(),
            short_title: "Test".into(),
            description: String::new(),
            status: ModuleStatus::Available,
            is_locked: false,
            is_completed: false,
            completion_percentage: 0,
            prerequisites: Vec::new(),
            checklist: (0..n)
                .map(|i| ChecklistItem::new(format!("item-{i}"), "test", "do it", "practice"))
                .collect(),
            resources: Vec::new(),
            estimated_days: 7,
            target_problems: None,
            color: "sky".into(),
        }
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn recalculate_tracks_checklist() {
        let mut module = module_with_items(4);
        module.recalculate();
        assert_eq!(module.completion_percentage, 0);
        assert_eq!(module.status, ModuleStatus::Available);

        module.checklist[0].is_completed = true;
        module.recalculate();
        assert_eq!(module.completion_percentage, 25);
        assert_eq!(module.status, ModuleStatus::InProgress);
        assert!(!module.is_completed);

        for item in &mut module.checklist {
            item.is_completed = true;
        }
        module.recalculate();
        assert_eq!(module.completion_percentage, 100);
        assert_eq!(module.status, ModuleStatus::Completed);
        assert!(module.is_completed);
    }

    #[test]
    fn locked_module_stays_locked_through_recalculate() {
        let mut module = module_with_items(2);
        module.is_locked = true;
        module.status = ModuleStatus::Locked;
        module.checklist[0].is_completed = true;
        module.recalculate();
        assert_eq!(module.status, ModuleStatus::Locked);
        assert_eq!(module.completion_percentage, 50);
    }

    #[test]
    fn checklist_item_builder() {
        let item = ChecklistItem::new("m1-arrays", "module-1", "Master arrays", "practice")
            .checkpoint()
            .minutes(90)
            .with_resources(&["m1-neetcode"]);
        assert!(item.is_checkpoint);
        assert_eq!(item.time_estimate, Some(90));
        assert_eq!(item.resource_ids, vec!["m1-neetcode".to_string()]);
        assert!(!item.is_completed);
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ModuleStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn resource_type_serializes_lowercase() {
        let json = serde_json::to_string(&ResourceType::Leetcode).unwrap();
        assert_eq!(json, "\"leetcode\"");
    }

    #[test]
    fn resource_serializes_type_field() {
        let resource = Resource::new(
            "m1-two-sum",
            "module-1",
            ResourceType::Leetcode,
            "Two Sum",
            "https://leetcode.com/problems/two-sum/",
            20,
        )
        .with_difficulty(Difficulty::Easy)
        .with_pattern("Hash Map");

        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.contains("\"type\":\"leetcode\""));
        assert!(json.contains("\"difficulty\":\"Easy\""));
        assert!(json.contains("\"moduleId\":\"module-1\""));
    }
}
