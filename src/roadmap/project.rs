//! Capstone project model
//!
//! Projects are larger applied builds, distinct from modules. Step completion
//! lives in the progress state's `completed_steps` list rather than on the step
//! itself, so the catalog definition of a project never mutates.

use serde::{Deserialize, Serialize};

use super::model::{ModuleStatus, percentage};

/// The four capstone projects. A closed set: views and exports refer to
/// projects by these identifiers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectId {
    /// Project 1: retrieval-augmented knowledge assistant
    RagAssistant,
    /// Project 2: multi-agent task orchestrator
    AgentOrchestrator,
    /// Project 3: domain fine-tuning pipeline
    FinetunePipeline,
    /// Project 4: realtime voice assistant
    VoiceAssistant,
}

impl ProjectId {
    /// Stable identifier used in exports and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectId::RagAssistant => "rag-assistant",
            ProjectId::AgentOrchestrator => "agent-orchestrator",
            ProjectId::FinetunePipeline => "finetune-pipeline",
            ProjectId::VoiceAssistant => "voice-assistant",
        }
    }

    /// Parse a command-line identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rag-assistant" => Some(ProjectId::RagAssistant),
            "agent-orchestrator" => Some(ProjectId::AgentOrchestrator),
            "finetune-pipeline" => Some(ProjectId::FinetunePipeline),
            "voice-assistant" => Some(ProjectId::VoiceAssistant),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectDifficulty {
    Advanced,
    Expert,
}

/// A single build step within a project phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStep {
    /// Unique identifier (e.g., "rag-ingest-chunking")
    pub id: String,
    /// Display title
    pub title: String,
    /// What to build and why
    pub description: String,
    /// Module that teaches the skills this step exercises
    pub module_id: String,
    /// Rough effort estimate in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
    /// Supporting resource IDs
    #[serde(default)]
    pub resource_ids: Vec<String>,
    /// Starter snippet, when one helps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// How to know the step is done
    pub validation_criteria: Vec<String>,
    /// Reserved; steps are never individually locked today
    #[serde(default)]
    pub is_locked: bool,
    /// Name of the owning phase
    pub phase_name: String,
}

impl ProjectStep {
    /// Create a new step
    pub fn new(
        id: impl Into<String>,
        phase_name: impl Into<String>,
        module_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            module_id: module_id.into(),
            estimated_hours: None,
            resource_ids: Vec::new(),
            code_snippet: None,
            validation_criteria: Vec::new(),
            is_locked: false,
            phase_name: phase_name.into(),
        }
    }

    /// Set the effort estimate
    pub fn hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Add validation criteria
    pub fn validate(mut self, criteria: &[&str]) -> Self {
        self.validation_criteria = criteria.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Attach a starter snippet
    pub fn snippet(mut self, code: impl Into<String>) -> Self {
        self.code_snippet = Some(code.into());
        self
    }
}

/// An ordered phase of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    /// Phase name (e.g., "Phase 1: Ingestion")
    pub name: String,
    /// Duration label for display (e.g., "1-2 weeks")
    pub duration: String,
    /// Steps in build order
    pub steps: Vec<ProjectStep>,
}

/// A multi-phase capstone project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Closed-set identifier
    pub id: ProjectId,
    /// Display title
    pub title: String,
    /// One-line pitch
    pub tagline: String,
    /// Difficulty tier
    pub difficulty: ProjectDifficulty,
    /// Technologies the build uses
    pub tech_stack: Vec<String>,
    /// Module IDs that should be completed first
    pub prerequisites: Vec<String>,
    /// Phases in order
    pub phases: Vec<ProjectPhase>,
    /// Rounded percentage of completed steps (0-100)
    pub completion_percentage: u8,
    /// Current status label. Status never gates viewing project content;
    /// it only affects the displayed label and ordering.
    pub status: ModuleStatus,
}

impl Project {
    /// Total step count across all phases
    pub fn total_steps(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }

    /// Iterate over all steps across phases
    pub fn steps(&self) -> impl Iterator<Item = &ProjectStep> {
        self.phases.iter().flat_map(|p| p.steps.iter())
    }

    /// Find a step by ID
    pub fn find_step(&self, step_id: &str) -> Option<&ProjectStep> {
        self.steps().find(|s| s.id == step_id)
    }

    /// Whether any of this project's steps has the given ID
    pub fn contains_step(&self, step_id: &str) -> bool {
        self.find_step(step_id).is_some()
    }

    /// Recompute percentage and status from the global completed-step list
    /// and the set of completed module IDs (for the availability label).
    pub fn recalculate(&mut self, completed_steps: &[String], prerequisites_met: bool) {
        let total = self.total_steps();
        let done = self.steps().filter(|s| completed_steps.iter().any(|id| *id == s.id)).count();
        self.completion_percentage = percentage(done, total);
        self.status = if self.completion_percentage == 100 {
            ModuleStatus::Completed
        } else if done > 0 {
            ModuleStatus::InProgress
        } else if prerequisites_met {
            ModuleStatus::Available
        } else {
            ModuleStatus::Locked
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project_with_steps(phases: usize, steps_per_phase: usize) -> Project {
        Project {
            id: ProjectId::RagAssistant,
            title: "Test Project".into(),
            tagline: "A test".into(),
            difficulty: ProjectDifficulty::Advanced,
            tech_stack: Vec::new(),
            prerequisites: vec!["module-5".into()],
            phases: (0..phases)
                .map(|p| ProjectPhase {
                    name: format!("Phase {}", p + 1),
                    duration: "1 week".into(),
                    steps: (0..steps_per_phase)
                        .map(|s| {
                            ProjectStep::new(
                                format!("step-{p}-{s}"),
                                format!("Phase {}", p + 1),
                                "module-5",
                                "Build it",
                                "Build the thing",
                            )
                        })
                        .collect(),
                })
                .collect(),
            completion_percentage: 0,
            status: ModuleStatus::Locked,
        }
    }

    #[test]
    fn three_of_nine_steps_is_33_percent() {
        let mut project = project_with_steps(3, 3);
        let completed =
            vec!["step-0-0".to_string(), "step-1-1".to_string(), "step-2-2".to_string()];
        project.recalculate(&completed, false);
        assert_eq!(project.completion_percentage, 33);
        assert_eq!(project.status, ModuleStatus::InProgress);
    }

    #[test]
    fn all_steps_complete_the_project() {
        let mut project = project_with_steps(2, 2);
        let completed: Vec<String> = project.steps().map(|s| s.id.clone()).collect();
        project.recalculate(&completed, true);
        assert_eq!(project.completion_percentage, 100);
        assert_eq!(project.status, ModuleStatus::Completed);
    }

    #[test]
    fn untouched_project_status_follows_prerequisites() {
        let mut project = project_with_steps(1, 3);
        project.recalculate(&[], false);
        assert_eq!(project.status, ModuleStatus::Locked);
        project.recalculate(&[], true);
        assert_eq!(project.status, ModuleStatus::Available);
    }

    #[test]
    fn unknown_step_ids_do_not_count() {
        let mut project = project_with_steps(1, 4);
        project.recalculate(&["nope".to_string()], true);
        assert_eq!(project.completion_percentage, 0);
    }

    #[test]
    fn project_id_round_trips_through_parse() {
        for id in [
            ProjectId::RagAssistant,
            ProjectId::AgentOrchestrator,
            ProjectId::FinetunePipeline,
            ProjectId::VoiceAssistant,
        ] {
            assert_eq!(ProjectId::parse(id.as_str()), Some(id));
        }
        assert_eq!(ProjectId::parse("unknown"), None);
    }

    #[test]
    fn project_id_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectId::VoiceAssistant).unwrap();
        assert_eq!(json, "\"voice-assistant\"");
    }
}
