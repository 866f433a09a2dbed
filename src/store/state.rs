//! Root progress state
//!
//! The single aggregate the store owns: modules and projects with their
//! embedded mutable flags, plus the activity map, streak, and the smaller
//! scalar fields. Serialized wholesale; field names follow the export format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::roadmap::{Module, Project, ProjectId};

/// Version of the persisted state layout
pub const STATE_VERSION: u32 = 1;

/// Voice-assistant quality metrics. Placeholder fields recorded per release of
/// project 4; nothing in the store produces them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioMetrics {
    /// Word error rate of the transcription stage
    #[serde(rename = "project4WER")]
    pub project4_wer: f32,
    /// End-to-end latency in milliseconds
    #[serde(rename = "project4Latency")]
    pub project4_latency: f32,
    /// Mean opinion score of synthesized speech
    #[serde(rename = "project4MOS")]
    pub project4_mos: f32,
}

/// Everything the store tracks for the single local user.
///
/// Missing fields deserialize to their defaults, so exports from older builds
/// that lack newer fields still import cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    /// Full module list with embedded completion flags
    #[serde(default = "catalog::default_modules")]
    pub modules: Vec<Module>,
    /// ISO date ("2026-08-25") to count of items completed that day
    #[serde(default)]
    pub daily_activity: BTreeMap<String, u32>,
    /// Consecutive days with at least one completion, ending today or yesterday
    #[serde(default)]
    pub current_streak: u32,
    /// ISO date of the most recent completion
    #[serde(default)]
    pub last_active_date: Option<String>,
    /// User preference; checkpoint prompts are shown regardless of this flag
    #[serde(default)]
    pub strict_mode: bool,
    /// Minutes logged via the add-time action
    #[serde(default)]
    pub total_time_invested: u32,
    /// IDs of completed project steps, across all projects
    #[serde(default)]
    pub completed_steps: Vec<String>,
    /// Project the user last chose to focus on
    #[serde(default)]
    pub active_project: Option<ProjectId>,
    /// Full project list with embedded status and percentage
    #[serde(default = "catalog::default_projects")]
    pub projects: Vec<Project>,
    /// IDs of video resources the user has watched
    #[serde(default)]
    pub watched_videos: Vec<String>,
    /// Project-4 quality metrics
    #[serde(default)]
    pub audio_metrics: AudioMetrics,
}

impl ProgressState {
    /// Fresh state with the catalog's initial values
    pub fn from_catalog() -> Self {
        Self {
            modules: catalog::default_modules(),
            daily_activity: BTreeMap::new(),
            current_streak: 0,
            last_active_date: None,
            strict_mode: false,
            total_time_invested: 0,
            completed_steps: Vec::new(),
            active_project: None,
            projects: catalog::default_projects(),
            watched_videos: Vec::new(),
            audio_metrics: AudioMetrics::default(),
        }
    }

    /// Find a module by ID
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Find a module by ID, mutably
    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.id == module_id)
    }

    /// Find a project by ID
    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::from_catalog()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_mirrors_catalog() {
        let state = ProgressState::default();
        assert_eq!(state.modules, catalog::default_modules());
        assert_eq!(state.projects, catalog::default_projects());
        assert!(state.daily_activity.is_empty());
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.total_time_invested, 0);
        assert!(state.completed_steps.is_empty());
        assert!(state.watched_videos.is_empty());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        // An export written before projects and audio metrics existed.
        let state: ProgressState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.modules.len(), catalog::default_modules().len());
        assert_eq!(state.projects.len(), 4);
        assert_eq!(state.audio_metrics, AudioMetrics::default());
        assert!(!state.strict_mode);
    }

    #[test]
    fn state_serializes_camel_case() {
        let json = serde_json::to_string(&ProgressState::default()).unwrap();
        assert!(json.contains("\"dailyActivity\""));
        assert!(json.contains("\"currentStreak\""));
        assert!(json.contains("\"lastActiveDate\""));
        assert!(json.contains("\"completedSteps\""));
        assert!(json.contains("\"watchedVideos\""));
        assert!(json.contains("\"completionPercentage\""));
    }

    #[test]
    fn audio_metrics_keep_their_legacy_field_names() {
        let json = serde_json::to_string(&AudioMetrics::default()).unwrap();
        assert_eq!(json, r#"{"project4WER":0.0,"project4Latency":0.0,"project4MOS":0.0}"#);
    }

    #[test]
    fn module_lookup_by_id() {
        let mut state = ProgressState::default();
        assert!(state.module("module-1").is_some());
        assert!(state.module("module-99").is_none());
        assert!(state.module_mut("module-1").is_some());
    }
}
