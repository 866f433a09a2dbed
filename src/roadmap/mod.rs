//! Roadmap domain model: modules, resources, projects, and unlock rules

pub mod model;
pub mod project;
pub mod unlock;

pub use model::{
    ChecklistItem, Difficulty, DsaPattern, Module, ModuleStatus, Problem, Resource, ResourceType,
};
pub use project::{Project, ProjectDifficulty, ProjectId, ProjectPhase, ProjectStep};
