//! The progress store
//!
//! Single source of truth for user progress. An explicit object owned by the
//! caller and passed by reference; there is no global state. Every mutating
//! action follows the same pipeline: locate by ID, flip flags, recompute the
//! owning module or project, re-run unlock evaluation, record activity, and
//! persist the whole state to the progress file.
//!
//! Unknown IDs are silent no-ops, logged at debug level. The store never
//! prompts: checkpoint confirmation belongs to the presentation layer.

pub mod persist;
pub mod state;
pub mod stats;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::roadmap::model::ModuleStatus;
use crate::roadmap::unlock;

pub use persist::EXPORT_FILE_NAME;
pub use state::{AudioMetrics, ProgressState, STATE_VERSION};
pub use stats::{NextMilestone, ProblemStats};

/// Owns the progress state and the file it persists to.
pub struct ProgressStore {
    state: ProgressState,
    path: PathBuf,
}

impl ProgressStore {
    /// Open the store, restoring state from the progress file or starting
    /// from catalog defaults when the file is absent or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = persist::read_state(&path).unwrap_or_default();
        Self { state, path }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Flip a checklist item's completed flag.
    ///
    /// Checkpoint items are toggled like any other; confirming them first is
    /// the caller's responsibility.
    pub fn toggle_checklist_item(
        &mut self,
        module_id: &str,
        item_id: &str,
    ) -> Result<(), StoreError> {
        let now_complete = {
            let Some(module) = self.state.module_mut(module_id) else {
                debug!("toggle_checklist_item: unknown module {module_id}");
                return Ok(());
            };
            let Some(item) = module.checklist_item_mut(item_id) else {
                debug!("toggle_checklist_item: unknown item {item_id} in {module_id}");
                return Ok(());
            };
            item.is_completed = !item.is_completed;
            let done = item.is_completed;
            module.recalculate();
            done
        };
        unlock::refresh_unlocks(&mut self.state.modules);
        self.refresh_projects();
        if now_complete {
            self.touch(1);
        }
        self.commit()
    }

    /// Flip a resource's completed flag. Resources are independent of
    /// checklist progress; module percentages do not change.
    pub fn toggle_resource_complete(
        &mut self,
        module_id: &str,
        resource_id: &str,
    ) -> Result<(), StoreError> {
        let now_complete = {
            let Some(module) = self.state.module_mut(module_id) else {
                debug!("toggle_resource_complete: unknown module {module_id}");
                return Ok(());
            };
            let Some(resource) = module.resource_mut(resource_id) else {
                debug!("toggle_resource_complete: unknown resource {resource_id} in {module_id}");
                return Ok(());
            };
            resource.is_completed = !resource.is_completed;
            resource.is_completed
        };
        if now_complete {
            self.touch(1);
        }
        self.commit()
    }

    /// Flip a resource's favorite flag.
    pub fn toggle_resource_favorite(
        &mut self,
        module_id: &str,
        resource_id: &str,
    ) -> Result<(), StoreError> {
        {
            let Some(module) = self.state.module_mut(module_id) else {
                debug!("toggle_resource_favorite: unknown module {module_id}");
                return Ok(());
            };
            let Some(resource) = module.resource_mut(resource_id) else {
                debug!("toggle_resource_favorite: unknown resource {resource_id} in {module_id}");
                return Ok(());
            };
            resource.is_favorite = !resource.is_favorite;
        }
        self.commit()
    }

    /// Force every checklist item in a module to the given completion state.
    pub fn mark_module_completed(
        &mut self,
        module_id: &str,
        completed: bool,
    ) -> Result<(), StoreError> {
        let newly_completed = {
            let Some(module) = self.state.module_mut(module_id) else {
                debug!("mark_module_completed: unknown module {module_id}");
                return Ok(());
            };
            let newly = if completed {
                module.checklist.iter().filter(|i| !i.is_completed).count() as u32
            } else {
                0
            };
            for item in &mut module.checklist {
                item.is_completed = completed;
            }
            module.recalculate();
            newly
        };
        unlock::refresh_unlocks(&mut self.state.modules);
        self.refresh_projects();
        if newly_completed > 0 {
            self.touch(newly_completed);
        }
        self.commit()
    }

    /// Administrative override: unlock a module regardless of prerequisites.
    pub fn unlock_module(&mut self, module_id: &str) -> Result<(), StoreError> {
        {
            let Some(module) = self.state.module_mut(module_id) else {
                debug!("unlock_module: unknown module {module_id}");
                return Ok(());
            };
            module.is_locked = false;
            module.status = ModuleStatus::Available;
            module.recalculate();
            info!("unlocked {module_id} by override");
        }
        self.commit()
    }

    /// Toggle a project step's membership in the completed-step list.
    ///
    /// Every project is rescanned afterwards; the catalog is small enough
    /// that the full pass does not matter.
    pub fn toggle_step_complete(&mut self, step_id: &str) -> Result<(), StoreError> {
        if !self.state.projects.iter().any(|p| p.contains_step(step_id)) {
            debug!("toggle_step_complete: unknown step {step_id}");
            return Ok(());
        }
        let added = match self.state.completed_steps.iter().position(|id| id == step_id) {
            Some(index) => {
                self.state.completed_steps.remove(index);
                false
            }
            None => {
                self.state.completed_steps.push(step_id.to_string());
                true
            }
        };
        self.refresh_projects();
        if added {
            self.touch(1);
        }
        self.commit()
    }

    /// Toggle a video's membership in the watched list.
    pub fn mark_video_watched(&mut self, video_id: &str) -> Result<(), StoreError> {
        let added = match self.state.watched_videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.state.watched_videos.remove(index);
                false
            }
            None => {
                self.state.watched_videos.push(video_id.to_string());
                true
            }
        };
        if added {
            self.touch(1);
        }
        self.commit()
    }

    /// Store the strict-mode preference.
    pub fn set_strict_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.state.strict_mode = enabled;
        self.commit()
    }

    /// Log study time in minutes.
    pub fn add_time_invested(&mut self, minutes: u32) -> Result<(), StoreError> {
        self.state.total_time_invested += minutes;
        self.commit()
    }

    /// Throw everything away and restore catalog defaults.
    pub fn reset_progress(&mut self) -> Result<(), StoreError> {
        info!("resetting all progress to catalog defaults");
        self.state = ProgressState::from_catalog();
        self.commit()
    }

    /// Serialize the current state as the versioned export document.
    pub fn export_progress(&self) -> Result<String, StoreError> {
        persist::to_json(&self.state)
    }

    /// Replace the entire state with an imported export document.
    ///
    /// On any parse or version failure the existing state is left untouched;
    /// nothing is ever partially applied.
    pub fn import_progress(&mut self, json: &str) -> Result<(), StoreError> {
        let state = persist::from_json(json)?;
        self.state = state;
        info!("imported progress ({} completed items)", self.state.completed_item_count());
        self.commit()
    }

    /// Recompute every project's percentage and status label.
    fn refresh_projects(&mut self) {
        let completed_modules = unlock::completed_module_ids(&self.state.modules);
        let completed_steps = self.state.completed_steps.clone();
        for project in &mut self.state.projects {
            let met = unlock::prerequisites_met(&completed_modules, &project.prerequisites);
            project.recalculate(&completed_steps, met);
        }
    }

    /// Record completion events for today and refresh the streak. Bulk
    /// actions pass the number of items that actually flipped to completed.
    fn touch(&mut self, count: u32) {
        self.record_activity(Local::now().date_naive(), count);
    }

    fn record_activity(&mut self, today: NaiveDate, count: u32) {
        let key = today.to_string();
        *self.state.daily_activity.entry(key.clone()).or_insert(0) += count;
        self.state.last_active_date = Some(key);
        self.state.current_streak = self.state.streak_on(today);
    }

    /// Persist the whole state. Storage failures surface to the caller;
    /// there are no retries.
    fn commit(&self) -> Result<(), StoreError> {
        persist::write_state(&self.path, &self.state)
    }
}
