//! Prerequisite evaluation and unlock propagation
//!
//! The prerequisite graph is a small, hand-authored DAG fixed in the catalog,
//! so every evaluation is a full scan over the module list. No cycle detection
//! is needed and none is performed.

use std::collections::HashSet;

use super::model::{Module, ModuleStatus};

/// True iff every prerequisite ID is in the completed set (vacuously true for
/// an empty prerequisite list).
pub fn prerequisites_met(completed: &HashSet<String>, prerequisites: &[String]) -> bool {
    prerequisites.iter().all(|id| completed.contains(id))
}

/// Decide whether a single module should transition from locked to available,
/// given the full module list.
pub fn module_unlockable(modules: &[Module], candidate: &Module) -> bool {
    candidate.prerequisites.iter().all(|prereq_id| {
        modules.iter().any(|m| m.id == *prereq_id && m.is_completed)
    })
}

/// IDs of every completed module
pub fn completed_module_ids(modules: &[Module]) -> HashSet<String> {
    modules.iter().filter(|m| m.is_completed).map(|m| m.id.clone()).collect()
}

/// Unlock every locked module whose prerequisites are now complete.
///
/// Runs after each checklist mutation. Unlocking never re-locks: completing a
/// module and then un-completing a prerequisite leaves the dependent unlocked.
pub fn refresh_unlocks(modules: &mut [Module]) {
    let completed = completed_module_ids(modules);
    for module in modules.iter_mut() {
        if module.is_locked && prerequisites_met(&completed, &module.prerequisites) {
            module.is_locked = false;
            module.status = ModuleStatus::Available;
            module.recalculate();
        }
    }
}
