//! Derived progress analytics
//!
//! Pure read-only views over `ProgressState`: counts, percentages, skill
//! distribution, activity series, streaks, and problem statistics. Nothing
//! here mutates state or touches the clock; callers pass `today` in.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;

use super::state::ProgressState;
use crate::roadmap::model::{Difficulty, Resource, ResourceType, percentage};

/// Fixed mapping from module ID to the skill bucket it reports under.
/// One bucket per module; the bucket shows that module's percentage.
static SKILL_BUCKETS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("module-0", "Foundations"),
        ("module-1", "Problem Solving"),
        ("module-2", "Classical ML"),
        ("module-3", "Deep Learning"),
        ("module-4", "NLP"),
        ("module-5", "LLMs"),
        ("module-6", "Retrieval"),
        ("module-7", "Agents"),
        ("module-8", "MLOps"),
        ("module-9", "Speech"),
    ]
});

/// The next incomplete module, for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextMilestone {
    /// Module ID
    pub module_id: String,
    /// Module title
    pub title: String,
    /// Checklist items still open
    pub remaining_items: usize,
}

/// Aggregate DSA problem statistics.
///
/// Sourced from the DSA module's leetcode resources, not from the pattern
/// catalog; the catalog carries no persisted completion of its own, so the
/// two views are intentionally independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemStats {
    pub total: usize,
    pub completed: usize,
    pub easy_total: usize,
    pub easy_completed: usize,
    pub medium_total: usize,
    pub medium_completed: usize,
    pub hard_total: usize,
    pub hard_completed: usize,
}

impl ProgressState {
    /// Completed checklist items across all modules
    pub fn completed_item_count(&self) -> usize {
        self.modules.iter().map(|m| m.completed_items()).sum()
    }

    /// Total checklist items across all modules
    pub fn total_item_count(&self) -> usize {
        self.modules.iter().map(|m| m.total_items()).sum()
    }

    /// Rounded percentage of all checklist items completed
    pub fn overall_percentage(&self) -> u8 {
        percentage(self.completed_item_count(), self.total_item_count())
    }

    /// Per-skill completion percentages, in catalog order
    pub fn skill_distribution(&self) -> Vec<(&'static str, u8)> {
        SKILL_BUCKETS
            .iter()
            .filter_map(|(module_id, skill)| {
                self.module(module_id).map(|m| (*skill, m.completion_percentage))
            })
            .collect()
    }

    /// Items completed on each of the last `days` days, oldest first,
    /// zero-filled for days with no activity.
    pub fn activity_series(&self, days: usize, today: NaiveDate) -> Vec<(NaiveDate, u32)> {
        (0..days)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
            .map(|date| {
                let count = self.daily_activity.get(&date.to_string()).copied().unwrap_or(0);
                (date, count)
            })
            .collect()
    }

    /// Whether any item was completed on the given day
    fn active_on(&self, date: NaiveDate) -> bool {
        self.daily_activity.get(&date.to_string()).is_some_and(|count| *count > 0)
    }

    /// Consecutive active days ending today or yesterday. A last activity
    /// older than yesterday means the streak is broken: 0.
    pub fn streak_on(&self, today: NaiveDate) -> u32 {
        let start = if self.active_on(today) {
            Some(today)
        } else {
            today.checked_sub_days(Days::new(1)).filter(|y| self.active_on(*y))
        };
        let Some(mut cursor) = start else {
            return 0;
        };

        let mut streak = 0;
        while self.active_on(cursor) {
            streak += 1;
            match cursor.checked_sub_days(Days::new(1)) {
                Some(prev) => cursor = prev,
                None => break,
            }
        }
        streak
    }

    /// First incomplete module in curriculum order
    pub fn next_milestone(&self) -> Option<NextMilestone> {
        self.modules.iter().find(|m| !m.is_completed).map(|m| NextMilestone {
            module_id: m.id.clone(),
            title: m.title.clone(),
            remaining_items: m.total_items() - m.completed_items(),
        })
    }

    /// Every resource across all modules, in catalog order
    pub fn all_resources(&self) -> Vec<&Resource> {
        self.modules.iter().flat_map(|m| m.resources.iter()).collect()
    }

    /// Resources of one kind
    pub fn resources_by_type(&self, resource_type: ResourceType) -> Vec<&Resource> {
        self.all_resources().into_iter().filter(|r| r.resource_type == resource_type).collect()
    }

    /// Favorited resources only
    pub fn favorite_resources(&self) -> Vec<&Resource> {
        self.all_resources().into_iter().filter(|r| r.is_favorite).collect()
    }

    /// DSA problem statistics from the DSA module's leetcode resources
    pub fn problem_stats(&self) -> ProblemStats {
        let mut stats = ProblemStats::default();
        let Some(dsa) = self.module("module-1") else {
            return stats;
        };
        for resource in dsa.resources.iter().filter(|r| r.resource_type == ResourceType::Leetcode) {
            stats.total += 1;
            let done = resource.is_completed;
            if done {
                stats.completed += 1;
            }
            match resource.difficulty {
                Some(Difficulty::Easy) => {
                    stats.easy_total += 1;
                    stats.easy_completed += done as usize;
                }
                Some(Difficulty::Medium) => {
                    stats.medium_total += 1;
                    stats.medium_completed += done as usize;
                }
                Some(Difficulty::Hard) => {
                    stats.hard_total += 1;
                    stats.hard_completed += done as usize;
                }
                None => {}
            }
        }
        stats
    }

    /// IDs of completed modules, in catalog order
    pub fn completed_module_ids(&self) -> Vec<String> {
        self.modules.iter().filter(|m| m.is_completed).map(|m| m.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn state_with_activity(days: &[(&str, u32)]) -> ProgressState {
        let mut state = ProgressState::default();
        for (day, count) in days {
            state.daily_activity.insert(day.to_string(), *count);
        }
        state
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let state =
            state_with_activity(&[("2026-08-23", 1), ("2026-08-24", 2), ("2026-08-25", 1)]);
        assert_eq!(state.streak_on(date("2026-08-25")), 3);
    }

    #[test]
    fn streak_anchored_at_yesterday_still_counts() {
        let state = state_with_activity(&[("2026-08-23", 1), ("2026-08-24", 1)]);
        assert_eq!(state.streak_on(date("2026-08-25")), 2);
    }

    #[test]
    fn stale_activity_resets_streak_to_zero() {
        let state = state_with_activity(&[("2026-08-20", 5), ("2026-08-21", 5)]);
        assert_eq!(state.streak_on(date("2026-08-25")), 0);
    }

    #[test]
    fn gap_day_stops_the_walk() {
        // 22nd missing: only 24th and 23rd count.
        let state =
            state_with_activity(&[("2026-08-20", 1), ("2026-08-23", 1), ("2026-08-24", 1)]);
        assert_eq!(state.streak_on(date("2026-08-24")), 2);
    }

    #[test]
    fn zero_count_days_do_not_extend_streaks() {
        let state = state_with_activity(&[("2026-08-24", 0), ("2026-08-25", 1)]);
        assert_eq!(state.streak_on(date("2026-08-25")), 1);
    }

    #[test]
    fn empty_activity_means_no_streak() {
        let state = ProgressState::default();
        assert_eq!(state.streak_on(date("2026-08-25")), 0);
    }

    #[test]
    fn activity_series_is_zero_filled_and_ordered() {
        let state = state_with_activity(&[("2026-08-23", 2), ("2026-08-25", 1)]);
        let series = state.activity_series(4, date("2026-08-25"));
        assert_eq!(
            series,
            vec![
                (date("2026-08-22"), 0),
                (date("2026-08-23"), 2),
                (date("2026-08-24"), 0),
                (date("2026-08-25"), 1),
            ]
        );
    }

    #[test]
    fn skill_distribution_covers_every_module() {
        let mut state = ProgressState::default();
        let distribution = state.skill_distribution();
        assert_eq!(distribution.len(), state.modules.len());
        assert!(distribution.iter().all(|(_, pct)| *pct == 0));

        for item in &mut state.modules[0].checklist {
            item.is_completed = true;
        }
        state.modules[0].recalculate();
        let distribution = state.skill_distribution();
        assert_eq!(distribution[0], ("Foundations", 100));
    }

    #[test]
    fn next_milestone_is_first_incomplete_module() {
        let mut state = ProgressState::default();
        let milestone = state.next_milestone().unwrap();
        assert_eq!(milestone.module_id, "module-0");
        assert_eq!(milestone.remaining_items, state.modules[0].total_items());

        for item in &mut state.modules[0].checklist {
            item.is_completed = true;
        }
        state.modules[0].recalculate();
        let milestone = state.next_milestone().unwrap();
        assert_eq!(milestone.module_id, "module-1");
    }

    #[test]
    fn problem_stats_come_from_dsa_leetcode_resources() {
        let mut state = ProgressState::default();
        let before = state.problem_stats();
        assert!(before.total >= 5);
        assert_eq!(before.completed, 0);
        assert_eq!(before.total, before.easy_total + before.medium_total + before.hard_total);

        // Complete one easy problem resource.
        let dsa = state.module_mut("module-1").unwrap();
        let easy = dsa
            .resources
            .iter_mut()
            .find(|r| r.difficulty == Some(Difficulty::Easy))
            .unwrap();
        easy.is_completed = true;

        let after = state.problem_stats();
        assert_eq!(after.completed, 1);
        assert_eq!(after.easy_completed, 1);
        assert_eq!(after.hard_completed, 0);
    }

    #[test]
    fn resource_views_filter_correctly() {
        let mut state = ProgressState::default();
        let total = state.all_resources().len();
        assert!(total > 10);

        let videos = state.resources_by_type(ResourceType::Video);
        assert!(!videos.is_empty());
        assert!(videos.len() < total);

        assert!(state.favorite_resources().is_empty());
        state.modules[0].resources[0].is_favorite = true;
        assert_eq!(state.favorite_resources().len(), 1);
    }

    #[test]
    fn completed_module_ids_tracks_completion() {
        let mut state = ProgressState::default();
        assert!(state.completed_module_ids().is_empty());
        for item in &mut state.modules[2].checklist {
            item.is_completed = true;
        }
        state.modules[2].recalculate();
        assert_eq!(state.completed_module_ids(), vec!["module-2".to_string()]);
    }
}
