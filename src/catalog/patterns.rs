//! The hand-authored DSA pattern catalog
//!
//! Pattern groups for the problems browser. Completion marks made while
//! browsing are session-local; persistent problem statistics come from the
//! DSA module's leetcode resources instead (see `ProgressState::problem_stats`).

use crate::roadmap::model::{Difficulty, DsaPattern, Problem};

fn problem(id: &str, title: &str, difficulty: Difficulty, pattern: &str) -> Problem {
    Problem {
        id: id.into(),
        title: title.into(),
        difficulty,
        pattern: pattern.into(),
        module_id: "module-1".into(),
    }
}

/// Build the default pattern groups in recommended study order.
pub fn default_patterns() -> Vec<DsaPattern> {
    vec![
        DsaPattern {
            name: "Arrays & Hashing".into(),
            description: "Trade memory for lookups; the base layer for everything else".into(),
            problems: vec![
                problem("p-two-sum", "Two Sum", Difficulty::Easy, "Arrays & Hashing"),
                problem("p-group-anagrams", "Group Anagrams", Difficulty::Medium, "Arrays & Hashing"),
                problem("p-top-k", "Top K Frequent Elements", Difficulty::Medium, "Arrays & Hashing"),
            ],
        },
        DsaPattern {
            name: "Two Pointers".into(),
            description: "Shrink a search space from both ends of a sorted structure".into(),
            problems: vec![
                problem("p-valid-palindrome", "Valid Palindrome", Difficulty::Easy, "Two Pointers"),
                problem("p-three-sum", "3Sum", Difficulty::Medium, "Two Pointers"),
                problem("p-container-water", "Container With Most Water", Difficulty::Medium, "Two Pointers"),
            ],
        },
        DsaPattern {
            name: "Sliding Window".into(),
            description: "Maintain an invariant over a moving subarray or substring".into(),
            problems: vec![
                problem("p-best-time", "Best Time to Buy and Sell Stock", Difficulty::Easy, "Sliding Window"),
                problem("p-longest-substring", "Longest Substring Without Repeating Characters", Difficulty::Medium, "Sliding Window"),
                problem("p-min-window", "Minimum Window Substring", Difficulty::Hard, "Sliding Window"),
            ],
        },
        DsaPattern {
            name: "Trees".into(),
            description: "Recursion over hierarchical structure; know all four traversals cold".into(),
            problems: vec![
                problem("p-invert-tree", "Invert Binary Tree", Difficulty::Easy, "Trees"),
                problem("p-level-order", "Binary Tree Level Order Traversal", Difficulty::Medium, "Trees"),
                problem("p-serialize-tree", "Serialize and Deserialize Binary Tree", Difficulty::Hard, "Trees"),
            ],
        },
        DsaPattern {
            name: "Graphs".into(),
            description: "BFS for shortest paths, DFS for structure, toposort for ordering".into(),
            problems: vec![
                problem("p-num-islands", "Number of Islands", Difficulty::Medium, "Graphs"),
                problem("p-course-schedule", "Course Schedule", Difficulty::Medium, "Graphs"),
                problem("p-word-ladder", "Word Ladder", Difficulty::Hard, "Graphs"),
            ],
        },
        DsaPattern {
            name: "Dynamic Programming".into(),
            description: "Define the state, find the recurrence, then optimize the table".into(),
            problems: vec![
                problem("p-climbing-stairs", "Climbing Stairs", Difficulty::Easy, "Dynamic Programming"),
                problem("p-coin-change", "Coin Change", Difficulty::Medium, "Dynamic Programming"),
                problem("p-edit-distance", "Edit Distance", Difficulty::Hard, "Dynamic Programming"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn problem_ids_are_unique() {
        let patterns = default_patterns();
        let mut seen = HashSet::new();
        for pattern in &patterns {
            for problem in &pattern.problems {
                assert!(seen.insert(problem.id.clone()), "duplicate {}", problem.id);
            }
        }
    }

    #[test]
    fn problems_carry_their_pattern_name() {
        for pattern in default_patterns() {
            for problem in &pattern.problems {
                assert_eq!(problem.pattern, pattern.name);
                assert_eq!(problem.module_id, "module-1");
            }
        }
    }
}
