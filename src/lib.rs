//! Trailhead - a local-first learning roadmap tracker
//!
//! Trailhead tracks your progress through a curated AI engineering roadmap:
//! curriculum modules with checklists and resources, DSA problem patterns,
//! and four multi-phase capstone projects. Everything lives in a single
//! progress file; there is no server and no account.

pub mod catalog;
pub mod config;
pub mod error;
pub mod roadmap;
pub mod store;

pub use config::Config;
pub use error::StoreError;
pub use store::{ProgressState, ProgressStore};
