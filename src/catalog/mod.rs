//! Static content catalog
//!
//! Hand-authored curriculum data: modules with checklists and resources,
//! capstone projects, and DSA pattern groups. Pure data with no behavior;
//! the progress store copies these defaults on first run.

mod modules;
mod patterns;
mod projects;

pub use modules::default_modules;
pub use patterns::default_patterns;
pub use projects::default_projects;
