//! UI Components
//!
//! Leptos components for the generator panel and the task list.

mod activity_log;
mod task_list;
mod task_row;
mod vibe_generator;

pub use activity_log::ActivityLog;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use vibe_generator::VibeGenerator;
