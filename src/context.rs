//! Application Context
//!
//! The planner shared with every component via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::planner::Planner;
use crate::store::PlannerStore;

/// Planner wired to the HTTP client and the reactive store
pub type AppPlanner = Planner<HttpTodoApi, PlannerStore>;

/// Get the planner from context
pub fn use_planner() -> AppPlanner {
    expect_context::<AppPlanner>()
}
