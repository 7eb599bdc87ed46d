//! Vibe Planner App
//!
//! Root component: generator panel on the left, task list on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use rolling_logger::LogBuffer;
use tracing::info;

use crate::api::HttpTodoApi;
use crate::components::{ActivityLog, TaskList, VibeGenerator};
use crate::config::ClientConfig;
use crate::planner::Planner;
use crate::store::PlannerState;

#[component]
pub fn App(log: LogBuffer) -> impl IntoView {
    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, ordering = %config.ordering, "starting planner");

    let store = Store::new(PlannerState::new());
    let planner = Planner::new(HttpTodoApi::new(config.clone()), store, config.ordering);

    // Provide context to all children
    provide_context(planner.clone());
    provide_context(log);

    // Load existing todos on mount
    Effect::new(move |_| {
        let planner = planner.clone();
        spawn_local(async move {
            let _ = planner.activate().await;
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Vibe Planner"</h1>
                <p class="tagline">"Describe your day, pick a vibe, get a micro-plan."</p>
            </header>

            <main class="planner-grid">
                <VibeGenerator />
                <TaskList />
            </main>

            <ActivityLog />
        </div>
    }
}
