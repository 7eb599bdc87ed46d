//! Task List Component
//!
//! Renders the planner's items in collection order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_planner;
use crate::models::TaskItem;
use crate::store::PlannerStateStoreFields;

/// Rows are keyed on the whole item: any field the server changes rebuilds
/// the row.
fn row_key(item: &TaskItem) -> TaskItem {
    item.clone()
}

#[component]
pub fn TaskList() -> impl IntoView {
    let state = *use_planner().state();

    view! {
        <section class="task-list">
            <div class="task-list-header">
                <span class="task-list-title">"Your micro-plan"</span>
                <span class="task-list-hint">"Tap to complete"</span>
            </div>

            <ul class="task-rows">
                <For
                    each=move || state.items().get()
                    key=row_key
                    children=move |item| view! { <TaskRow item=item /> }
                />
            </ul>

            <Show when=move || state.items().with(|items| items.is_empty())>
                <div class="empty-state">
                    <p>"Nothing here yet. Generate a plan to kick things off."</p>
                </div>
            </Show>
        </section>
    }
}
