//! Task Row Component
//!
//! One item: completion toggle, title, vibe/priority caption, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_planner;
use crate::models::TaskItem;

#[component]
pub fn TaskRow(item: TaskItem) -> impl IntoView {
    let planner = use_planner();

    let id = item.id.clone();
    let completed = item.completed;
    let target = item.toggle_target();
    let caption = format!("{} • {}", item.vibe_label(), item.priority);
    let badge_class = format!("priority-badge priority-{}", item.priority.as_str());

    let toggle = {
        let planner = planner.clone();
        let id = id.clone();
        move |_| {
            let planner = planner.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = planner.toggle_complete(&id, target).await;
            });
        }
    };

    let delete = move |_| {
        let planner = planner.clone();
        let id = id.clone();
        spawn_local(async move {
            let _ = planner.delete(&id).await;
        });
    };

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <div class="task-main">
                <button class="toggle-btn" aria-label="toggle complete" on:click=toggle>
                    {if completed { "✓" } else { "" }}
                </button>
                <div class="task-text">
                    <p class="task-title">{item.title.clone()}</p>
                    <p class="task-caption">{caption}</p>
                </div>
            </div>

            <div class="task-actions">
                <span class=badge_class>{item.priority.as_str()}</span>
                <button class="delete-btn" aria-label="delete" on:click=delete>"×"</button>
            </div>
        </li>
    }
}
