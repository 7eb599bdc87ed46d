//! Activity Log Component
//!
//! Collapsible panel listing the most recent log lines, newest first.
//! Lines are read from the rolling buffer each time the panel is opened.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let log = expect_context::<LogBuffer>();
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move |_: web_sys::Event| set_lines.set(log.lines());

    view! {
        <details class="activity-log" on:toggle=refresh>
            <summary>"Activity"</summary>
            <ul class="activity-lines">
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .rev()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()
                }}
            </ul>
        </details>
    }
}
