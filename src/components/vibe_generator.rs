//! Vibe Generator Component
//!
//! Prompt input, vibe presets and the generate button, painted with the
//! selected vibe's gradient.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_planner;
use crate::store::PlannerStateStoreFields;
use crate::vibes::VIBE_PRESETS;

#[component]
pub fn VibeGenerator() -> impl IntoView {
    let planner = use_planner();
    let state = *planner.state();

    let theme = {
        let planner = planner.clone();
        Memo::new(move |_| {
            state.vibe().track();
            planner.theme()
        })
    };
    let loading = move || state.with(|s| s.loading());

    let generate = {
        let planner = planner.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let planner = planner.clone();
            spawn_local(async move {
                let _ = planner.generate().await;
            });
        }
    };

    let set_prompt = {
        let planner = planner.clone();
        move |ev: web_sys::Event| planner.set_prompt(event_target_value(&ev))
    };

    let dismiss_error = {
        let planner = planner.clone();
        move |_: web_sys::MouseEvent| planner.clear_error()
    };

    view! {
        <form
            class=move || format!("generator-panel bg-gradient-to-br {}", theme.get().gradient_class())
            on:submit=generate
        >
            <p class="generator-kicker">"Vibe generator"</p>
            <h3>"What are we on today?"</h3>

            <input
                type="text"
                placeholder="Describe your day..."
                prop:value=move || state.prompt().get()
                on:input=set_prompt
            />

            <div class="vibe-row">
                {VIBE_PRESETS.iter().map(|preset| {
                    let key = preset.key;
                    let planner = planner.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if state.vibe().get() == key { "vibe-chip active" } else { "vibe-chip" }
                            on:click=move |_| planner.select_vibe(key)
                        >
                            {preset.label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button type="submit" class="generate-btn" disabled=loading>
                {move || if loading() { "Generating…" } else { "Generate list" }}
            </button>

            <Show when=move || state.error().with(|e| !e.is_empty())>
                <p class="generator-error">
                    {move || state.error().get()}
                    <button type="button" class="dismiss-btn" aria-label="dismiss" on:click=dismiss_error.clone()>
                        "×"
                    </button>
                </p>
            </Show>
        </form>
    }
}
