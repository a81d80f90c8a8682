//! Ledger Form Component
//!
//! Sale and purchase entry: pick a reference item, enter a quantity, submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Spinner;
use crate::context::use_api;
use crate::form::{parse_quantity, parse_selection, FormKind, FormState};
use crate::models::format_number;

#[component]
pub fn LedgerForm(kind: FormKind) -> impl IntoView {
    let api = use_api();
    let form = RwSignal::new(FormState::new(kind));

    // Reference list, fetched once on mount
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                let outcome = kind.load_choices(&api).await;
                form.try_update(|f| f.choices_loaded(outcome));
            });
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Invalid input stops here: no request is made
        let Some(Some(submission)) = form.try_update(|f| f.begin_submit()) else { return };
        let api = api.clone();
        spawn_local(async move {
            let outcome = kind.send(&api, submission).await;
            form.try_update(|f| f.finish_submit(outcome));
        });
    };

    let submitting = move || form.with(|f| f.submitting);
    let select_id = match kind {
        FormKind::Sale => "menu",
        FormKind::Purchase => "inventory",
    };

    view! {
        <form class="ledger-form" on:submit=on_submit>
            <div class="field">
                <label for=select_id>{kind.select_label()}</label>
                <select
                    id=select_id
                    prop:value=move || form.with(|f| f.selection.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let selection = parse_selection(&event_target_value(&ev));
                        form.update(|f| f.selection = selection);
                    }
                >
                    <option value="">"Select item"</option>
                    {move || form.with(|f| f.choices.clone()).into_iter().map(|choice| {
                        view! { <option value=choice.id.to_string()>{choice.label}</option> }
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label for="quantity">"Quantity"</label>
                <input
                    id="quantity"
                    type="number"
                    min="1"
                    prop:value=move || form.with(|f| format_number(f.quantity))
                    on:input=move |ev| {
                        let quantity = parse_quantity(&event_target_value(&ev));
                        form.update(|f| f.quantity = quantity);
                    }
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn primary" class:busy=submitting disabled=submitting>
                    <Show when=submitting>
                        <Spinner small=true />
                    </Show>
                    <span>{move || kind.submit_label(submitting())}</span>
                </button>
                <button type="button" class="btn link" on:click=move |_| form.update(|f| f.reset())>
                    "Reset"
                </button>
            </div>

            <div class="form-feedback" aria-live="polite">
                {move || form.with(|f| f.message.clone()).map(|m| view! { <p class="feedback success">{m}</p> })}
                {move || form.with(|f| f.error.clone()).map(|e| view! { <p class="feedback error">{e}</p> })}
                {move || form.with(|f| f.load_error.clone()).map(|e| view! { <p class="feedback error">{e}</p> })}
            </div>
        </form>
    }
}
