use leptos::prelude::*;
use tradle_shared::country::sorted_names;

use crate::app::ActiveLanguage;

const INPUT_STYLE: &str = "width: 100%; padding: 8px 10px; border: 1px solid var(--border); border-radius: 4px; background: var(--input-bg); color: var(--fg); font-size: 1rem; box-sizing: border-box;";

/// Free-text country field with autocomplete from the registry.
#[component]
pub(crate) fn CountryInput(
    value: RwSignal<String>,
    placeholder: &'static str,
    list_id: &'static str,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let ActiveLanguage(language) = expect_context();

    view! {
        <input
            type="text"
            autocomplete="off"
            list=list_id
            placeholder=placeholder
            style=INPUT_STYLE
            prop:value=move || value.get()
            prop:disabled=move || disabled.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
        <datalist id=list_id>
            {move || {
                sorted_names(language.get())
                    .into_iter()
                    .map(|name| view! { <option value=name></option> })
                    .collect_view()
            }}
        </datalist>
    }
}
