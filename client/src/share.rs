use leptos::prelude::*;
use tradle_shared::Guess;
use tradle_shared::share::share_text;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::app::CurrentSettings;
use crate::toast::Toasts;

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard error: {e:?}"))
}

#[component]
pub(crate) fn ShareButton(
    day: String,
    #[prop(into)] guesses: Signal<Vec<Guess>>,
    #[prop(into)] won: Signal<bool>,
) -> impl IntoView {
    let CurrentSettings(settings) = expect_context();
    let toasts: Toasts = expect_context();

    let on_click = move |_| {
        let text = share_text(
            &day,
            &guesses.get_untracked(),
            won.get_untracked(),
            settings.get_untracked().theme,
        );
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => toasts.success("Copied results to clipboard"),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Share failed: {e}").into());
                    toasts.error("Could not copy results");
                }
            }
        });
    };

    view! {
        <button
            type="button"
            style="width: 100%; padding: 10px; border: none; border-radius: 4px; background: #16a34a; color: white; font-weight: 700; font-size: 1rem; cursor: pointer;"
            on:click=on_click
        >
            "Share"
        </button>
    }
}
