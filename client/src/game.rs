use leptos::prelude::*;
use tradle_shared::oec::{country_profile_url, trade_embed_url};
use tradle_shared::selector::daily_target_pair;
use tradle_shared::{Game, GameError, GameStatus, Guess, Language, MAX_TRY_COUNT};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::{ActiveLanguage, CurrentSettings};
use crate::country_input::CountryInput;
use crate::guess_row::GuessRow;
use crate::share::ShareButton;
use crate::storage::LocalStorageGuessStore;
use crate::toast::Toasts;

fn warn(message: String) {
    web_sys::console::warn_1(&message.into());
}

fn restore_game(day: &str, language: Language) -> Game {
    match Game::restore(day, language, &LocalStorageGuessStore) {
        Ok(game) => game,
        Err(e) => {
            warn(format!("Could not restore guesses: {e}"));
            Game::new(day, language)
        }
    }
}

/// Fetch the IP record and post the finished game. Failures are logged only.
fn send_score(game: Game) {
    spawn_local(async move {
        let ip = match api::fetch_ip_info().await {
            Ok(ip) => Some(ip),
            Err(e) => {
                warn(format!("IP lookup failed: {e}"));
                None
            }
        };
        let Some(submission) = game.score_submission(ip, chrono::Local::now().to_rfc3339()) else {
            return;
        };
        if let Err(e) = api::post_score(&submission).await {
            warn(format!("Score post failed: {e}"));
        }
    });
}

#[component]
pub(crate) fn GameView(day: String) -> impl IntoView {
    let ActiveLanguage(language) = expect_context();
    let CurrentSettings(settings) = expect_context();
    let toasts: Toasts = expect_context();

    let game = RwSignal::new(restore_game(&day, language.get_untracked()));
    let from_input = RwSignal::new(String::new());
    let to_input = RwSignal::new(String::new());
    let show_image = RwSignal::new(!settings.get_untracked().hide_image_mode);

    // Load the day's answer.
    {
        let day = day.clone();
        spawn_local(async move {
            match api::fetch_country_rows().await {
                Ok(rows) => match daily_target_pair(&rows, &day) {
                    Some(targets) => {
                        game.try_update(|g| g.set_targets(targets));
                    }
                    None => {
                        warn("Country list has fewer than two usable countries".to_owned());
                        toasts.error("Today's countries could not be loaded");
                    }
                },
                Err(e) => {
                    warn(format!("Country list fetch failed: {e}"));
                    toasts.error("Today's countries could not be loaded");
                }
            }
        });
    }

    Effect::new(move |_| {
        let lang = language.get();
        game.update(|g| g.set_language(lang));
    });

    let status = Memo::new(move |_| game.with(|g| g.status()));
    let ended = Signal::derive(move || status.get().is_ended());
    let guesses = Signal::derive(move || game.with(|g| g.guesses().to_vec()));
    let won = Signal::derive(move || status.get() == GameStatus::Won);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let from = from_input.get_untracked();
        let to = to_input.get_untracked();

        let Some(outcome) = game.try_update(|g| {
            let submitted = g.submit(&from, &to).map(|_| ());
            submitted.map(|()| g.status())
        }) else {
            return;
        };
        match outcome {
            Ok(status) => {
                from_input.set(String::new());
                to_input.set(String::new());

                let snapshot = game.get_untracked();
                if let Err(e) = snapshot.persist(&LocalStorageGuessStore) {
                    warn(format!("Could not save guesses: {e}"));
                }

                match status {
                    GameStatus::Won => {
                        toasts.success("Well done!");
                        send_score(snapshot);
                    }
                    GameStatus::Lost => {
                        for country in snapshot.missed_targets() {
                            toasts.sticky(country.name(snapshot.language).to_uppercase());
                        }
                        send_score(snapshot);
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(GameError::UnknownCountry(name)) => {
                toasts.error(format!("Unknown country: {name}"));
            }
            Err(GameError::TargetsNotLoaded) => {
                toasts.info("Still loading today's countries...");
            }
            Err(GameError::GameOver) => {}
        }
    };

    let embed_url = move || game.with(|g| g.targets().map(trade_embed_url));

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px;">
            {move || {
                let url = embed_url();
                match url {
                    Some(url) if show_image.get() => {
                        view! {
                            <iframe
                                title="Trade visualization"
                                src=url
                                style="width: 100%; height: 360px; border: 0; border-radius: 6px; background: var(--tile-bg);"
                            ></iframe>
                        }
                            .into_any()
                    }
                    Some(_) => {
                        view! {
                            <button
                                type="button"
                                style="padding: 12px; border: 1px dashed var(--border); border-radius: 6px; background: transparent; color: var(--fg); cursor: pointer;"
                                on:click=move |_| show_image.set(true)
                            >
                                "Show trade visualization"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div style="height: 360px; display: flex; align-items: center; justify-content: center; color: var(--muted);">
                                "Loading today's trade..."
                            </div>
                        }
                            .into_any()
                    }
                }
            }}

            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 6px; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.08em; color: var(--muted); text-align: center;">
                <span>"Exporter"</span>
                <span>"Importer"</span>
            </div>
            <div>
                {(0..MAX_TRY_COUNT)
                    .map(|index| {
                        let row = Signal::derive(move || {
                            game.with(|g| g.guesses().get(index).cloned())
                        });
                        view! { <GuessRow guess=row /> }
                    })
                    .collect_view()}
            </div>

            {move || {
                if ended.get() {
                    view! { <EndPanel day=day.clone() guesses=guesses won=won game=game /> }
                        .into_any()
                } else {
                    view! {
                        <form
                            on:submit=on_submit
                            style="display: flex; flex-direction: column; gap: 6px;"
                        >
                            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 6px;">
                                <CountryInput
                                    value=from_input
                                    placeholder="Exporter"
                                    list_id="countries-from"
                                    disabled=ended
                                />
                                <CountryInput
                                    value=to_input
                                    placeholder="Importer"
                                    list_id="countries-to"
                                    disabled=ended
                                />
                            </div>
                            <button
                                type="submit"
                                style="padding: 10px; border: 1px solid var(--border); border-radius: 4px; background: var(--tile-bg); color: var(--fg); font-weight: 700; cursor: pointer;"
                            >
                                {move || {
                                    let used = guesses.with(|g| g.len());
                                    format!("🌍 Guess ({}/{MAX_TRY_COUNT})", used + 1)
                                }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn EndPanel(
    day: String,
    guesses: Signal<Vec<Guess>>,
    won: Signal<bool>,
    game: RwSignal<Game>,
) -> impl IntoView {
    let revealed = move || game.with(|g| g.revealed_targets().map(|t| (t, g.language)));

    view! {
        <div style="display: flex; flex-direction: column; gap: 8px; align-items: stretch;">
            {move || {
                revealed()
                    .map(|(targets, lang)| {
                        view! {
                            <div style="text-align: center; font-weight: 600;">
                                <a href=country_profile_url(targets.from) target="_blank" rel="noopener noreferrer">
                                    {targets.from.name(lang).to_uppercase()}
                                </a>
                                " → "
                                <a href=country_profile_url(targets.to) target="_blank" rel="noopener noreferrer">
                                    {targets.to.name(lang).to_uppercase()}
                                </a>
                            </div>
                        }
                    })
            }}
            <ShareButton day=day guesses=guesses won=won />
        </div>
    }
}
