use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tradle_shared::Guess;
use tradle_shared::geo::{Direction, format_distance, proximity_percent, square_characters};
use tradle_shared::reveal::{REVEAL_DURATION_MS, RevealState, square_delay_ms};

use crate::app::CurrentSettings;

const ROW_STYLE: &str = "display: grid; grid-template-columns: 1fr 1fr; gap: 6px; margin-bottom: 6px;";
const CELL_STYLE: &str = "display: grid; grid-template-columns: 2fr 1fr 28px 44px; gap: 2px; align-items: center; min-height: 34px;";
const BOX_STYLE: &str = "background: var(--tile-bg); border-radius: 4px; padding: 4px 6px; text-align: center; overflow: hidden; white-space: nowrap; text-overflow: ellipsis;";

/// One side of a guess: the name typed for exporter or importer and how close it was.
#[derive(Clone)]
struct Side {
    name: String,
    distance: u32,
    direction: Direction,
}

impl Side {
    fn exporter(guess: &Guess) -> Self {
        Self {
            name: guess.from_name.clone(),
            distance: guess.from_distance,
            direction: guess.from_direction,
        }
    }

    fn importer(guess: &Guess) -> Self {
        Self {
            name: guess.to_name.clone(),
            distance: guess.to_distance,
            direction: guess.to_direction,
        }
    }
}

#[component]
pub(crate) fn GuessRow(#[prop(into)] guess: Signal<Option<Guess>>) -> impl IntoView {
    let reveal = RwSignal::new(RevealState::NotStarted);

    Effect::new(move |_| {
        if guess.get().is_none() || reveal.get_untracked() != RevealState::NotStarted {
            return;
        }
        reveal.set(RevealState::NotStarted.on_guess());
        Timeout::new(REVEAL_DURATION_MS, move || {
            reveal.try_update(|state| *state = state.on_timer());
        })
        .forget();
    });

    view! {
        <div style=ROW_STYLE>
            {move || match (reveal.get(), guess.get()) {
                (RevealState::NotStarted, _) | (_, None) => {
                    view! {
                        <EmptySide />
                        <EmptySide />
                    }
                        .into_any()
                }
                (RevealState::Running, Some(guess)) => {
                    view! {
                        <AnimatedSide distance=guess.from_distance />
                        <AnimatedSide distance=guess.to_distance />
                    }
                        .into_any()
                }
                (RevealState::Ended, Some(guess)) => {
                    view! {
                        <RevealedSide side=Side::exporter(&guess) />
                        <RevealedSide side=Side::importer(&guess) />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn EmptySide() -> impl IntoView {
    view! {
        <div style=CELL_STYLE>
            <div style=BOX_STYLE>"\u{a0}"</div>
            <div style=BOX_STYLE></div>
            <div style=BOX_STYLE></div>
            <div style=BOX_STYLE></div>
        </div>
    }
}

#[component]
fn AnimatedSide(distance: u32) -> impl IntoView {
    let CurrentSettings(settings) = expect_context();
    let squares = square_characters(proximity_percent(distance), settings.get_untracked().theme);

    view! {
        <div style="display: flex; justify-content: center; gap: 2px; font-size: 1.4rem; min-height: 34px; align-items: center;">
            {squares
                .into_iter()
                .enumerate()
                .map(|(index, square)| {
                    view! {
                        <span
                            class="reveal-square"
                            style=format!("animation-delay: {}ms;", square_delay_ms(index))
                        >
                            {square}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RevealedSide(side: Side) -> impl IntoView {
    let CurrentSettings(settings) = expect_context();
    let found = side.distance == 0;
    let proximity = proximity_percent(side.distance);
    let distance = move || format_distance(side.distance, settings.get().distance_unit);

    view! {
        <div style=CELL_STYLE>
            <div style=BOX_STYLE title=side.name.clone()>{side.name.to_uppercase()}</div>
            <div style=BOX_STYLE>{distance}</div>
            <div style=BOX_STYLE title=side.direction.label()>
                {if found { "🎉" } else { side.direction.arrow() }}
            </div>
            <div style=BOX_STYLE>{format!("{proximity}%")}</div>
        </div>
    }
}
