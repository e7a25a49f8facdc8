use leptos::prelude::*;
use tradle_shared::day::today;
use tradle_shared::{DistanceUnit, Language, Settings, Theme};

use crate::game::GameView;
use crate::storage::{load_settings, save_settings};
use crate::toast::{ToastStack, Toasts};

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct CurrentSettings(pub RwSignal<Settings>);
#[derive(Clone, Copy)]
pub(crate) struct ActiveLanguage(pub RwSignal<Language>);

impl ActiveLanguage {
    /// Browser language, reduced to one the registry has names for.
    pub fn detect() -> Language {
        web_sys::window()
            .and_then(|window| window.navigator().language())
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or_default()
    }
}

fn theme_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "--bg: #ffffff; --fg: #111827; --muted: #6b7280; --border: #d1d5db; --tile-bg: #f3f4f6; --input-bg: #ffffff;"
        }
        Theme::Dark => {
            "--bg: #111827; --fg: #f9fafb; --muted: #9ca3af; --border: #374151; --tile-bg: #1f2937; --input-bg: #1f2937;"
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let settings: RwSignal<Settings> = RwSignal::new(load_settings());
    let language: RwSignal<Language> = RwSignal::new(ActiveLanguage::detect());
    let show_settings: RwSignal<bool> = RwSignal::new(false);
    let toasts = Toasts::new();

    provide_context(CurrentSettings(settings));
    provide_context(ActiveLanguage(language));
    provide_context(toasts);

    Effect::new(move |_| {
        save_settings(&settings.get());
    });

    let day = today();

    view! {
        <div style=move || {
            format!(
                "{} min-height: 100vh; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif;",
                theme_style(settings.get().theme),
            )
        }>
            <ToastStack />
            <div style="max-width: 560px; margin: 0 auto; padding: 12px; display: flex; flex-direction: column; gap: 12px;">
                <header style="display: flex; align-items: center; justify-content: space-between; border-bottom: 1px solid var(--border); padding-bottom: 8px;">
                    <h1 style="margin: 0; font-size: 2rem; font-weight: 800; letter-spacing: 0.08em;">
                        "TRA"<span style="color: #16a34a;">"D"</span>"LE"
                    </h1>
                    <button
                        type="button"
                        aria-label="Settings"
                        style="border: none; background: transparent; font-size: 1.4rem; cursor: pointer; color: var(--fg);"
                        on:click=move |_| show_settings.update(|open| *open = !*open)
                    >
                        "⚙️"
                    </button>
                </header>
                <Show when=move || show_settings.get()>
                    <SettingsPanel />
                </Show>
                <GameView day=day />
            </div>
        </div>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let CurrentSettings(settings) = expect_context();
    let ActiveLanguage(language) = expect_context();

    let row = "display: flex; align-items: center; justify-content: space-between; gap: 12px;";

    view! {
        <section style="display: flex; flex-direction: column; gap: 10px; padding: 12px; border: 1px solid var(--border); border-radius: 6px;">
            <label style=row>
                <span>"Theme"</span>
                <select on:change=move |ev| {
                    let theme = if event_target_value(&ev) == "dark" { Theme::Dark } else { Theme::Light };
                    settings.update(|s| s.theme = theme);
                }>
                    <option value="light" selected=move || settings.get().theme == Theme::Light>"Light"</option>
                    <option value="dark" selected=move || settings.get().theme == Theme::Dark>"Dark"</option>
                </select>
            </label>
            <label style=row>
                <span>"Unit of distance"</span>
                <select on:change=move |ev| {
                    let unit = if event_target_value(&ev) == DistanceUnit::Miles.label() {
                        DistanceUnit::Miles
                    } else {
                        DistanceUnit::Km
                    };
                    settings.update(|s| s.distance_unit = unit);
                }>
                    <option value=DistanceUnit::Km.label() selected=move || settings.get().distance_unit == DistanceUnit::Km>"KM"</option>
                    <option value=DistanceUnit::Miles.label() selected=move || settings.get().distance_unit == DistanceUnit::Miles>"Miles"</option>
                </select>
            </label>
            <label style=row>
                <span>"Language"</span>
                <select on:change=move |ev| language.set(Language::from_tag(&event_target_value(&ev)))>
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <option value=lang.tag() selected=move || language.get() == lang>
                                    {lang.tag().to_uppercase()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label style=row>
                <span>"Hide the trade picture until asked"</span>
                <input
                    type="checkbox"
                    prop:checked=move || settings.get().hide_image_mode
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        settings.update(|s| s.hide_image_mode = checked);
                    }
                />
            </label>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_theme_defines_every_css_variable() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = theme_style(theme);
            for var in ["--bg:", "--fg:", "--muted:", "--border:", "--tile-bg:", "--input-bg:"] {
                assert!(style.contains(var), "{theme:?} is missing {var}");
            }
        }
    }

    #[test]
    fn dark_theme_uses_dark_background() {
        assert!(theme_style(Theme::Dark).starts_with("--bg: #111827;"));
        assert!(theme_style(Theme::Light).starts_with("--bg: #ffffff;"));
    }
}
