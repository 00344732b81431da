use std::cell::RefCell;

use gloo_storage::Storage;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use raidgold_shared::{RaidRecord, group_by_label, group_slug};

use crate::catalog::{self, CatalogStatus};
use crate::clock::ClockBar;
use crate::content_selector::ContentSelector;
use crate::gold_grid::GoldGrid;
use crate::nav::NavigationBar;
use crate::route::{self, Route, on_link_click};

const SETTINGS_KEY: &str = "raidgold_settings";
const LOADING_TEXT: &str = "Loading raid list...";

struct PopStateBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::Event)>,
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopStateBinding>> = const { RefCell::new(None) };
}

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct CurrentPath(pub RwSignal<String>);
#[derive(Clone, Copy)]
pub(crate) struct CatalogSignal(pub RwSignal<Vec<RaidRecord>>);
#[derive(Clone, Copy)]
pub(crate) struct CatalogLoadStatus(pub RwSignal<CatalogStatus>);
#[derive(Clone, Copy)]
pub(crate) struct CharacterName(pub RwSignal<String>);
#[derive(Clone, Copy)]
pub(crate) struct ShowGateGold(pub RwSignal<bool>);

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct Settings {
    character_name: String,
    show_gate_gold: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            character_name: "Character 1".to_string(),
            show_gate_gold: false,
        }
    }
}

/// Raids of the group whose slug is `slug`, in catalog order.
pub(crate) fn raids_for_slug(catalog: &[RaidRecord], slug: &str) -> Vec<RaidRecord> {
    catalog
        .iter()
        .filter(|raid| group_slug(&raid.label) == slug)
        .cloned()
        .collect()
}

/// Root application component. Provides global reactive signals via context.
#[component]
pub fn App() -> impl IntoView {
    let current_path: RwSignal<String> = RwSignal::new(route::current_pathname());
    let catalog: RwSignal<Vec<RaidRecord>> = RwSignal::new(Vec::new());
    let catalog_status: RwSignal<CatalogStatus> = RwSignal::new(CatalogStatus::Loading);
    let saved: Settings = gloo_storage::LocalStorage::get(SETTINGS_KEY).unwrap_or_default();
    let character_name: RwSignal<String> = RwSignal::new(saved.character_name);
    let show_gate_gold: RwSignal<bool> = RwSignal::new(saved.show_gate_gold);

    provide_context(CurrentPath(current_path));
    provide_context(CatalogSignal(catalog));
    provide_context(CatalogLoadStatus(catalog_status));
    provide_context(CharacterName(character_name));
    provide_context(ShowGateGold(show_gate_gold));

    // Persist settings to localStorage on any change
    Effect::new(move || {
        let settings = Settings {
            character_name: character_name.get(),
            show_gate_gold: show_gate_gold.get(),
        };
        let _ = gloo_storage::LocalStorage::set(SETTINGS_KEY, &settings);
    });

    Effect::new(move || {
        catalog::load_catalog(catalog, catalog_status);
    });

    // Back/forward buttons
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        POPSTATE_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "popstate",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
            current_path.set(route::current_pathname());
        });
        if window
            .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            POPSTATE_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(PopStateBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    let current_route = Memo::new(move |_| Route::parse(&current_path.get()));

    view! {
        <div style="display: flex; flex-direction: column; min-height: 100vh; background: #0c0e17;">
            <header style="position: sticky; top: 0; z-index: 50;">
                <ClockBar />
                <NavigationBar />
            </header>
            <main style="flex-grow: 1;">
                {move || current_route.get().is_raid_page().then(|| view! { <ContentSelector /> })}
                {move || match current_route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Raids => view! { <GoldGrid raids=catalog /> }.into_any(),
                    Route::RaidGroup(slug) => view! { <RaidGroupPage slug=slug /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let CatalogSignal(catalog) = expect_context();
    let CatalogLoadStatus(status) = expect_context();
    let CurrentPath(current_path) = expect_context();

    let summary = Memo::new(move |_| {
        catalog.with(|c| (c.len(), group_by_label(c).len()))
    });

    view! {
        <section style="max-width: 720px; margin: 48px auto; padding: 0 16px; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif;">
            <h1 style="font-size: 2rem; margin-bottom: 12px;">"Raid Gold Tracker"</h1>
            <p style="color: #9a9590; line-height: 1.6;">
                "Tick off the raid gates you have cleared this week and keep a running total of the gold they earned."
            </p>
            <p style="color: #9a9590; font-size: 0.85rem; margin-top: 16px;">
                {move || match status.get() {
                    CatalogStatus::Loading => LOADING_TEXT.to_string(),
                    CatalogStatus::Live | CatalogStatus::Fallback => {
                        let (raids, groups) = summary.get();
                        format!("{raids} raid modes across {groups} raids")
                    }
                }}
            </p>
            <a
                href="/raids"
                on:click=on_link_click(current_path, "/raids".to_string())
                style="display: inline-block; margin-top: 24px; padding: 8px 18px; border-radius: 9999px; background: #3b82f6; color: #fff; text-decoration: none;"
            >
                "Open raid tracker"
            </a>
        </section>
    }
}

/// Placeholder text for a raid group page with nothing to show yet, or `None`
/// once the grid can render.
pub(crate) fn raid_group_notice(status: CatalogStatus, has_raids: bool, slug: &str) -> Option<String> {
    match (status, has_raids) {
        (_, true) => None,
        (CatalogStatus::Loading, false) => Some(LOADING_TEXT.to_string()),
        (CatalogStatus::Live | CatalogStatus::Fallback, false) => {
            Some(format!("No raid named \"{slug}\"."))
        }
    }
}

#[component]
fn RaidGroupPage(slug: String) -> impl IntoView {
    let CatalogSignal(catalog) = expect_context();
    let CatalogLoadStatus(status) = expect_context();
    let group_slug = slug.clone();
    let raids = Signal::derive(move || catalog.with(|c| raids_for_slug(c, &group_slug)));

    view! {
        {move || {
            match raid_group_notice(status.get(), !raids.with(Vec::is_empty), &slug) {
                Some(notice) => view! {
                    <p style="text-align: center; margin-top: 48px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif;">
                        {notice}
                    </p>
                }
                .into_any(),
                None => view! { <GoldGrid raids=raids /> }.into_any(),
            }
        }}
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <p style="text-align: center; margin-top: 48px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif;">
            "Page not found."
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raidgold_shared::default_catalog;

    #[test]
    fn raids_for_slug_selects_one_group() {
        let raids = raids_for_slug(&default_catalog(), "valtan");
        let paths: Vec<&str> = raids.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/raids/valtan-normal", "/raids/valtan-hard"]);
    }

    #[test]
    fn raids_for_unknown_slug_is_empty() {
        assert!(raids_for_slug(&default_catalog(), "argos").is_empty());
    }

    #[test]
    fn raid_group_notice_waits_for_catalog() {
        assert_eq!(
            raid_group_notice(CatalogStatus::Loading, false, "valtan").as_deref(),
            Some("Loading raid list...")
        );
        assert_eq!(
            raid_group_notice(CatalogStatus::Live, false, "argos").as_deref(),
            Some("No raid named \"argos\".")
        );
        assert_eq!(
            raid_group_notice(CatalogStatus::Fallback, false, "argos").as_deref(),
            Some("No raid named \"argos\".")
        );
        assert_eq!(raid_group_notice(CatalogStatus::Live, true, "valtan"), None);
        assert_eq!(raid_group_notice(CatalogStatus::Loading, true, "valtan"), None);
    }

    #[test]
    fn settings_default_names_first_character() {
        let settings: Settings = serde_json::from_str("{}").expect("empty settings parse");
        assert_eq!(settings.character_name, "Character 1");
        assert!(!settings.show_gate_gold);
    }
}
