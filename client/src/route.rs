use leptos::prelude::*;
use wasm_bindgen::JsValue;

use raidgold_shared::group_slug;

/// Page selected by the browser pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Raids,
    RaidGroup(String),
    NotFound,
}

impl Route {
    pub(crate) fn parse(pathname: &str) -> Self {
        let path = normalize_path(pathname);
        match path {
            "/" => Self::Home,
            "/raids" => Self::Raids,
            _ => match path.strip_prefix("/raids/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Self::RaidGroup(slug.to_ascii_lowercase())
                }
                _ => Self::NotFound,
            },
        }
    }

    /// Raid subpages get the content selector above the page body.
    pub(crate) fn is_raid_page(&self) -> bool {
        matches!(self, Self::RaidGroup(_))
    }
}

/// Strip trailing slashes, keeping `/` for the root.
pub(crate) fn normalize_path(pathname: &str) -> &str {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

pub(crate) fn raid_group_href(label: &str) -> String {
    format!("/raids/{}", group_slug(label))
}

pub(crate) fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the history stack and update the path signal.
pub(crate) fn navigate(current_path: RwSignal<String>, path: &str) {
    if current_path.get_untracked() == path {
        return;
    }
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
    current_path.set(path.to_string());
}

/// Click handler for in-app links. Modified clicks keep browser behavior.
pub(crate) fn on_link_click(
    current_path: RwSignal<String>,
    href: String,
) -> impl Fn(web_sys::MouseEvent) + 'static {
    move |e: web_sys::MouseEvent| {
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        e.prevent_default();
        navigate(current_path, &href);
    }
}
