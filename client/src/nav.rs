use leptos::prelude::*;

use crate::app::CurrentPath;
use crate::route::{normalize_path, on_link_click};

const HOME_SVG: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="currentColor" xmlns="http://www.w3.org/2000/svg"><path d="M8 1.5 1 7.5h2V14h4v-4h2v4h4V7.5h2z"/></svg>"#;
const DUNGEON_SVG: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="currentColor" xmlns="http://www.w3.org/2000/svg"><path d="M8 1C4.7 1 2 3.7 2 7v8h3V9.5h6V15h3V7c0-3.3-2.7-6-6-6zM6.5 8h-1V5.5h1zm2 0h-1V4h1zm2 0h-1V5.5h1z"/></svg>"#;

pub(crate) struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub(crate) const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        path: "/",
        label: "Home",
        icon: HOME_SVG,
    },
    NavItem {
        path: "/raids",
        label: "Raids",
        icon: DUNGEON_SVG,
    },
];

/// A nav item is highlighted only on its exact page, not on subpages.
pub(crate) fn is_active(item_path: &str, current_path: &str) -> bool {
    normalize_path(item_path) == normalize_path(current_path)
}

#[component]
pub fn NavigationBar() -> impl IntoView {
    let CurrentPath(current_path) = expect_context();

    view! {
        <nav style="width: 100%; height: 48px; display: flex; justify-content: center; align-items: center; background: #13161f; border-bottom: 1px solid #282c3e;">
            <div style="display: flex; gap: 16px; align-items: center;">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <a
                                href=path
                                on:click=on_link_click(current_path, path.to_string())
                                style=move || {
                                    let bg = if is_active(path, &current_path.get()) { "#3b82f6" } else { "#282b2f" };
                                    format!("display: flex; align-items: center; padding: 4px 12px; border-radius: 9999px; background: {bg}; color: #e2e0d8; text-decoration: none; font-family: 'Inter', system-ui, sans-serif; transition: background 0.3s ease, transform 0.3s ease;")
                                }
                            >
                                <span
                                    style="display: inline-flex; padding: 6px; border-radius: 9999px; background: #393342; color: #e2e0d8;"
                                    inner_html=item.icon
                                />
                                <span style="margin-left: 8px; font-size: 1.05rem;">{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
