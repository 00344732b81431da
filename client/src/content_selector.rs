use leptos::prelude::*;

use raidgold_shared::colors::rgba_css;
use raidgold_shared::{RaidRecord, group_accent, group_by_label, group_slug};

use crate::app::{CatalogSignal, CurrentPath};
use crate::route::{Route, on_link_click, raid_group_href};

/// Distinct group labels in catalog order.
pub(crate) fn group_labels(catalog: &[RaidRecord]) -> Vec<String> {
    group_by_label(catalog)
        .into_iter()
        .map(|group| group.label.to_string())
        .collect()
}

/// Row of links to every raid group page, shown above raid subpages.
#[component]
pub fn ContentSelector() -> impl IntoView {
    let CatalogSignal(catalog) = expect_context();
    let CurrentPath(current_path) = expect_context();

    let labels = Memo::new(move |_| catalog.with(|c| group_labels(c)));
    let current_slug = Memo::new(move |_| match Route::parse(&current_path.get()) {
        Route::RaidGroup(slug) => Some(slug),
        _ => None,
    });

    view! {
        <div style="width: 100%; overflow-x: auto; display: flex; justify-content: center; gap: 8px; padding: 10px 16px; background: #10131b; border-bottom: 1px solid #1a1d2a;">
            {move || {
                labels
                    .get()
                    .into_iter()
                    .map(|label| {
                        let href = raid_group_href(&label);
                        let slug = group_slug(&label);
                        let (r, g, b) = group_accent(&label);
                        let accent = rgba_css(r, g, b, 0.9);
                        view! {
                            <a
                                href=href.clone()
                                on:click=on_link_click(current_path, href)
                                style=move || {
                                    let active = current_slug.get().as_deref() == Some(slug.as_str());
                                    let (bg, border) = if active { ("#232738", accent.as_str()) } else { ("#1a1d2a", "#282c3e") };
                                    format!("flex-shrink: 0; padding: 4px 12px; border-radius: 6px; background: {bg}; border: 1px solid {border}; color: #e2e0d8; text-decoration: none; font-family: 'Inter', system-ui, sans-serif; font-size: 0.9rem;")
                                }
                            >
                                {label.clone()}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
