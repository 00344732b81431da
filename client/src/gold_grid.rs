use leptos::prelude::*;

use raidgold_shared::colors::rgba_css;
use raidgold_shared::view::{GateCell, GroupRow, RaidRow};
use raidgold_shared::{GoldGrid as GridState, Mode, RaidRecord, group_accent};

use crate::app::{CharacterName, ShowGateGold};

const EXPAND_SVG: &str = r#"<svg width="14" height="14" viewBox="0 0 14 14" fill="currentColor" xmlns="http://www.w3.org/2000/svg"><path d="M2.5 4.5 7 9l4.5-4.5 1 1L7 11 1.5 5.5z"/></svg>"#;

/// Group digits in threes: 12345 -> "12,345".
pub(crate) fn format_gold(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Raid completion table. Progress is transient and resets whenever `raids` changes.
#[component]
pub fn GoldGrid(#[prop(into)] raids: Signal<Vec<RaidRecord>>) -> impl IntoView {
    let CharacterName(character_name) = expect_context();
    let ShowGateGold(show_gate_gold) = expect_context();

    let grid: RwSignal<GridState> = RwSignal::new(GridState::default());

    // Re-initialize selections whenever the catalog changes.
    Effect::new(move || {
        raids.with(|catalog| grid.update(|g| g.initialize(catalog)));
    });

    let rows = Memo::new(move |_| raids.with(|catalog| grid.with(|g| g.rows(catalog))));
    let total = Memo::new(move |_| raids.with(|catalog| grid.with(|g| g.total_gold(catalog))));

    view! {
        <div style="width: 100%; max-width: 960px; margin: 24px auto; background: #161921; border: 1px solid #282c3e; border-radius: 8px; overflow: hidden;">
            <GridSettings character_name=character_name show_gate_gold=show_gate_gold />
            <table style="width: 100%; border-collapse: collapse; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif;">
                <thead>
                    <tr>
                        <th style="text-align: left; padding: 12px 16px; font-size: 1.5rem; font-weight: 700; border-bottom: 2px solid #3a3f5c;">"Raids"</th>
                        <th style="text-align: left; padding: 12px 16px; font-size: 1.5rem; font-weight: 700; border-bottom: 2px solid #3a3f5c;">
                            {move || character_name.get()}
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, row)| view! {
                                <GroupRowView row=row even={index % 2 == 0} grid=grid raids=raids show_gate_gold=show_gate_gold />
                            })
                            .collect_view()
                    }}
                    <tr>
                        <td colspan="2" style="text-align: right; padding: 12px 16px; font-size: 1.5rem; font-weight: 700;">
                            "Total Gold: "
                            <span style="color: #f5c542; font-variant-numeric: tabular-nums;">{move || format_gold(total.get())}</span>
                        </td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn GridSettings(character_name: RwSignal<String>, show_gate_gold: RwSignal<bool>) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; gap: 16px; padding: 10px 16px; border-bottom: 1px solid #282c3e; font-family: 'Inter', system-ui, sans-serif; font-size: 0.82rem; color: #9a9590;">
            <label style="display: flex; align-items: center; gap: 8px;">
                "Character"
                <input
                    type="text"
                    maxlength="32"
                    prop:value=move || character_name.get()
                    on:input=move |e| character_name.set(event_target_value(&e))
                    style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; padding: 3px 8px; font-size: 0.82rem;"
                />
            </label>
            <label style="display: flex; align-items: center; gap: 6px; cursor: pointer;">
                <input
                    type="checkbox"
                    prop:checked=move || show_gate_gold.get()
                    on:change=move |e| show_gate_gold.set(event_target_checked(&e))
                    style="accent-color: #f5c542;"
                />
                "Show gold per gate"
            </label>
        </div>
    }
}

#[component]
fn GroupRowView(
    row: GroupRow,
    even: bool,
    grid: RwSignal<GridState>,
    raids: Signal<Vec<RaidRecord>>,
    show_gate_gold: RwSignal<bool>,
) -> impl IntoView {
    let (r, g, b) = group_accent(&row.label);
    let background = if even { "#1a1d2a" } else { "transparent" };

    view! {
        <tr style=format!("background: {background};")>
            <th
                scope="row"
                style=format!(
                    "text-align: left; padding: 12px 16px; font-size: 1.4rem; font-weight: 600; vertical-align: top; border-bottom: 2px solid #282c3e; border-left: 3px solid {};",
                    rgba_css(r, g, b, 0.85),
                )
            >
                {row.label.clone()}
            </th>
            <td style="padding: 8px 16px; border-bottom: 2px solid #282c3e;">
                <div style="display: flex; flex-wrap: wrap; align-items: flex-start; gap: 12px;">
                    {row
                        .raids
                        .into_iter()
                        .map(|raid| view! { <RaidCell raid=raid grid=grid raids=raids show_gate_gold=show_gate_gold /> })
                        .collect_view()}
                </div>
            </td>
        </tr>
    }
}

#[component]
fn RaidCell(
    raid: RaidRow,
    grid: RwSignal<GridState>,
    raids: Signal<Vec<RaidRecord>>,
    show_gate_gold: RwSignal<bool>,
) -> impl IntoView {
    let RaidRow {
        path,
        mode,
        state,
        expanded,
        gates,
    } = raid;

    let expand_path = path.clone();
    let on_expand = move |_| {
        grid.update(|g| {
            g.toggle_expanded(&expand_path, mode);
        });
    };

    let all_path = path.clone();
    let on_toggle_all = move |_| {
        raids.with_untracked(|catalog| {
            grid.update(|g| {
                g.toggle_all(catalog, &all_path, mode);
            });
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; min-width: 120px;">
            <div style="display: flex; align-items: center; gap: 4px;">
                <button
                    title={if expanded { "Hide gates" } else { "Show gates" }}
                    style=format!(
                        "width: 28px; height: 28px; display: flex; align-items: center; justify-content: center; background: transparent; border: none; border-radius: 50%; cursor: pointer; color: #9a9590; transition: transform 0.2s; transform: rotate({}deg);",
                        if expanded { 180 } else { 0 },
                    )
                    inner_html=EXPAND_SVG
                    on:click=on_expand
                />
                <label style="display: flex; align-items: center; gap: 6px; cursor: pointer; font-size: 1rem;">
                    <input
                        type="checkbox"
                        prop:checked=state.is_checked()
                        prop:indeterminate=state.is_indeterminate()
                        on:change=on_toggle_all
                        style="width: 18px; height: 18px; accent-color: #f5c542;"
                    />
                    {mode.label()}
                </label>
            </div>
            {expanded.then(|| {
                gates
                    .into_iter()
                    .map(|gate| view! { <GateToggle gate=gate path=path.clone() mode=mode grid=grid raids=raids show_gate_gold=show_gate_gold /> })
                    .collect_view()
            })}
        </div>
    }
}

#[component]
fn GateToggle(
    gate: GateCell,
    path: String,
    mode: Mode,
    grid: RwSignal<GridState>,
    raids: Signal<Vec<RaidRecord>>,
    show_gate_gold: RwSignal<bool>,
) -> impl IntoView {
    let GateCell {
        index,
        label,
        gold,
        checked,
    } = gate;

    let on_toggle = move |_| {
        raids.with_untracked(|catalog| {
            grid.update(|g| {
                if let Err(e) = g.toggle_gate(catalog, &path, mode, index) {
                    web_sys::console::warn_1(&format!("gate toggle ignored: {e}").into());
                }
            });
        });
    };

    view! {
        <label style="display: flex; align-items: center; gap: 6px; padding: 2px 0 2px 36px; cursor: pointer; font-size: 0.9rem; color: #c8c5bd;">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=on_toggle
                style="width: 16px; height: 16px; accent-color: #f5c542;"
            />
            {label}
            {move || show_gate_gold.get().then(|| view! {
                <span style="margin-left: auto; color: #5a5860; font-family: 'JetBrains Mono', monospace; font-size: 0.75rem;">
                    {format_gold(u64::from(gold))}
                </span>
            })}
        </label>
    }
}
