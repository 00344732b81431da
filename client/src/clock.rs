use std::cell::RefCell;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use raidgold_shared::reset::{next_daily_reset, next_weekly_reset, seconds_until};

use crate::time_format::format_countdown;

thread_local! {
    static CLOCK_INTERVAL: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

/// UTC clock with countdowns to the next daily and weekly reset.
#[component]
pub fn ClockBar() -> impl IntoView {
    let tick: RwSignal<i64> = RwSignal::new(chrono::Utc::now().timestamp());

    Effect::new(move || {
        let interval = Interval::new(1_000, move || {
            tick.set(chrono::Utc::now().timestamp());
        });
        CLOCK_INTERVAL.with(|slot| {
            // Dropping the previous interval cancels it.
            *slot.borrow_mut() = Some(interval);
        });
        on_cleanup(|| {
            CLOCK_INTERVAL.with(|slot| {
                slot.borrow_mut().take();
            });
        });
    });

    let readout = Memo::new(move |_| {
        let now = chrono::DateTime::from_timestamp(tick.get(), 0).unwrap_or_default();
        let daily = format_countdown(seconds_until(now, next_daily_reset(now)));
        let weekly = format_countdown(seconds_until(now, next_weekly_reset(now)));
        (now.format("%H:%M:%S").to_string(), daily, weekly)
    });

    view! {
        <div style="width: 100%; height: 32px; display: flex; justify-content: center; align-items: center; gap: 24px; background: #0c0e17; border-bottom: 1px solid #1a1d2a; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #9a9590; font-variant-numeric: tabular-nums;">
            <span>"UTC " <span style="color: #e2e0d8;">{move || readout.get().0}</span></span>
            <span>"Daily reset " <span style="color: #f5c542;">{move || readout.get().1}</span></span>
            <span>"Weekly reset " <span style="color: #f5c542;">{move || readout.get().2}</span></span>
        </div>
    }
}
