use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};

/// Hour (UTC) at which daily and weekly content resets.
pub const RESET_HOUR_UTC: u32 = 10;
/// Weekday of the weekly raid reset.
pub const WEEKLY_RESET_DAY: Weekday = Weekday::Wed;

fn reset_on(day: DateTime<Utc>) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(RESET_HOUR_UTC, 0, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&day.date_naive().and_time(time))
}

/// First daily reset strictly after `now`.
pub fn next_daily_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = reset_on(now);
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

/// First weekly reset strictly after `now`.
pub fn next_weekly_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_ahead = (7 + WEEKLY_RESET_DAY.num_days_from_monday()
        - now.weekday().num_days_from_monday())
        % 7;
    let candidate = reset_on(now) + Duration::days(i64::from(days_ahead));
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Whole seconds from `now` until `target`, clamped at zero.
pub fn seconds_until(now: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    (target - now).num_seconds().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn daily_reset_later_today() {
        // 2024-05-06 is a Monday.
        assert_eq!(next_daily_reset(at(2024, 5, 6, 9, 59)), at(2024, 5, 6, 10, 0));
    }

    #[test]
    fn daily_reset_rolls_to_tomorrow_at_or_after_reset() {
        assert_eq!(next_daily_reset(at(2024, 5, 6, 10, 0)), at(2024, 5, 7, 10, 0));
        assert_eq!(next_daily_reset(at(2024, 5, 6, 23, 30)), at(2024, 5, 7, 10, 0));
    }

    #[test]
    fn weekly_reset_from_monday_is_wednesday() {
        assert_eq!(next_weekly_reset(at(2024, 5, 6, 12, 0)), at(2024, 5, 8, 10, 0));
    }

    #[test]
    fn weekly_reset_on_reset_day() {
        assert_eq!(next_weekly_reset(at(2024, 5, 8, 9, 0)), at(2024, 5, 8, 10, 0));
        assert_eq!(next_weekly_reset(at(2024, 5, 8, 10, 0)), at(2024, 5, 15, 10, 0));
    }

    #[test]
    fn weekly_reset_from_thursday_wraps_week() {
        assert_eq!(next_weekly_reset(at(2024, 5, 9, 0, 0)), at(2024, 5, 15, 10, 0));
    }

    #[test]
    fn seconds_until_clamps_past_targets() {
        let now = at(2024, 5, 6, 10, 0);
        assert_eq!(seconds_until(now, at(2024, 5, 6, 11, 0)), 3600);
        assert_eq!(seconds_until(now, at(2024, 5, 6, 9, 0)), 0);
    }
}
