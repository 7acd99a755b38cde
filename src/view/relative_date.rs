//! Spanish relative timestamps ("hace 3 días").

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Average month length in hundredths of a day (30.44 days).
const CENTI_DAYS_PER_MONTH: i64 = 3044;

fn plural(count: i64, singular: &str, suffix: &str) -> String {
    if count > 1 {
        format!("hace {count} {singular}{suffix}")
    } else {
        format!("hace {count} {singular}")
    }
}

/// Describes how long ago `then` was, relative to `now`.
///
/// Under a minute (including instants in the future) reads "hace unos
/// segundos"; then minutes, hours, days below 30 and months below 12, where a
/// month is 30.44 days. Anything older is shown as `dd/mm/yyyy`.
#[must_use]
pub fn format_relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let minutes = seconds.div_euclid(SECONDS_PER_MINUTE);
    let hours = minutes.div_euclid(MINUTES_PER_HOUR);
    let days = hours.div_euclid(HOURS_PER_DAY);
    let months = days.saturating_mul(100).div_euclid(CENTI_DAYS_PER_MONTH);

    if minutes < 1 {
        "hace unos segundos".to_owned()
    } else if minutes < MINUTES_PER_HOUR {
        plural(minutes, "minuto", "s")
    } else if hours < HOURS_PER_DAY {
        plural(hours, "hora", "s")
    } else if days < 30 {
        plural(days, "día", "s")
    } else if months < 12 {
        plural(months, "mes", "es")
    } else {
        then.format("%d/%m/%Y").to_string()
    }
}
