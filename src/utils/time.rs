use crate::error::{Error, WfhResult};
use chrono::{DateTime, Days, Duration, Local, SecondsFormat, TimeZone};

/// Valid weekday codes, Sunday first
pub const WEEKDAY_CODES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Three-letter lowercase code for the weekday of `time`
pub fn weekday_code<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%A").to_string().to_lowercase().chars().take(3).collect()
}

/// Weekday codes mapped to the next seven days, today included.
///
/// Entries are kept in offset order, so dates strictly increase from `now`.
#[derive(Debug, Clone)]
pub struct WeekdayMap<Tz: TimeZone> {
    entries: Vec<(String, DateTime<Tz>)>,
}

impl<Tz: TimeZone> WeekdayMap<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    /// Build the map for the week starting at `now`
    pub fn starting(now: &DateTime<Tz>) -> Self {
        let entries = (0..7u64)
            .map(|offset| {
                // Calendar days, so a DST shift cannot skip a date
                let mapped = now
                    .clone()
                    .checked_add_days(Days::new(offset))
                    .unwrap_or_else(|| now.clone() + Duration::days(offset as i64));
                (weekday_code(&mapped), mapped)
            })
            .collect();

        Self { entries }
    }

    /// Look up the occurrence for a weekday code
    pub fn get(&self, code: &str) -> Option<&DateTime<Tz>> {
        self.entries
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, time)| time)
    }

    /// Entries in offset order
    pub fn entries(&self) -> &[(String, DateTime<Tz>)] {
        &self.entries
    }
}

/// Date part of an RFC 3339 timestamp
pub fn date_string<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let stamp = time.to_rfc3339_opts(SecondsFormat::Secs, true);
    match stamp.find('T') {
        Some(idx) => stamp[..idx].to_string(),
        None => stamp,
    }
}

/// Resolve a weekday code against the week starting at `now`
pub fn resolve_date_from<Tz: TimeZone>(now: &DateTime<Tz>, code: &str) -> WfhResult<String>
where
    Tz::Offset: std::fmt::Display,
{
    let day_map = WeekdayMap::starting(now);
    let time = day_map
        .get(code)
        .ok_or_else(|| Error::InvalidDay(code.to_string()))?;

    Ok(date_string(time))
}

/// Resolve a weekday code to the ISO date of its next occurrence, today included
pub fn resolve_date(code: &str) -> WfhResult<String> {
    resolve_date_from(&Local::now(), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Utc};

    #[test]
    fn test_weekday_map_keys() {
        // Wednesday, 2023-01-04 at 10:00 AM
        let now = Utc.with_ymd_and_hms(2023, 1, 4, 10, 0, 0).unwrap();
        let day_map = WeekdayMap::starting(&now);

        let keys: Vec<&str> = day_map.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["wed", "thu", "fri", "sat", "sun", "mon", "tue"]);

        // Dates strictly increase from today
        assert_eq!(day_map.entries()[0].1, now);
        for pair in day_map.entries().windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_resolve_every_code_within_week() {
        let now = Utc.with_ymd_and_hms(2023, 1, 4, 10, 0, 0).unwrap();
        let today = now.date_naive();

        for code in WEEKDAY_CODES {
            let resolved = resolve_date_from(&now, code).unwrap();
            let date = NaiveDate::parse_from_str(&resolved, "%Y-%m-%d").unwrap();
            let offset = (date - today).num_days();
            assert!((0..=6).contains(&offset), "{code} resolved {offset} days out");
            assert_eq!(
                date.weekday().to_string().to_lowercase(),
                code,
                "{code} resolved to {resolved}"
            );
        }
    }

    #[test]
    fn test_resolve_today_is_today() {
        let wednesday = Utc.with_ymd_and_hms(2023, 1, 4, 23, 59, 0).unwrap();
        assert_eq!(resolve_date_from(&wednesday, "wed").unwrap(), "2023-01-04");
    }

    #[test]
    fn test_resolve_monday_from_wednesday() {
        let wednesday = Utc.with_ymd_and_hms(2023, 1, 4, 10, 0, 0).unwrap();
        assert_eq!(resolve_date_from(&wednesday, "mon").unwrap(), "2023-01-09");
    }

    #[test]
    fn test_resolve_across_year_boundary() {
        // Friday, 2022-12-30
        let friday = Utc.with_ymd_and_hms(2022, 12, 30, 8, 0, 0).unwrap();
        assert_eq!(resolve_date_from(&friday, "tue").unwrap(), "2023-01-03");
    }

    #[test]
    fn test_resolve_invalid_code() {
        let now = Utc.with_ymd_and_hms(2023, 1, 4, 10, 0, 0).unwrap();
        for code in ["xyz", "", "Mon", "monday", "mo"] {
            let err = resolve_date_from(&now, code).unwrap_err();
            assert!(matches!(err, Error::InvalidDay(_)));
            assert!(err.to_string().contains("must be any of"));
        }
    }

    #[test]
    fn test_date_string_keeps_local_date() {
        // Late evening in a negative offset must not roll over to UTC's date
        let offset = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let evening = offset.with_ymd_and_hms(2023, 1, 4, 22, 30, 0).unwrap();
        assert_eq!(date_string(&evening), "2023-01-04");
    }
}
