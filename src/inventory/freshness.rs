//! Freshness classification for inventory rows.

use serde::Serialize;
use time::{OffsetDateTime, Time};

/// Derived, non-persisted classification of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessBucket {
    Expired,
    ExpiringSoon,
    Good,
}

pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 3;

const SECONDS_PER_DAY: i64 = 86_400;

/// Ceiling of the real-valued difference between expiry and now, in days.
/// Negative when the expiry is more than a full day in the past.
pub fn days_until_expiry(expiry: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let seconds = (expiry - now).whole_seconds();
    seconds.div_euclid(SECONDS_PER_DAY) + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) != 0)
}

/// Classify an expiry timestamp into exactly one bucket.
///
/// An item is expired once its expiry sits at or before the end of the
/// previous calendar day, so anything expiring later today still counts as
/// expiring-soon. The two boundary checks neither overlap nor leave gaps.
pub fn bucket(expiry: OffsetDateTime, now: OffsetDateTime) -> FreshnessBucket {
    let start_of_today = now.replace_time(Time::MIDNIGHT);
    if expiry < start_of_today {
        return FreshnessBucket::Expired;
    }
    if days_until_expiry(expiry, now) <= EXPIRING_SOON_WINDOW_DAYS {
        FreshnessBucket::ExpiringSoon
    } else {
        FreshnessBucket::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn yesterday_morning_is_expired() {
        let now = datetime!(2026-08-04 09:00 UTC);
        let expiry = datetime!(2026-08-03 10:00 UTC);
        assert_eq!(bucket(expiry, now), FreshnessBucket::Expired);
    }

    #[test]
    fn late_yesterday_is_expired_regardless_of_time() {
        let now = datetime!(2026-08-04 09:00 UTC);
        let expiry = datetime!(2026-08-03 23:59:59 UTC);
        assert_eq!(bucket(expiry, now), FreshnessBucket::Expired);
    }

    #[test]
    fn later_today_is_expiring_soon_not_expired() {
        let now = datetime!(2026-08-04 09:00 UTC);
        let expiry = datetime!(2026-08-04 23:00 UTC);
        assert_eq!(bucket(expiry, now), FreshnessBucket::ExpiringSoon);
    }

    #[test]
    fn earlier_today_is_still_expiring_soon() {
        // Already past the expiry hour, but within today.
        let now = datetime!(2026-08-04 09:00 UTC);
        let expiry = datetime!(2026-08-04 00:00 UTC);
        assert_eq!(bucket(expiry, now), FreshnessBucket::ExpiringSoon);
        assert_eq!(days_until_expiry(expiry, now), 0);
    }

    #[test]
    fn three_days_out_is_expiring_soon() {
        let now = datetime!(2026-08-04 09:00 UTC);
        let expiry = datetime!(2026-08-07 09:00 UTC);
        assert_eq!(days_until_expiry(expiry, now), 3);
        assert_eq!(bucket(expiry, now), FreshnessBucket::ExpiringSoon);
    }

    #[test]
    fn just_over_three_days_is_good() {
        let now = datetime!(2026-08-04 09:00 UTC);
        let expiry = datetime!(2026-08-07 09:00:01 UTC);
        assert_eq!(days_until_expiry(expiry, now), 4);
        assert_eq!(bucket(expiry, now), FreshnessBucket::Good);
    }

    #[test]
    fn buckets_are_exclusive_and_exhaustive_across_boundaries() {
        let now = datetime!(2026-08-04 12:30 UTC);
        // Sweep hour by hour from five days back to ten days out; every
        // sample lands in exactly one bucket (guaranteed by construction,
        // checked here against the predicate definitions).
        for hours in -120i64..240 {
            let expiry = now + time::Duration::hours(hours);
            let b = bucket(expiry, now);
            let expired = expiry < now.replace_time(Time::MIDNIGHT);
            let soon = !expired && days_until_expiry(expiry, now) <= EXPIRING_SOON_WINDOW_DAYS;
            match b {
                FreshnessBucket::Expired => assert!(expired),
                FreshnessBucket::ExpiringSoon => assert!(soon),
                FreshnessBucket::Good => assert!(!expired && !soon),
            }
        }
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FreshnessBucket::ExpiringSoon).unwrap(),
            "\"expiring-soon\""
        );
        assert_eq!(
            serde_json::to_string(&FreshnessBucket::Expired).unwrap(),
            "\"expired\""
        );
    }
}
