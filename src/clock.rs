// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! All things time-related.

pub use chrono::{DateTime, TimeDelta, Utc};

/// Tells time and returns the time.
///
/// Generally you will want to retrieve time using [`SystemClock`],
/// but it tests you may want to implement a `Clock` with a fixed time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;

    /// The point in time `hours` hours before [`Clock::now()`].
    ///
    /// Anything created strictly before this instant falls outside a
    /// reporting window of `hours` hours. Windows reaching past the
    /// earliest representable date are clamped to it.
    fn hours_ago(&self, hours: u32) -> DateTime<Utc> {
        TimeDelta::try_hours(i64::from(hours))
            .and_then(|delta| self.now().checked_sub_signed(delta))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Interacts with the system clock to get the current time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Marks a thing that has a notion of its age.
pub trait HasAge {
    /// The date the item was created, in UTC.
    fn created_utc(&self) -> DateTime<Utc>;

    /// True if the item was created strictly before `cutoff`.
    fn is_older_than(&self, cutoff: &DateTime<Utc>) -> bool {
        self.created_utc() < *cutoff
    }
}

#[cfg(test)]
mod tests {
    mod clock {
        use super::super::*;
        use crate::test_utils::FrozenClock;
        use std::ops::Sub;

        #[test]
        fn it_returns_the_system_time() {
            let clock = SystemClock::default();
            let delta = Utc::now().sub(clock.now());
            let secs = delta.num_seconds();
            assert_eq!(secs, 0);
        }

        #[test]
        fn it_returns_a_time_in_the_past() {
            let clock = FrozenClock::default();
            let expected = DateTime::parse_from_rfc3339("2025-05-22T10:13:00-07:00")
                .unwrap()
                .with_timezone(&Utc);
            assert_eq!(clock.hours_ago(24), expected);
        }

        #[test]
        fn it_returns_now_for_zero_hours() {
            let clock = FrozenClock::default();
            assert_eq!(clock.hours_ago(0), clock.now());
        }

        #[test]
        fn it_clamps_windows_beyond_the_earliest_date() {
            let clock = FrozenClock::default();
            assert_eq!(clock.hours_ago(u32::MAX), DateTime::<Utc>::MIN_UTC);
        }
    }

    mod has_age {
        use super::super::*;

        #[derive(Debug)]
        struct ThingWithAge {
            created_utc: DateTime<Utc>,
        }

        impl ThingWithAge {
            pub fn new(timestamp: i64) -> Self {
                let created_utc = DateTime::from_timestamp(timestamp, 0).unwrap();
                Self { created_utc }
            }
        }

        impl HasAge for ThingWithAge {
            fn created_utc(&self) -> DateTime<Utc> {
                self.created_utc
            }
        }

        #[test]
        fn it_is_older_than_a_later_cutoff() {
            let thing = ThingWithAge::new(1_000);
            let cutoff = DateTime::from_timestamp(1_001, 0).unwrap();
            assert!(thing.is_older_than(&cutoff));
        }

        #[test]
        fn it_is_not_older_than_an_identical_cutoff() {
            let thing = ThingWithAge::new(1_000);
            let cutoff = DateTime::from_timestamp(1_000, 0).unwrap();
            assert!(!thing.is_older_than(&cutoff));
        }

        #[test]
        fn it_is_not_older_than_an_earlier_cutoff() {
            let thing = ThingWithAge::new(1_000);
            let cutoff = DateTime::from_timestamp(999, 0).unwrap();
            assert!(!thing.is_older_than(&cutoff));
        }
    }
}
