// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! General-purpose counting capabilities.

use counter::Counter;

/// Identifies which account a thing should be credited to, and how.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Attribution<'a> {
    /// An original post, credited to the handle of its author.
    Original(&'a str),

    /// A reshare, credited to the handle of the author of the reshared
    /// post rather than the account that reshared it.
    Reshare(&'a str),
}

/// A thing that can be credited to exactly one account.
pub trait Attributable {
    /// The account the thing should be credited to.
    fn attribution(&self) -> Attribution<'_>;
}

/// A pair of account handle and count.
pub type RankedEntry = (String, usize);

/// Counts the number of items credited to each account handle.
///
/// Handles are case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    counts: Counter<String>,
}

impl Tally {
    /// Entries with a count at or below this are left out of rankings.
    pub const NOISE_THRESHOLD: usize = 1;

    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to the count for `handle`.
    pub fn increment(&mut self, handle: &str) {
        *self.counts.entry(handle.to_string()).or_insert(0) += 1;
    }

    /// The count for `handle`, or zero if it has not been seen.
    pub fn get(&self, handle: &str) -> usize {
        self.counts.get(handle).copied().unwrap_or(0)
    }

    /// The sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The number of distinct handles.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Merges two tallies, summing the counts of handles that appear in
    /// both.
    pub fn combine(&self, other: &Tally) -> Tally {
        let mut combined = self.clone();
        for (handle, count) in other.counts.iter() {
            *combined.counts.entry(handle.clone()).or_insert(0) += *count;
        }
        combined
    }

    /// Ranks handles by count, highest first.
    ///
    /// Handles with a count at or below [`Tally::NOISE_THRESHOLD`] are
    /// omitted. Equal counts are ordered by handle.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        self.counts
            .most_common_tiebreaker(|lhs: &String, rhs: &String| Ord::cmp(lhs, rhs))
            .into_iter()
            .filter(|(_, count)| *count > Self::NOISE_THRESHOLD)
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for handle in iter {
            tally.increment(handle);
        }
        tally
    }
}

/// Separate tallies for original posts and reshares.
///
/// Every recorded item lands in exactly one of the two.
#[derive(Clone, Debug, Default)]
pub struct Tallies {
    originals: Tally,
    reshares: Tally,
}

impl Tallies {
    /// Creates a new, empty set of tallies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `item` to the appropriate tally.
    pub fn record<T: Attributable>(&mut self, item: &T) {
        match item.attribution() {
            Attribution::Original(handle) => self.originals.increment(handle),
            Attribution::Reshare(handle) => self.reshares.increment(handle),
        }
    }

    /// Counts of original posts by author.
    pub fn originals(&self) -> &Tally {
        &self.originals
    }

    /// Counts of reshares by original author.
    pub fn reshares(&self) -> &Tally {
        &self.reshares
    }

    /// Counts of original posts and reshares together.
    pub fn combined(&self) -> Tally {
        self.originals.combine(&self.reshares)
    }
}
