// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Ranked summaries of who posted what in a timeline.

use crate::count::{RankedEntry, Tallies};

/// Totals and rankings of original posts and reshares.
///
/// Each ranking lists handles with more than one item, highest count
/// first. Ties are ordered by handle.
#[derive(Debug, Default, PartialEq)]
pub struct Report {
    total_originals: usize,
    total_reshares: usize,
    top_originals: Vec<RankedEntry>,
    top_reshares: Vec<RankedEntry>,
    top_combined: Vec<RankedEntry>,
}

impl Report {
    /// Summarizes the final `tallies` of a walk.
    pub fn from_tallies(tallies: &Tallies) -> Self {
        Self {
            total_originals: tallies.originals().total(),
            total_reshares: tallies.reshares().total(),
            top_originals: tallies.originals().ranked(),
            top_reshares: tallies.reshares().ranked(),
            top_combined: tallies.combined().ranked(),
        }
    }

    /// Number of original posts.
    pub fn total_originals(&self) -> usize {
        self.total_originals
    }

    /// Number of reshares.
    pub fn total_reshares(&self) -> usize {
        self.total_reshares
    }

    /// Number of original posts and reshares together.
    pub fn total_combined(&self) -> usize {
        self.total_originals + self.total_reshares
    }

    /// Authors ranked by number of original posts.
    pub fn top_originals(&self) -> &[RankedEntry] {
        &self.top_originals
    }

    /// Authors ranked by number of times their posts were reshared.
    pub fn top_reshares(&self) -> &[RankedEntry] {
        &self.top_reshares
    }

    /// Authors ranked by original posts and reshares together.
    pub fn top_combined(&self) -> &[RankedEntry] {
        &self.top_combined
    }
}
