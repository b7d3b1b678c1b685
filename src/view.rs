// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::count::RankedEntry;
use crate::report::Report;
use indoc::formatdoc;
use itertools::Itertools;

/// View renderer options.
#[derive(Debug)]
pub struct ViewOptions {
    hours: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { hours: 24 }
    }
}

impl ViewOptions {
    /// Sets the length of the reporting window, in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use homecounts::view::ViewOptions;
    /// let opts = ViewOptions::default().hours(12);
    /// assert_eq!(opts.window(), 12);
    /// ```
    pub fn hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// The length of the reporting window, in hours.
    pub fn window(&self) -> u32 {
        self.hours
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

impl Viewable for [RankedEntry] {
    fn view(&self, _: &ViewOptions) -> String {
        self.iter()
            .map(|(acct, count)| format!("👤 @{acct} → {count}"))
            .join("\n")
    }
}

impl Viewable for Report {
    fn view(&self, opts: &ViewOptions) -> String {
        let sections = [
            ("Top Toots", self.top_originals()),
            ("Top Boosts", self.top_reshares()),
            ("Top Combined (Toots + Boosts)", self.top_combined()),
        ]
        .into_iter()
        .map(|(title, entries)| {
            let heading = format!("📊 {title}:");
            if entries.is_empty() {
                heading
            } else {
                format!("{heading}\n{}", entries.view(opts))
            }
        })
        .join("\n\n");

        formatdoc! {"
            📊 Total timeline posts in last {} hours:
            📝 Toots: {}
            🔁 Boosts: {}
            ➕ Combined: {}

            {}",
            opts.window(),
            self.total_originals(),
            self.total_reshares(),
            self.total_combined(),
            sections,
        }
    }
}
