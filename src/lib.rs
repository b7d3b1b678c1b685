// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! homecounts is a command-line tool that answers the question, "Who fills
//! up my Mastodon home timeline?" It pages backward through your home
//! timeline until it reaches posts older than a configurable number of
//! hours, counting original posts ("toots") and reshares ("boosts") by
//! author, and prints a ranked summary.
//!
//! Boosts are credited to the author of the boosted post, not to the
//! account that boosted it, so the summary shows whose words actually
//! appear in your timeline. Authors who appear only once in a ranking are
//! left out.
//!
//! # Examples
//!
//! Summarize the window configured by `$MASTODON_CUTOFF_HOURS`:
//!
//! ```bash
//! homecounts
//! ```
//!
//! Summarize the last 12 hours instead:
//!
//! ```bash
//! homecounts --hours 12
//! ```
//!
//! Give up after 10 pages (400 posts), even if the cutoff hasn't been
//! reached:
//!
//! ```bash
//! homecounts --max-pages 10
//! ```
//!
//! Show each request as it is made:
//!
//! ```bash
//! homecounts -v
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! homecounts --help
//! ```
//!
//! # Mastodon API Setup
//!
//! homecounts reads your home timeline with an access token for your
//! account. To create one:
//!
//! 1. In your Mastodon server's web interface, open _Preferences_ →
//!    _Development_ and create a new application.
//! 2. Grant it the `read:statuses` scope.
//! 3. Copy the application's access token.
//! 4. Create a `.env` file in the directory you run homecounts from:
//!
//!    ```bash
//!    MASTODON_SERVER=https://mastodon.social
//!    MASTODON_ACCESS_TOKEN='copied access token'
//!    MASTODON_CUTOFF_HOURS=24
//!    ```
//!
//!    Variables already set in your shell's environment take precedence
//!    over the `.env` file, and `--env-file` can point to a file elsewhere.
//!
//! # License
//!
//! homecounts is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod clock;
pub mod conf;
pub mod count;
pub mod http;
pub mod mastodon;
pub mod report;
pub mod view;
pub mod walk;

#[cfg(test)]
mod test_utils;
