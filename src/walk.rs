// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Walks a timeline backward in time.
//!
//! A [`Walker`] requests pages from a [`TimelineSource`], newest first,
//! passing the ID of the last status on each page as the cursor for the
//! next. Every status created at or after the cutoff is recorded in a set
//! of [`Tallies`]. The walk ends when the source runs out of statuses,
//! when the first status older than the cutoff turns up, or when an
//! optional page limit is reached.

use crate::clock::{DateTime, HasAge, Utc};
use crate::count::Tallies;
use crate::mastodon::client::{Error, TimelineSource};
use crate::mastodon::{Status, StatusId};
use log::{debug, info, warn};
use std::num::NonZeroU32;

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StopReason {
    /// The source returned an empty page.
    Exhausted,

    /// A status older than the cutoff was found.
    CutoffReached,

    /// The maximum number of pages was fetched.
    PageLimit,
}

/// The outcome of a completed walk.
#[derive(Debug)]
pub struct Walk {
    tallies: Tallies,
    pages: u32,
    stop_reason: StopReason,
}

impl Walk {
    /// Counts of everything recorded during the walk.
    pub fn tallies(&self) -> &Tallies {
        &self.tallies
    }

    /// Number of pages requested from the source, including a final
    /// empty page.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Why the walk stopped.
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }
}

/// What to do after scanning a page.
enum Scan {
    Continue(StatusId),
    Stop(StopReason),
}

/// Pages backward through a timeline until a cutoff.
#[derive(Debug)]
pub struct Walker {
    cutoff: DateTime<Utc>,
    page_size: u32,
    max_pages: Option<NonZeroU32>,
}

impl Walker {
    /// Number of statuses requested per page.
    ///
    /// This is the largest page the Mastodon home timeline will return.
    pub const DEFAULT_PAGE_SIZE: u32 = 40;

    /// Creates a walker that records statuses created at or after `cutoff`.
    pub fn new(cutoff: DateTime<Utc>) -> Self {
        Self {
            cutoff,
            page_size: Self::DEFAULT_PAGE_SIZE,
            max_pages: None,
        }
    }

    /// Sets the number of statuses requested per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Stops the walk after `max_pages` pages, or never if `None`.
    pub fn max_pages(mut self, max_pages: Option<NonZeroU32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Walks `source` backward from its newest status.
    ///
    /// Any error from the source aborts the walk; whatever was counted
    /// up to that point is discarded.
    pub async fn walk<S: TimelineSource>(&self, source: &S) -> Result<Walk, Error> {
        let mut tallies = Tallies::new();
        let mut cursor: Option<StatusId> = None;
        let mut pages = 0;

        let stop_reason = loop {
            pages += 1;
            info!("Fetching page #{pages}...");
            let page = source.fetch_page(cursor.as_ref(), self.page_size).await?;

            match self.scan(&page, &mut tallies) {
                Scan::Stop(reason) => break reason,
                Scan::Continue(_) if self.is_at_page_limit(pages) => {
                    warn!("Stopped after {pages} pages without reaching the cutoff");
                    break StopReason::PageLimit;
                }
                Scan::Continue(last_id) => cursor = Some(last_id),
            }
        };

        info!("Finished after {pages} pages: {stop_reason:?}");
        Ok(Walk {
            tallies,
            pages,
            stop_reason,
        })
    }

    fn scan(&self, page: &[Status], tallies: &mut Tallies) -> Scan {
        let Some(last) = page.last() else {
            return Scan::Stop(StopReason::Exhausted);
        };

        let in_window = page
            .iter()
            .take_while(|status| !status.is_older_than(&self.cutoff))
            .inspect(|status| tallies.record(*status))
            .count();
        debug!("Recorded {in_window} of {} statuses", page.len());

        if in_window < page.len() {
            Scan::Stop(StopReason::CutoffReached)
        } else {
            Scan::Continue(last.id().clone())
        }
    }

    fn is_at_page_limit(&self, pages: u32) -> bool {
        self.max_pages.is_some_and(|max| pages >= max.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, TimeDelta};
    use crate::http::HTTPError;
    use crate::test_utils::{FrozenClock, ScriptedTimeline};
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn hours_ago(hours: i64) -> DateTime<Utc> {
        FrozenClock::default().now() - TimeDelta::hours(hours)
    }

    fn toot(id: &str, hours: i64, acct: &str) -> Status {
        Status::new(id, hours_ago(hours), acct)
    }

    fn boost(id: &str, hours: i64, acct: &str, original_acct: &str) -> Status {
        let original = Status::new(format!("{id}-original"), hours_ago(hours + 100), original_acct);
        Status::boost(id, hours_ago(hours), acct, original)
    }

    fn walker() -> Walker {
        Walker::new(FrozenClock::default().hours_ago(24))
    }

    #[tokio::test]
    async fn it_stops_at_the_first_status_older_than_the_cutoff() {
        let source = ScriptedTimeline::new(vec![Ok(vec![
            toot("5", 0, "A"),
            boost("4", 0, "B", "A"),
            toot("3", 0, "A"),
            toot("2", 30, "C"),
        ])]);

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.stop_reason(), StopReason::CutoffReached);
        assert_eq!(walk.pages(), 1);
        assert_eq!(walk.tallies().originals().get("A"), 2);
        assert_eq!(walk.tallies().originals().get("C"), 0);
        assert_eq!(walk.tallies().reshares().get("A"), 1);
        assert_eq!(walk.tallies().reshares().get("B"), 0);
    }

    #[tokio::test]
    async fn it_ignores_recent_statuses_after_an_old_one_on_the_same_page() {
        let source = ScriptedTimeline::new(vec![Ok(vec![
            toot("3", 1, "A"),
            toot("2", 25, "B"),
            toot("1", 2, "C"),
        ])]);

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.tallies().originals().get("A"), 1);
        assert_eq!(walk.tallies().originals().get("B"), 0);
        assert_eq!(walk.tallies().originals().get("C"), 0);
    }

    #[tokio::test]
    async fn it_does_not_request_pages_after_the_cutoff() {
        let source = ScriptedTimeline::new(vec![
            Ok(vec![toot("4", 1, "A"), toot("3", 2, "A")]),
            Ok(vec![toot("2", 23, "B"), toot("1", 48, "B")]),
            Ok(vec![toot("0", 1, "C")]),
        ]);

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.pages(), 2);
        assert_eq!(source.requests(), 2);
        assert_eq!(walk.tallies().originals().get("B"), 1);
        assert_eq!(walk.tallies().originals().get("C"), 0);
    }

    #[tokio::test]
    async fn it_counts_statuses_exactly_at_the_cutoff() {
        let source = ScriptedTimeline::new(vec![Ok(vec![toot("1", 24, "A")]), Ok(vec![])]);

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.tallies().originals().get("A"), 1);
        assert_eq!(walk.stop_reason(), StopReason::Exhausted);
    }

    #[tokio::test]
    async fn it_stops_on_an_empty_page() {
        let source = ScriptedTimeline::new(vec![
            Ok(vec![toot("2", 1, "A")]),
            Ok(vec![]),
            Ok(vec![toot("1", 2, "B")]),
        ]);

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.stop_reason(), StopReason::Exhausted);
        assert_eq!(walk.pages(), 2);
        assert_eq!(walk.tallies().originals().get("B"), 0);
    }

    #[tokio::test]
    async fn it_returns_empty_tallies_for_an_empty_timeline() {
        let source = ScriptedTimeline::new(vec![Ok(vec![])]);

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.stop_reason(), StopReason::Exhausted);
        assert!(walk.tallies().originals().is_empty());
        assert!(walk.tallies().reshares().is_empty());
    }

    #[tokio::test]
    async fn it_passes_the_last_id_of_each_page_as_the_next_cursor() {
        let source = ScriptedTimeline::new(vec![
            Ok(vec![toot("9", 1, "A"), toot("8", 1, "A")]),
            Ok(vec![toot("7", 2, "A"), toot("6", 2, "A")]),
            Ok(vec![]),
        ]);

        walker().walk(&source).await.unwrap();

        assert_eq!(
            source.cursors(),
            vec![None, Some(String::from("8")), Some(String::from("6"))]
        );
    }

    #[tokio::test]
    async fn it_requests_pages_of_the_configured_size() {
        let source = ScriptedTimeline::new(vec![Ok(vec![])]);

        walker().page_size(5).walk(&source).await.unwrap();

        assert_eq!(source.limits(), vec![5]);
    }

    #[tokio::test]
    async fn it_requests_full_pages_by_default() {
        let source = ScriptedTimeline::new(vec![Ok(vec![])]);

        walker().walk(&source).await.unwrap();

        assert_eq!(source.limits(), vec![Walker::DEFAULT_PAGE_SIZE]);
    }

    #[tokio::test]
    async fn it_stops_at_the_page_limit() {
        let source = ScriptedTimeline::new(vec![
            Ok(vec![toot("3", 1, "A")]),
            Ok(vec![toot("2", 2, "A")]),
            Ok(vec![toot("1", 3, "A")]),
        ]);

        let walk = walker()
            .max_pages(NonZeroU32::new(2))
            .walk(&source)
            .await
            .unwrap();

        assert_eq!(walk.stop_reason(), StopReason::PageLimit);
        assert_eq!(walk.pages(), 2);
        assert_eq!(source.requests(), 2);
        assert_eq!(walk.tallies().originals().get("A"), 2);
    }

    #[tokio::test]
    async fn it_prefers_the_cutoff_over_the_page_limit() {
        let source = ScriptedTimeline::new(vec![Ok(vec![toot("2", 1, "A"), toot("1", 48, "A")])]);

        let walk = walker()
            .max_pages(NonZeroU32::new(1))
            .walk(&source)
            .await
            .unwrap();

        assert_eq!(walk.stop_reason(), StopReason::CutoffReached);
    }

    #[tokio::test]
    async fn it_fails_when_the_source_fails() {
        let source = ScriptedTimeline::new(vec![
            Ok(vec![toot("2", 1, "A"), toot("1", 1, "A")]),
            Err(HTTPError::Http(StatusCode::TOO_MANY_REQUESTS).into()),
        ]);

        let result = walker().walk(&source).await;

        assert!(matches!(
            result,
            Err(Error::Service(HTTPError::Http(StatusCode::TOO_MANY_REQUESTS)))
        ));
        assert_eq!(source.requests(), 2);
    }

    #[tokio::test]
    async fn it_walks_a_mastodon_timeline() {
        use crate::mastodon::HomeTimeline;
        use crate::test_utils::TestService;

        let source = HomeTimeline::new_with_service(TestService::new("sample"));

        let walk = walker().walk(&source).await.unwrap();

        assert_eq!(walk.stop_reason(), StopReason::CutoffReached);
        assert_eq!(walk.pages(), 2);
        assert_eq!(walk.tallies().originals().get("alice"), 2);
        assert_eq!(walk.tallies().originals().get("carol@other.example"), 1);
        assert_eq!(walk.tallies().originals().get("dave"), 0);
        assert_eq!(walk.tallies().reshares().get("alice"), 1);
        assert_eq!(walk.tallies().reshares().get("bob@example.social"), 0);
    }
}
