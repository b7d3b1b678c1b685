// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading timelines from the Mastodon API.

use crate::http;
use crate::mastodon::auth::Auth;
use crate::mastodon::service::{MastodonService, Service};
use crate::mastodon::status::{self, Status, StatusId};
use thiserror::Error;

/// A source of timeline pages.
///
/// Pages are returned newest first. An empty page means there are no
/// older statuses to return.
pub trait TimelineSource {
    /// Fetches up to `limit` statuses older than `cursor`, or the newest
    /// statuses if `cursor` is `None`.
    fn fetch_page(
        &self,
        cursor: Option<&StatusId>,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Status>, Error>> + Send;
}

/// The authenticated user's home timeline.
#[derive(Debug)]
pub struct HomeTimeline<S: Service = MastodonService> {
    service: S,
}

impl HomeTimeline {
    /// Creates a client for the home timeline of the account that owns
    /// `auth` on the server at `server`.
    ///
    /// Returns an [`enum@Error`] if an HTTP client cannot be created.
    pub fn new(server: impl Into<String>, auth: Auth) -> Result<Self, Error> {
        let service = MastodonService::new(server, auth)?;
        Ok(Self::new_with_service(service))
    }
}

impl<S: Service> HomeTimeline<S> {
    /// Creates a client for the home timeline.
    ///
    /// `service` is the actual service implementation that will be used
    /// to retrieve timeline data.
    pub(crate) fn new_with_service(service: S) -> Self {
        Self { service }
    }
}

impl<S: Service + Sync> TimelineSource for HomeTimeline<S> {
    async fn fetch_page(&self, cursor: Option<&StatusId>, limit: u32) -> Result<Vec<Status>, Error> {
        let data = self.service.get_home_timeline(cursor, limit).await?;
        Ok(Status::parse(&data)?)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] status::Error),
}
