// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Mastodon API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Mastodon API over HTTPS, essentially a specialized HTTPS client
//! specifically for a single Mastodon server.

use crate::http::{HTTPError, HTTPResult, HTTPService};
use crate::mastodon::auth::Auth;
use crate::mastodon::status::StatusId;
use log::debug;
use reqwest::header::{self, HeaderMap};
use reqwest::{Client, Request, StatusCode};

/// A service for retrieving a user's home timeline.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Mastodon API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service: HTTPService {
    /// Performs a GET request for one page of the home timeline and
    /// returns the raw JSON response.
    ///
    /// `max_id` restricts the page to statuses older than the given ID;
    /// `None` requests the newest page. `limit` is the maximum number of
    /// statuses on the page.
    fn get_home_timeline(
        &self,
        max_id: Option<&StatusId>,
        limit: u32,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts a Mastodon server directly.
#[derive(Debug)]
pub struct MastodonService {
    client: Client,
    server: String,
    auth: Auth,
}

impl HTTPService for MastodonService {}

impl MastodonService {
    /// Creates a new service for the Mastodon server at `server`,
    /// authenticating with `auth`.
    ///
    /// `server` is the base URL of the server, such as
    /// `https://mastodon.social`.
    pub fn new(server: impl Into<String>, auth: Auth) -> HTTPResult<Self> {
        let client = Self::client()?;
        let server = server.into();
        Ok(Self {
            client,
            server,
            auth,
        })
    }

    /// Builds an authenticated request for one page of the home timeline.
    ///
    /// The cursor is passed through as an opaque, percent-encoded query
    /// parameter.
    fn request(&self, max_id: Option<&StatusId>, limit: u32) -> HTTPResult<Request> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(max_id) = max_id {
            query.push(("max_id", max_id.to_string()));
        }

        let request = self
            .client
            .get(format!("{}/api/v1/timelines/home", self.server))
            .query(&query)
            .bearer_auth(self.auth.access_token())
            .build()?;
        Ok(request)
    }

    /// Sends an authenticated GET request to a Mastodon API endpoint and
    /// returns the raw body.
    async fn get(&self, request: Request) -> HTTPResult<String> {
        let resp = self.client.execute(request).await?;
        check_response(resp.status(), resp.headers())?;
        resp.text().await.map_err(HTTPError::Body)
    }
}

/// Ensures a response was successful and carries a JSON body.
fn check_response(status: StatusCode, headers: &HeaderMap) -> HTTPResult<()> {
    if !status.is_success() {
        return Err(HTTPError::Http(status));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .ok_or(HTTPError::MissingContentType)?
        .to_str()?;
    if content_type.starts_with("application/json") {
        Ok(())
    } else {
        Err(HTTPError::UnexpectedContentType(content_type.to_string()))
    }
}

impl Service for MastodonService {
    async fn get_home_timeline(&self, max_id: Option<&StatusId>, limit: u32) -> HTTPResult<String> {
        let request = self.request(max_id, limit)?;
        debug!("GET {}", request.url());
        self.get(request).await
    }
}
