// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Statuses, the Mastodon term for posts.
//!
//! Only the handful of fields needed to attribute a post to an account and
//! place it in time are deserialized; everything else in the API response
//! is ignored.

use crate::clock::{DateTime, HasAge, Utc};
use crate::count::{Attributable, Attribution};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Identifies a status.
///
/// Mastodon IDs are opaque strings. The server orders them by recency, and
/// the ID of the last status on a page is used as the cursor for the next,
/// older page.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(transparent)]
pub struct StatusId(String);

impl StatusId {
    /// Wraps a raw status ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw ID as sent by the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The account that authored a status.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Account {
    acct: String,
}

impl Account {
    /// Creates an account with the given handle.
    pub fn new(acct: impl Into<String>) -> Self {
        let acct = acct.into();
        Self { acct }
    }

    /// The account's handle.
    ///
    /// Local accounts are bare usernames (`alice`); remote accounts include
    /// their instance (`bob@example.social`).
    pub fn acct(&self) -> &str {
        &self.acct
    }
}

/// A post in a Mastodon timeline.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Status {
    id: StatusId,
    created_at: DateTime<Utc>,
    account: Account,
    reblog: Option<Box<Status>>,
}

impl Status {
    /// Creates an original post ("toot") by `acct`.
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>, acct: impl Into<String>) -> Self {
        Self {
            id: StatusId::new(id),
            created_at,
            account: Account::new(acct),
            reblog: None,
        }
    }

    /// Creates a reshare ("boost") of `original` by `acct`.
    pub fn boost(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        acct: impl Into<String>,
        original: Status,
    ) -> Self {
        Self {
            reblog: Some(Box::new(original)),
            ..Self::new(id, created_at, acct)
        }
    }

    /// Parses a page of statuses from a raw timeline response.
    ///
    /// `data` is the body of a call to `/api/v1/timelines/home`, a JSON
    /// array of statuses, newest first.
    pub fn parse(data: &str) -> Result<Vec<Self>, Error> {
        Ok(serde_json::from_str(data)?)
    }

    /// The status's ID.
    pub fn id(&self) -> &StatusId {
        &self.id
    }

    /// The account that posted this status to the timeline.
    ///
    /// For a boost, this is the account that did the boosting.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// The boosted status, if this status is a boost.
    pub fn reblog(&self) -> Option<&Status> {
        self.reblog.as_deref()
    }

    /// True if this status is a boost of another status.
    pub fn is_boost(&self) -> bool {
        self.reblog.is_some()
    }
}

impl HasAge for Status {
    fn created_utc(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Attributable for Status {
    /// Boosts are credited to the author of the boosted status, not to
    /// the account that boosted it.
    fn attribution(&self) -> Attribution<'_> {
        match self.reblog() {
            Some(original) => Attribution::Reshare(original.account().acct()),
            None => Attribution::Original(self.account().acct()),
        }
    }
}

/// An error parsing statuses.
#[derive(Debug, Error)]
pub enum Error {
    /// The response was not a well-formed list of statuses.
    #[error("Malformed timeline data: {0}")]
    Json(#[from] serde_json::Error),
}
