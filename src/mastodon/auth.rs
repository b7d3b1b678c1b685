// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Authentication for the Mastodon API.

use std::fmt;

/// An OAuth access token for a Mastodon account.
///
/// The token is never included in `Debug` output, so it is safe to log
/// structures that contain an `Auth`.
#[derive(Clone)]
pub struct Auth {
    access_token: String,
}

impl Auth {
    /// Creates a new `Auth` structure using the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        Self { access_token }
    }

    /// The actual access token.
    ///
    /// # Examples
    ///
    /// ```
    /// use homecounts::mastodon::Auth;
    /// let auth = Auth::new("ThisIsMyAccessToken");
    /// assert_eq!(auth.access_token(), "ThisIsMyAccessToken");
    /// ```
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
