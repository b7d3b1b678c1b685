// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Environment and configuration utilities.
//!
//! Settings are read from the environment, which may be seeded from a
//! dotenv file first. Everything is validated up front so that a bad
//! configuration is reported before any request is made.

use crate::mastodon::Auth;
use reqwest::Url;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Name of the environment variable holding the Mastodon server's URL.
pub const SERVER_VAR: &str = "MASTODON_SERVER";

/// Name of the environment variable holding the access token.
pub const ACCESS_TOKEN_VAR: &str = "MASTODON_ACCESS_TOKEN";

/// Name of the environment variable holding the reporting window in hours.
pub const CUTOFF_HOURS_VAR: &str = "MASTODON_CUTOFF_HOURS";

/// Longest reporting window accepted, in hours (a century).
pub const MAX_CUTOFF_HOURS: u32 = 876_600;

/// Validated program settings.
#[derive(Debug)]
pub struct Settings {
    server: String,
    auth: Auth,
    cutoff_hours: u32,
}

impl Settings {
    /// Validates raw setting values.
    ///
    /// `server` may be a full URL or a bare host name, in which case HTTPS
    /// is assumed. `cutoff_hours` must be a positive integer no greater
    /// than [`MAX_CUTOFF_HOURS`].
    pub fn new(server: &str, access_token: &str, cutoff_hours: &str) -> Result<Self, Error> {
        let server = normalize_server(server)?;
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return Err(Error::MissingAccessToken);
        }
        let cutoff_hours = parse_cutoff_hours(cutoff_hours)?;
        Ok(Self {
            server,
            auth: Auth::new(access_token),
            cutoff_hours,
        })
    }

    /// Reads settings from the environment.
    ///
    /// If `cutoff_hours` is given, it is used instead of
    /// `$MASTODON_CUTOFF_HOURS`.
    pub fn from_env(cutoff_hours: Option<&str>) -> Result<Self, Error> {
        let server = env::var(SERVER_VAR).unwrap_or_default();
        let access_token = env::var(ACCESS_TOKEN_VAR).unwrap_or_default();
        let cutoff_hours = match cutoff_hours {
            Some(hours) => hours.to_string(),
            None => env::var(CUTOFF_HOURS_VAR).unwrap_or_default(),
        };
        Self::new(&server, &access_token, &cutoff_hours)
    }

    /// Base URL of the Mastodon server, without a trailing slash.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Credentials for the Mastodon account.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Length of the reporting window, in hours.
    pub fn cutoff_hours(&self) -> u32 {
        self.cutoff_hours
    }
}

/// Loads variables from a dotenv file into the environment.
///
/// With no `path`, `.env` is looked up in the current directory and its
/// parents, and a missing file is not an error. An explicitly named file
/// must exist. Variables already set in the environment take precedence.
pub fn load_dotenv(path: Option<&Path>) -> Result<(), Error> {
    match path {
        Some(path) => dotenvy::from_path(path).map_err(Error::Dotenv),
        None => match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(err) if err.not_found() => Ok(()),
            Err(err) => Err(Error::Dotenv(err)),
        },
    }
}

fn normalize_server(server: &str) -> Result<String, Error> {
    let server = server.trim().trim_end_matches('/');
    if server.is_empty() {
        return Err(Error::MissingServer);
    }

    let server = if server.contains("://") {
        server.to_string()
    } else {
        format!("https://{server}")
    };

    match Url::parse(&server) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(server),
        _ => Err(Error::InvalidServer(server)),
    }
}

fn parse_cutoff_hours(hours: &str) -> Result<u32, Error> {
    let invalid = || Error::InvalidCutoffHours(hours.to_string());
    let parsed: i64 = hours.trim().parse().map_err(|_| invalid())?;
    match u32::try_from(parsed) {
        Ok(hours) if (1..=MAX_CUTOFF_HOURS).contains(&hours) => Ok(hours),
        _ => Err(invalid()),
    }
}

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// No server was configured.
    #[error("MASTODON_SERVER must be set")]
    MissingServer,

    /// The server is not a usable HTTP(S) URL.
    #[error("Invalid MASTODON_SERVER: {0}")]
    InvalidServer(String),

    /// No access token was configured.
    #[error("MASTODON_ACCESS_TOKEN must be set")]
    MissingAccessToken,

    /// The reporting window is not a positive whole number of hours, or is
    /// too long.
    #[error("Invalid MASTODON_CUTOFF_HOURS: {0:?}")]
    InvalidCutoffHours(String),

    /// A dotenv file could not be read.
    #[error("Could not load environment file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}
