// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Mastodon API clients and services for communicating with a Mastodon
//! server over HTTP.

pub mod auth;
pub mod client;
pub mod service;
pub mod status;

pub use auth::Auth;
pub use client::{HomeTimeline, TimelineSource};
pub use status::{Account, Status, StatusId};
