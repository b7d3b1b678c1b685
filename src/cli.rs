// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::clock::{Clock, SystemClock};
use crate::conf::{self, Settings};
use crate::mastodon::client::{self, HomeTimeline, TimelineSource};
use crate::report::Report;
use crate::view::{ViewOptions, Viewable};
use crate::walk::Walker;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colored::Colorize;
use log::debug;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Answers the question, \"Who fills up my Mastodon home timeline?\"", long_about = None
)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// Count posts from the last HOURS hours [default: $MASTODON_CUTOFF_HOURS]
    #[arg(long, value_name = "HOURS")]
    hours: Option<String>,

    /// Stop after fetching this many pages of the timeline
    #[arg(long, value_name = "PAGES")]
    max_pages: Option<NonZeroU32>,

    /// Read settings from this file instead of .env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity<InfoLevel> {
        self.verbosity
    }
}

/// An error that stops the program.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing settings.
    #[error("{0}")]
    Config(#[from] conf::Error),

    /// The timeline could not be retrieved.
    #[error("Could not fetch timeline: {0}")]
    Client(#[from] client::Error),
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
    settings: Settings,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    ///
    /// Settings are loaded and validated here, so an invalid configuration
    /// is reported before anything is fetched.
    pub fn new(config: Config) -> Result<Runner, Error> {
        conf::load_dotenv(config.env_file.as_deref())?;
        let settings = Settings::from_env(config.hours.as_deref())?;
        debug!("Loaded settings for {}", settings.server());
        Ok(Self { config, settings })
    }

    /// Fetches the home timeline and returns its report.
    pub async fn report<C: Clock>(&self, clock: &C) -> Result<Report, Error> {
        let source = HomeTimeline::new(self.settings.server(), self.settings.auth().clone())?;
        self.report_from(&source, clock).await
    }

    async fn report_from<S: TimelineSource, C: Clock>(
        &self,
        source: &S,
        clock: &C,
    ) -> Result<Report, Error> {
        let walk = Walker::new(clock.hours_ago(self.settings.cutoff_hours()))
            .max_pages(self.config.max_pages)
            .walk(source)
            .await?;
        Ok(Report::from_tallies(walk.tallies()))
    }

    /// Run the command-line program using its stored configuration options.
    pub async fn run(&self) -> Result<(), Error> {
        let report = self.report(&SystemClock).await?;
        let opts = ViewOptions::default().hours(self.settings.cutoff_hours());
        println!("\n{}", report.view(&opts));
        Ok(())
    }
}

/// Loads settings for `config` and runs the program.
pub async fn run(config: Config) -> Result<(), Error> {
    Runner::new(config)?.run().await
}
