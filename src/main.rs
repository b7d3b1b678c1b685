// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use clap::Parser;
use homecounts::cli::{self, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .format_timestamp(None)
        .init();

    if let Err(err) = cli::run(config).await {
        cli::die(1, &err.to_string());
    }
}
