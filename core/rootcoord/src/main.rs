// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use clap::Parser;
use rootcoord::configs::RootCoordConfig;
use rootcoord::log::init_tracing;
use rootcoord::{RootCoord, RootCoordError};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(author, version, about = "In-memory root coordinator")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), RootCoordError> {
    let args = Args::parse();
    let config = RootCoordConfig::load(args.config.as_deref())?;
    init_tracing(&config.logging);

    let coordinator = RootCoord::new(&config);
    coordinator.init()?;
    coordinator.register()?;
    coordinator.start()?;

    info!(
        "Root coordinator is {}, statistics channel: {}, time tick channel: {}",
        coordinator.get_state(),
        coordinator.get_statistics_channel(),
        coordinator.get_time_tick_channel()
    );

    let signal = tokio::signal::ctrl_c().await.inspect_err(|error| {
        error!("Failed to listen for shutdown signal: {error}");
    });

    coordinator.stop()?;
    signal.map_err(RootCoordError::from)
}
