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

//! Coordinator configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `ROOTCOORD_`-prefixed environment variables (`__` separates nested keys,
//! e.g. `ROOTCOORD_CATALOG__DEFAULT_SHARDS_NUM=4`).

use crate::catalog::DEFAULT_SHARDS_NUM;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rootcoord_common::UniqueId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const ENV_PREFIX: &str = "ROOTCOORD_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootCoordConfig {
    /// `0` lets the coordinator mint its own node ID.
    pub node_id: UniqueId,
    /// Empty means a random address token is generated.
    pub address: String,
    pub statistics_channel: String,
    pub time_tick_channel: String,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_shards_num: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_shards_num: DEFAULT_SHARDS_NUM,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            ansi: true,
        }
    }
}

impl RootCoordConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(RootCoordConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file_exact(path));
        }
        let config: RootCoordConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_id < 0 {
            return Err(ConfigError::Invalid(format!(
                "node_id must not be negative, got {}",
                self.node_id
            )));
        }
        if self.catalog.default_shards_num == 0 {
            return Err(ConfigError::Invalid(
                "catalog.default_shards_num must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}
