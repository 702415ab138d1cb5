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

use crate::configs::ConfigError;
use rootcoord_common::CatalogError;
use thiserror::Error;

/// Failures that end the coordinator process.
#[derive(Debug, Error)]
pub enum RootCoordError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("root coordinator lifecycle failed: {0}")]
    Lifecycle(#[from] CatalogError),
    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[from] std::io::Error),
}
