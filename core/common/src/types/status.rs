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

use crate::error::catalog_error::CatalogError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Wire-level status codes carried by every coordinator response.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[repr(u32)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    #[default]
    Success = 0,
    UnexpectedError = 1,
    IllegalArgument = 5,
    CollectionNotExists = 4,
    CollectionAlreadyExists = 40,
    PartitionNotExists = 41,
    PartitionAlreadyExists = 42,
    InvalidSchema = 43,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Status indicator separate from the response payload.
///
/// Callers must check [`Status::is_success`] before trusting any payload
/// field of the response it accompanies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub error_code: ErrorCode,
    pub reason: String,
}

impl Status {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.error_code == ErrorCode::Success
    }
}

impl From<&CatalogError> for Status {
    fn from(error: &CatalogError) -> Self {
        Self {
            error_code: error.as_code(),
            reason: error.to_string(),
        }
    }
}

impl<T> From<&Result<T, CatalogError>> for Status {
    fn from(result: &Result<T, CatalogError>) -> Self {
        match result {
            Ok(_) => Status::success(),
            Err(error) => Status::from(error),
        }
    }
}
