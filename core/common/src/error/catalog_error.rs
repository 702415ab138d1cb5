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

use crate::types::status::ErrorCode;
use thiserror::Error;

/// Every expected failure of a coordinator request.
///
/// Requests never panic on these; they are returned so the caller can branch
/// on the kind or turn it into a [`Status`](crate::Status) for the wire.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("collection {0} already exists")]
    CollectionAlreadyExists(String),
    #[error("collection {0} does not exist")]
    CollectionNotExists(String),
    #[error("partition {0} already exists")]
    PartitionAlreadyExists(String),
    #[error("partition {0} does not exist")]
    PartitionNotExists(String),
    #[error("failed to parse schema, error: {0}")]
    InvalidSchema(String),
    #[error("invalid ID allocation count: {0}, must be greater than zero")]
    InvalidIdCount(u32),
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl CatalogError {
    pub fn as_code(&self) -> ErrorCode {
        match self {
            CatalogError::CollectionAlreadyExists(_) => ErrorCode::CollectionAlreadyExists,
            CatalogError::CollectionNotExists(_) => ErrorCode::CollectionNotExists,
            CatalogError::PartitionAlreadyExists(_) => ErrorCode::PartitionAlreadyExists,
            CatalogError::PartitionNotExists(_) => ErrorCode::PartitionNotExists,
            CatalogError::InvalidSchema(_) => ErrorCode::InvalidSchema,
            CatalogError::InvalidIdCount(_) => ErrorCode::IllegalArgument,
            CatalogError::UnexpectedError(_) => ErrorCode::UnexpectedError,
        }
    }

    pub fn as_string(&self) -> &'static str {
        self.as_code().into()
    }
}
