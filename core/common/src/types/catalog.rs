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

use crate::types::identifier::UniqueId;
use crate::types::schema::CollectionSchema;
use crate::utils::timestamp::UtcTimestamp;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Full snapshot of a collection returned by `describe_collection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub id: UniqueId,
    pub name: String,
    pub schema: Arc<CollectionSchema>,
    pub shards_num: u32,
    pub virtual_channel_names: Vec<String>,
    pub physical_channel_names: Vec<String>,
    pub created_at: UtcTimestamp,
    pub created_utc_at: UtcTimestamp,
}

/// One row of `show_collections`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub id: UniqueId,
    pub created_at: UtcTimestamp,
    pub created_utc_at: UtcTimestamp,
}

/// One row of `show_partitions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionEntry {
    pub name: String,
    pub id: UniqueId,
    pub created_at: UtcTimestamp,
    pub created_utc_at: UtcTimestamp,
}

/// Response of an ID allocation: `count` consecutive IDs starting at `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub id: UniqueId,
    pub count: u32,
}

impl IdRange {
    /// One past the last ID of the range.
    pub fn end(&self) -> UniqueId {
        self.id + self.count as UniqueId
    }

    pub fn contains(&self, id: UniqueId) -> bool {
        id >= self.id && id < self.end()
    }
}

/// Response of a timestamp allocation. The span reserved by the call is
/// `(timestamp - count, timestamp]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRange {
    pub timestamp: u64,
    pub count: u32,
}
