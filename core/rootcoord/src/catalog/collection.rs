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

use crate::catalog::partition::PartitionIndex;
use parking_lot::RwLock;
use rootcoord_common::{CollectionEntry, CollectionInfo, CollectionSchema, UniqueId, UtcTimestamp};
use std::sync::Arc;

/// Collection metadata held by the catalog.
///
/// The collection owns its partition index. Dropping the collection clears
/// the index explicitly before the record itself goes away.
#[derive(Debug)]
pub struct CollectionMeta {
    pub id: UniqueId,
    pub name: Arc<str>,
    pub schema: Arc<CollectionSchema>,
    pub shards_num: u32,
    pub virtual_channel_names: Vec<String>,
    pub physical_channel_names: Vec<String>,
    pub created_at: UtcTimestamp,
    pub created_utc_at: UtcTimestamp,
    pub partitions: Arc<RwLock<PartitionIndex>>,
}

impl CollectionMeta {
    pub fn new(
        id: UniqueId,
        name: Arc<str>,
        schema: Arc<CollectionSchema>,
        virtual_channel_names: Vec<String>,
        physical_channel_names: Vec<String>,
        created_at: UtcTimestamp,
    ) -> Self {
        debug_assert_eq!(virtual_channel_names.len(), physical_channel_names.len());
        Self {
            id,
            name,
            schema,
            shards_num: virtual_channel_names.len() as u32,
            virtual_channel_names,
            physical_channel_names,
            created_at,
            created_utc_at: created_at,
            partitions: Arc::new(RwLock::new(PartitionIndex::new(id))),
        }
    }

    pub fn to_info(&self) -> CollectionInfo {
        CollectionInfo {
            id: self.id,
            name: self.name.to_string(),
            schema: self.schema.clone(),
            shards_num: self.shards_num,
            virtual_channel_names: self.virtual_channel_names.clone(),
            physical_channel_names: self.physical_channel_names.clone(),
            created_at: self.created_at,
            created_utc_at: self.created_utc_at,
        }
    }

    pub fn to_entry(&self) -> CollectionEntry {
        CollectionEntry {
            name: self.name.to_string(),
            id: self.id,
            created_at: self.created_at,
            created_utc_at: self.created_utc_at,
        }
    }
}
