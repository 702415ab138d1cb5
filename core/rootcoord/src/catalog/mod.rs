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

//! Collection and partition catalog.
//!
//! # Locking
//!
//! - `collections` guards the name index and the per-collection metadata.
//!   Lookups take it shared, create/drop take it exclusive, so the two maps are
//!   always observed in step.
//! - Every collection owns one partition index behind its own lock. Partition
//!   operations resolve the collection under the shared collection lock and
//!   then lock that index while still holding it.
//! - Lock order is always collection lock first, partition lock second.

mod collection;
mod partition;
mod partitions;

pub use collection::CollectionMeta;
pub use partition::{PartitionIndex, PartitionMeta};

use crate::allocator::IdAllocator;
use ahash::AHashMap;
use parking_lot::RwLock;
use rootcoord_common::text::random_tokens;
use rootcoord_common::{
    CatalogError, CollectionEntry, CollectionInfo, CollectionSchema, UniqueId, UtcTimestamp,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_SHARDS_NUM: u32 = 2;

#[derive(Debug, Default)]
struct Collections {
    index: AHashMap<Arc<str>, UniqueId>,
    items: AHashMap<UniqueId, CollectionMeta>,
}

impl Collections {
    fn get_by_name(&self, name: &str) -> Option<&CollectionMeta> {
        let id = self.index.get(name)?;
        self.items.get(id)
    }
}

#[derive(Debug)]
pub struct Catalog {
    ids: Arc<IdAllocator>,
    default_shards_num: u32,
    collections: RwLock<Collections>,
}

impl Catalog {
    pub fn new(ids: Arc<IdAllocator>) -> Self {
        Self::with_default_shards_num(ids, DEFAULT_SHARDS_NUM)
    }

    pub fn with_default_shards_num(ids: Arc<IdAllocator>, default_shards_num: u32) -> Self {
        Self {
            ids,
            default_shards_num: default_shards_num.max(1),
            collections: RwLock::new(Collections::default()),
        }
    }

    /// Registers a new collection and its empty partition index.
    ///
    /// A name clash is reported before a malformed schema. A non-positive
    /// `shards_num` falls back to the configured default.
    pub fn create_collection(
        &self,
        name: &str,
        encoded_schema: &[u8],
        shards_num: i32,
    ) -> Result<UniqueId, CatalogError> {
        let schema = CollectionSchema::decode(encoded_schema);
        let shards_num = self.normalize_shards_num(shards_num);
        let virtual_channel_names = random_tokens(shards_num as usize);
        let physical_channel_names = random_tokens(shards_num as usize);

        let mut collections = self.collections.write();
        if collections.index.contains_key(name) {
            debug!("Cannot create collection {name}, it already exists");
            return Err(CatalogError::CollectionAlreadyExists(name.to_owned()));
        }
        let schema = schema.inspect_err(|error| {
            warn!("Cannot create collection {name}: {error}");
        })?;

        let id = self.ids.next_id();
        let name: Arc<str> = Arc::from(name);
        let collection = CollectionMeta::new(
            id,
            name.clone(),
            Arc::new(schema),
            virtual_channel_names,
            physical_channel_names,
            UtcTimestamp::now(),
        );
        collections.index.insert(name.clone(), id);
        collections.items.insert(id, collection);

        info!("Created collection {name} with ID: {id}, shards: {shards_num}");
        Ok(id)
    }

    /// Removes the collection together with every partition it owns.
    pub fn drop_collection(&self, name: &str) -> Result<(), CatalogError> {
        let mut collections = self.collections.write();
        let Some(id) = collections.index.remove(name) else {
            debug!("Cannot drop collection {name}, it does not exist");
            return Err(CatalogError::CollectionNotExists(name.to_owned()));
        };
        let Some(collection) = collections.items.remove(&id) else {
            unreachable!("collection {name} with ID {id} is indexed but has no metadata");
        };

        let dropped_partitions = collection.partitions.write().clear();
        info!(
            "Dropped collection {name} with ID: {id} and {dropped_partitions} partition(s)"
        );
        Ok(())
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.read().index.contains_key(name)
    }

    pub fn describe_collection(&self, name: &str) -> Result<CollectionInfo, CatalogError> {
        self.collections
            .read()
            .get_by_name(name)
            .map(CollectionMeta::to_info)
            .ok_or_else(|| CatalogError::CollectionNotExists(name.to_owned()))
    }

    /// Snapshot of every live collection, ordered by ID.
    pub fn show_collections(&self) -> Vec<CollectionEntry> {
        let collections = self.collections.read();
        let mut entries: Vec<_> = collections
            .items
            .values()
            .map(CollectionMeta::to_entry)
            .collect();
        entries.sort_unstable_by_key(|entry| entry.id);
        entries
    }

    pub fn collections_count(&self) -> usize {
        self.collections.read().items.len()
    }

    fn normalize_shards_num(&self, shards_num: i32) -> u32 {
        if shards_num <= 0 {
            self.default_shards_num
        } else {
            shards_num as u32
        }
    }
}
