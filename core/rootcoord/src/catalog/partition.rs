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

use ahash::AHashMap;
use rootcoord_common::{PartitionEntry, UniqueId, UtcTimestamp};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionMeta {
    pub id: UniqueId,
    pub name: Arc<str>,
    pub created_at: UtcTimestamp,
    pub created_utc_at: UtcTimestamp,
}

impl PartitionMeta {
    pub fn new(id: UniqueId, name: Arc<str>, created_at: UtcTimestamp) -> Self {
        Self {
            id,
            name,
            created_at,
            created_utc_at: created_at,
        }
    }

    pub fn to_entry(&self) -> PartitionEntry {
        PartitionEntry {
            name: self.name.to_string(),
            id: self.id,
            created_at: self.created_at,
            created_utc_at: self.created_utc_at,
        }
    }
}

/// Partitions of a single collection.
///
/// `index` maps name to ID and `items` maps ID to metadata (which carries the
/// name back), so both directions are kept in step by `insert` and `remove`.
#[derive(Debug)]
pub struct PartitionIndex {
    collection_id: UniqueId,
    index: AHashMap<Arc<str>, UniqueId>,
    items: AHashMap<UniqueId, PartitionMeta>,
}

impl PartitionIndex {
    pub fn new(collection_id: UniqueId) -> Self {
        Self {
            collection_id,
            index: AHashMap::new(),
            items: AHashMap::new(),
        }
    }

    pub fn collection_id(&self) -> UniqueId {
        self.collection_id
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get_id(&self, name: &str) -> Option<UniqueId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: UniqueId) -> Option<&PartitionMeta> {
        self.items.get(&id)
    }

    /// Caller must have checked that `partition.name` is free.
    pub fn insert(&mut self, partition: PartitionMeta) {
        debug_assert!(!self.index.contains_key(&partition.name));
        self.index.insert(partition.name.clone(), partition.id);
        self.items.insert(partition.id, partition);
    }

    pub fn remove(&mut self, name: &str) -> Option<PartitionMeta> {
        let id = self.index.remove(name)?;
        self.items.remove(&id)
    }

    /// Drops every partition, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        for (_, partition) in self.items.drain() {
            self.index.remove(&partition.name);
        }
        debug_assert!(self.index.is_empty());
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn entries(&self) -> Vec<PartitionEntry> {
        let mut entries: Vec<_> = self.items.values().map(PartitionMeta::to_entry).collect();
        entries.sort_unstable_by_key(|entry| entry.id);
        entries
    }
}
