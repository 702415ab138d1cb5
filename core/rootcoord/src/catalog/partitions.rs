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

use crate::catalog::{Catalog, PartitionIndex, PartitionMeta};
use rootcoord_common::{CatalogError, PartitionEntry, UniqueId, UtcTimestamp};
use std::sync::Arc;
use tracing::{debug, info};

impl Catalog {
    pub fn create_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<UniqueId, CatalogError> {
        self.with_partitions(collection_name, |collection_id, partitions| {
            let mut partitions = partitions.write();
            if partitions.contains(partition_name) {
                debug!(
                    "Cannot create partition {partition_name} in collection {collection_name}, it already exists"
                );
                return Err(CatalogError::PartitionAlreadyExists(
                    partition_name.to_owned(),
                ));
            }

            let id = self.ids.next_id();
            partitions.insert(PartitionMeta::new(
                id,
                Arc::from(partition_name),
                UtcTimestamp::now(),
            ));
            info!(
                "Created partition {partition_name} with ID: {id} in collection {collection_name} with ID: {collection_id}"
            );
            Ok(id)
        })
    }

    pub fn drop_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<(), CatalogError> {
        self.with_partitions(collection_name, |collection_id, partitions| {
            let Some(partition) = partitions.write().remove(partition_name) else {
                debug!(
                    "Cannot drop partition {partition_name} in collection {collection_name}, it does not exist"
                );
                return Err(CatalogError::PartitionNotExists(partition_name.to_owned()));
            };
            info!(
                "Dropped partition {partition_name} with ID: {} from collection {collection_name} with ID: {collection_id}",
                partition.id
            );
            Ok(())
        })
    }

    pub fn has_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<bool, CatalogError> {
        self.with_partitions(collection_name, |_, partitions| {
            Ok(partitions.read().contains(partition_name))
        })
    }

    /// Snapshot of the collection's partitions, ordered by ID.
    pub fn show_partitions(
        &self,
        collection_name: &str,
    ) -> Result<Vec<PartitionEntry>, CatalogError> {
        self.with_partitions(collection_name, |_, partitions| {
            Ok(partitions.read().entries())
        })
    }

    /// Runs `f` on the collection's partition index while the shared
    /// collection lock is held, so the collection cannot be dropped under it.
    fn with_partitions<T>(
        &self,
        collection_name: &str,
        f: impl FnOnce(UniqueId, &parking_lot::RwLock<PartitionIndex>) -> Result<T, CatalogError>,
    ) -> Result<T, CatalogError> {
        let collections = self.collections.read();
        let Some(collection) = collections.get_by_name(collection_name) else {
            return Err(CatalogError::CollectionNotExists(
                collection_name.to_owned(),
            ));
        };
        f(collection.id, &collection.partitions)
    }
}
