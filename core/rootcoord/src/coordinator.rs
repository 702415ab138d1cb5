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

use crate::allocator::{IdAllocator, TimestampAllocator};
use crate::catalog::Catalog;
use crate::component::ComponentState;
use crate::configs::RootCoordConfig;
use rootcoord_common::text::random_token;
use rootcoord_common::{
    CatalogError, Clock, CollectionEntry, CollectionInfo, ComponentInfo, ComponentStates, IdRange,
    PartitionEntry, ROOT_COORD_ROLE, StateCode, Status, SystemClock, TimestampRange, UniqueId,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Root coordinator: the entry point for every catalog, allocation and health
/// request.
///
/// The catalog, the two allocators and the state cell each synchronize on
/// their own, so a slow catalog writer never delays timestamp or ID issuance.
#[derive(Debug)]
pub struct RootCoord<C: Clock = SystemClock> {
    node_id: UniqueId,
    address: String,
    statistics_channel: String,
    time_tick_channel: String,
    state: ComponentState,
    ids: Arc<IdAllocator>,
    tso: TimestampAllocator<C>,
    catalog: Catalog,
}

impl RootCoord<SystemClock> {
    pub fn new(config: &RootCoordConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> RootCoord<C> {
    pub fn with_clock(config: &RootCoordConfig, clock: C) -> Self {
        let ids = Arc::new(IdAllocator::new());
        let node_id = if config.node_id > 0 {
            config.node_id
        } else {
            ids.next_id()
        };

        Self {
            node_id,
            address: or_random(&config.address),
            statistics_channel: or_random(&config.statistics_channel),
            time_tick_channel: or_random(&config.time_tick_channel),
            state: ComponentState::new(),
            catalog: Catalog::with_default_shards_num(
                ids.clone(),
                config.catalog.default_shards_num,
            ),
            ids,
            tso: TimestampAllocator::with_clock(clock),
        }
    }

    pub fn node_id(&self) -> UniqueId {
        self.node_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn init(&self) -> Result<(), CatalogError> {
        self.state.init();
        Ok(())
    }

    pub fn start(&self) -> Result<(), CatalogError> {
        info!(
            "Starting root coordinator, node ID: {}, address: {}",
            self.node_id, self.address
        );
        self.state.start();
        Ok(())
    }

    pub fn stop(&self) -> Result<(), CatalogError> {
        info!("Stopping root coordinator, node ID: {}", self.node_id);
        self.state.stop();
        Ok(())
    }

    pub fn register(&self) -> Result<(), CatalogError> {
        debug!("Registered root coordinator, node ID: {}", self.node_id);
        Ok(())
    }

    pub fn get_state(&self) -> StateCode {
        self.state.get()
    }

    pub fn get_component_states(&self) -> ComponentStates {
        ComponentStates {
            state: ComponentInfo {
                node_id: self.node_id,
                role: ROOT_COORD_ROLE.to_owned(),
                state_code: self.state.get(),
            },
            status: Status::success(),
        }
    }

    pub fn get_statistics_channel(&self) -> &str {
        &self.statistics_channel
    }

    pub fn get_time_tick_channel(&self) -> &str {
        &self.time_tick_channel
    }

    pub fn create_collection(
        &self,
        name: &str,
        encoded_schema: &[u8],
        shards_num: i32,
    ) -> Result<UniqueId, CatalogError> {
        self.catalog
            .create_collection(name, encoded_schema, shards_num)
    }

    pub fn drop_collection(&self, name: &str) -> Result<(), CatalogError> {
        self.catalog.drop_collection(name)
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.catalog.has_collection(name)
    }

    pub fn describe_collection(&self, name: &str) -> Result<CollectionInfo, CatalogError> {
        self.catalog.describe_collection(name)
    }

    pub fn show_collections(&self) -> Vec<CollectionEntry> {
        self.catalog.show_collections()
    }

    pub fn create_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<UniqueId, CatalogError> {
        self.catalog
            .create_partition(collection_name, partition_name)
    }

    pub fn drop_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<(), CatalogError> {
        self.catalog.drop_partition(collection_name, partition_name)
    }

    pub fn has_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<bool, CatalogError> {
        self.catalog.has_partition(collection_name, partition_name)
    }

    pub fn show_partitions(
        &self,
        collection_name: &str,
    ) -> Result<Vec<PartitionEntry>, CatalogError> {
        self.catalog.show_partitions(collection_name)
    }

    pub fn alloc_timestamp(&self, count: u32) -> TimestampRange {
        self.tso.allocate(count)
    }

    pub fn alloc_id(&self, count: u32) -> Result<IdRange, CatalogError> {
        self.ids.next_id_range(count)
    }
}

fn or_random(value: &str) -> String {
    if value.is_empty() {
        random_token()
    } else {
        value.to_owned()
    }
}
