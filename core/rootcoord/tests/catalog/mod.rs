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

mod allocation_scenario;
mod lifecycle_scenario;

use rootcoord::RootCoord;
use rootcoord::configs::RootCoordConfig;
use rootcoord_common::{CollectionSchema, DataType, FieldSchema};
use std::collections::BTreeMap;

pub(crate) const COLLECTION_NAME: &str = "test-collection";
pub(crate) const PARTITION_NAME: &str = "test-partition";
pub(crate) const THREADS_COUNT: usize = 8;

pub(crate) fn coordinator() -> RootCoord {
    let coordinator = RootCoord::new(&RootCoordConfig::default());
    coordinator.init().unwrap();
    coordinator.start().unwrap();
    coordinator
}

pub(crate) fn schema(name: &str) -> Vec<u8> {
    let mut type_params = BTreeMap::new();
    type_params.insert("dim".to_owned(), "8".to_owned());
    CollectionSchema {
        name: name.to_owned(),
        description: "test schema".to_owned(),
        auto_id: false,
        fields: vec![
            FieldSchema {
                field_id: 100,
                name: "id".to_owned(),
                is_primary_key: true,
                description: String::new(),
                data_type: DataType::Int64,
                type_params: BTreeMap::new(),
                auto_id: false,
            },
            FieldSchema {
                field_id: 101,
                name: "vector".to_owned(),
                is_primary_key: false,
                description: String::new(),
                data_type: DataType::FloatVector,
                type_params,
                auto_id: false,
            },
        ],
    }
    .encode()
}
