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

use crate::catalog::{COLLECTION_NAME, PARTITION_NAME, coordinator, schema};
use rootcoord_common::{CatalogError, ErrorCode, StateCode, Status};
use test_case::test_case;

#[test]
fn describe_should_return_created_collection() {
    let coord = coordinator();
    let id = coord
        .create_collection(COLLECTION_NAME, &schema(COLLECTION_NAME), 3)
        .unwrap();

    let info = coord.describe_collection(COLLECTION_NAME).unwrap();
    assert_eq!(info.id, id);
    assert_eq!(info.shards_num, 3);
    assert_eq!(info.virtual_channel_names.len(), 3);
    assert_eq!(info.physical_channel_names.len(), 3);
    assert_eq!(info.created_at, info.created_utc_at);
    assert_eq!(info.schema.fields.len(), 2);
}

#[test_case(0; "zero")]
#[test_case(-1; "negative")]
#[test_case(i32::MIN; "minimum")]
fn non_positive_shards_should_default_to_two(shards_num: i32) {
    let coord = coordinator();
    coord
        .create_collection(COLLECTION_NAME, &schema(COLLECTION_NAME), shards_num)
        .unwrap();

    let info = coord.describe_collection(COLLECTION_NAME).unwrap();
    assert_eq!(info.shards_num, 2);
    assert_eq!(info.virtual_channel_names.len(), 2);
    assert_eq!(info.physical_channel_names.len(), 2);
}

#[test]
fn malformed_schema_should_be_reported() {
    let coord = coordinator();
    let result = coord.create_collection(COLLECTION_NAME, &[0xff, 0x00, 0x13], 2);

    let status = Status::from(&result);
    assert_eq!(status.error_code, ErrorCode::InvalidSchema);
    assert!(status.reason.starts_with("failed to parse schema"));
    assert!(!coord.has_collection(COLLECTION_NAME));
}

#[test]
fn partition_requests_should_follow_collection_existence() {
    let coord = coordinator();
    assert_eq!(
        coord.create_partition("missing", "p1"),
        Err(CatalogError::CollectionNotExists("missing".to_owned()))
    );

    coord
        .create_collection(COLLECTION_NAME, &schema(COLLECTION_NAME), 2)
        .unwrap();
    coord.create_partition(COLLECTION_NAME, "p1").unwrap();
    assert_eq!(
        coord.create_partition(COLLECTION_NAME, "p1"),
        Err(CatalogError::PartitionAlreadyExists("p1".to_owned()))
    );
}

#[test]
fn dropping_collection_should_hide_its_partitions() {
    let coord = coordinator();
    coord
        .create_collection(COLLECTION_NAME, &schema(COLLECTION_NAME), 2)
        .unwrap();
    coord.create_partition(COLLECTION_NAME, PARTITION_NAME).unwrap();
    coord.create_partition(COLLECTION_NAME, "other").unwrap();

    coord.drop_collection(COLLECTION_NAME).unwrap();

    assert!(coord.show_collections().is_empty());
    assert!(matches!(
        coord.show_partitions(COLLECTION_NAME),
        Err(CatalogError::CollectionNotExists(_))
    ));
    assert!(matches!(
        coord.has_partition(COLLECTION_NAME, PARTITION_NAME),
        Err(CatalogError::CollectionNotExists(_))
    ));
}

#[test]
fn full_lifecycle_should_keep_catalog_consistent() {
    let coord = coordinator();
    assert_eq!(coord.get_state(), StateCode::Healthy);

    for name in ["a", "b", "c"] {
        coord.create_collection(name, &schema(name), 1).unwrap();
        coord.create_partition(name, PARTITION_NAME).unwrap();
    }
    coord.drop_partition("b", PARTITION_NAME).unwrap();
    coord.drop_collection("c").unwrap();

    let collections = coord.show_collections();
    let names: Vec<_> = collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    for collection in &collections {
        let info = coord.describe_collection(&collection.name).unwrap();
        assert_eq!(info.id, collection.id);
        assert_eq!(info.created_at, collection.created_at);
    }
    assert_eq!(coord.has_partition("a", PARTITION_NAME), Ok(true));
    assert_eq!(coord.has_partition("b", PARTITION_NAME), Ok(false));
    assert_eq!(
        coord.drop_partition("b", PARTITION_NAME),
        Err(CatalogError::PartitionNotExists(PARTITION_NAME.to_owned()))
    );

    coord.stop().unwrap();
    assert_eq!(coord.get_state(), StateCode::Abnormal);
}
