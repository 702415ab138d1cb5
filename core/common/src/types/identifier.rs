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

/// Identifier of a collection, partition or node, unique for the lifetime of
/// the generator that minted it.
pub type UniqueId = i64;

/// Logical timestamp issued by the timestamp allocator.
pub type Timestamp = u64;

/// Role name the coordinator reports in its component states.
pub const ROOT_COORD_ROLE: &str = "RootCoord";
