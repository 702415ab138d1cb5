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

//! Shared vocabulary of the root coordinator.
//!
//! Everything a caller needs to talk to the coordinator without depending on
//! its internals: identifier and timestamp types, the error taxonomy and its
//! wire-level status codes, component states and the collection schema model.

pub mod error;
pub mod types;
pub mod utils;

pub use error::catalog_error::CatalogError;
pub use types::catalog::*;
pub use types::component::*;
pub use types::identifier::*;
pub use types::schema::*;
pub use types::status::*;
pub use utils::clock::{Clock, SystemClock};
pub use utils::text;
pub use utils::timestamp::UtcTimestamp;
