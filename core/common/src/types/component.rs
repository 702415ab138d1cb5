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
use crate::types::status::Status;
use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr};

/// Lifecycle phase of the coordinator itself.
#[derive(
    Clone, Copy, Debug, Default, Display, FromRepr, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum StateCode {
    #[default]
    Initializing = 0,
    Healthy = 1,
    Abnormal = 2,
}

impl StateCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub node_id: UniqueId,
    pub role: String,
    pub state_code: StateCode,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStates {
    pub state: ComponentInfo,
    pub status: Status,
}
