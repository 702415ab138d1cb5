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

use rootcoord_common::StateCode;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

/// Lifecycle phase of the coordinator, readable from any thread without
/// touching the catalog locks.
#[derive(Debug)]
pub struct ComponentState {
    code: AtomicU8,
}

impl Default for ComponentState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentState {
    pub fn new() -> Self {
        Self {
            code: AtomicU8::new(StateCode::Initializing.as_u8()),
        }
    }

    pub fn init(&self) {
        self.update(StateCode::Initializing);
    }

    pub fn start(&self) {
        self.update(StateCode::Healthy);
    }

    pub fn stop(&self) {
        self.update(StateCode::Abnormal);
    }

    pub fn get(&self) -> StateCode {
        // Only valid codes are ever stored.
        StateCode::from_repr(self.code.load(Ordering::Acquire)).unwrap_or(StateCode::Abnormal)
    }

    fn update(&self, state: StateCode) {
        let previous = self.code.swap(state.as_u8(), Ordering::AcqRel);
        if previous != state.as_u8() {
            info!(
                "Component state changed from {} to {state}",
                StateCode::from_repr(previous).unwrap_or(StateCode::Abnormal)
            );
        }
    }
}
