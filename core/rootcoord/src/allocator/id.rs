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

use rootcoord_common::{CatalogError, IdRange, UniqueId};
use std::sync::atomic::{AtomicI64, Ordering};

const DEFAULT_SEED: UniqueId = 1;

/// Monotonic source of unique IDs.
///
/// A single atomically advanced counter: every returned ID or range is
/// strictly above everything handed out before it and never rewinds.
#[derive(Debug)]
pub struct IdAllocator {
    next_id: AtomicI64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(DEFAULT_SEED)
    }

    pub fn starting_at(seed: UniqueId) -> Self {
        Self {
            next_id: AtomicI64::new(seed),
        }
    }

    #[inline]
    pub fn next_id(&self) -> UniqueId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Reserves `count` consecutive IDs. A zero count is rejected rather than
    /// answered with an empty range that would alias the next caller's ID.
    pub fn next_id_range(&self, count: u32) -> Result<IdRange, CatalogError> {
        if count == 0 {
            return Err(CatalogError::InvalidIdCount(count));
        }
        let id = self
            .next_id
            .fetch_add(UniqueId::from(count), Ordering::Relaxed);
        Ok(IdRange { id, count })
    }

    /// The ID the next call to [`IdAllocator::next_id`] would return.
    pub fn peek(&self) -> UniqueId {
        self.next_id.load(Ordering::Relaxed)
    }
}
