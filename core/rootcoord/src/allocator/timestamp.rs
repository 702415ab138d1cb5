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

use parking_lot::Mutex;
use rootcoord_common::{Clock, SystemClock, Timestamp, TimestampRange};

/// Issues logical timestamps seeded from wall-clock nanoseconds.
///
/// Each call to [`TimestampAllocator::allocate`] reserves `count` ticks ending
/// at the returned timestamp. Calls are serialized on `last_issued`, so the
/// reserved spans never overlap and are ordered by lock acquisition.
#[derive(Debug)]
pub struct TimestampAllocator<C: Clock = SystemClock> {
    clock: C,
    last_issued: Mutex<Timestamp>,
}

impl Default for TimestampAllocator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampAllocator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> TimestampAllocator<C> {
    pub fn with_clock(clock: C) -> Self {
        let last_issued = clock.realtime().as_nanos();
        Self {
            clock,
            last_issued: Mutex::new(last_issued),
        }
    }

    /// Returns a timestamp that is at least the current wall-clock time and at
    /// least `count` ticks past the previously issued one.
    ///
    /// `count == 0` still serializes with other callers but may hand back the
    /// previous timestamp unchanged.
    pub fn allocate(&self, count: u32) -> TimestampRange {
        let mut last_issued = self.last_issued.lock();
        let floor = last_issued.saturating_add(Timestamp::from(count));
        let timestamp = self.clock.realtime().as_nanos().max(floor);
        *last_issued = timestamp;
        TimestampRange { timestamp, count }
    }

    pub fn last_issued(&self) -> Timestamp {
        *self.last_issued.lock()
    }
}
