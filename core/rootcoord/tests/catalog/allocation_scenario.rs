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

use crate::catalog::{THREADS_COUNT, coordinator};
use rootcoord::allocator::{IdAllocator, TimestampAllocator};
use std::collections::BTreeSet;
use std::sync::Barrier;
use std::thread;

const ALLOCATIONS_PER_THREAD: usize = 500;

#[test]
fn consecutive_timestamp_allocations_should_reserve_count() {
    let coord = coordinator();
    let first = coord.alloc_timestamp(5);
    let second = coord.alloc_timestamp(5);

    assert!(first.timestamp < second.timestamp);
    assert!(second.timestamp >= first.timestamp + 5);
}

#[test]
fn concurrent_ids_should_be_unique() {
    let ids = IdAllocator::new();
    let barrier = Barrier::new(THREADS_COUNT);

    let allocated: Vec<Vec<i64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS_COUNT)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    (0..ALLOCATIONS_PER_THREAD)
                        .map(|_| ids.next_id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut unique = BTreeSet::new();
    for batch in &allocated {
        assert!(batch.windows(2).all(|w| w[0] < w[1]));
        for id in batch {
            assert!(unique.insert(*id), "ID {id} was issued twice");
        }
    }
    assert_eq!(unique.len(), THREADS_COUNT * ALLOCATIONS_PER_THREAD);
}

#[test]
fn concurrent_id_ranges_should_not_overlap() {
    let coord = coordinator();
    let barrier = Barrier::new(THREADS_COUNT);

    let mut ranges: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS_COUNT)
            .map(|thread_idx| {
                let coord = &coord;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    (0..ALLOCATIONS_PER_THREAD)
                        .map(|i| coord.alloc_id(((thread_idx + i) % 7 + 1) as u32).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    ranges.sort_by_key(|range| range.id);
    for pair in ranges.windows(2) {
        assert!(
            pair[0].end() <= pair[1].id,
            "ranges {:?} and {:?} overlap",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn concurrent_timestamps_should_reserve_disjoint_spans() {
    let tso = TimestampAllocator::new();
    let barrier = Barrier::new(THREADS_COUNT);

    let per_thread: Vec<Vec<(u64, u32)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS_COUNT)
            .map(|thread_idx| {
                let tso = &tso;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    (0..ALLOCATIONS_PER_THREAD)
                        .map(|i| {
                            let count = ((thread_idx * 3 + i) % 10 + 1) as u32;
                            let range = tso.allocate(count);
                            (range.timestamp, range.count)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for batch in &per_thread {
        assert!(batch.windows(2).all(|w| w[0].0 < w[1].0));
    }

    let mut all: Vec<_> = per_thread.into_iter().flatten().collect();
    all.sort_unstable();
    for pair in all.windows(2) {
        let (previous, _) = pair[0];
        let (timestamp, count) = pair[1];
        assert!(
            timestamp >= previous + u64::from(count),
            "span ending at {timestamp} with count {count} overlaps {previous}"
        );
    }
    assert_eq!(tso.last_issued(), all.last().map(|(ts, _)| *ts).unwrap());
}
