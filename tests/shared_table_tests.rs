// SPDX-License-Identifier: PMPL-1.0-or-later

//! First access to the shared table from many threads at once
//!
//! Kept in its own test binary so nothing else touches the shared table
//! before these threads do.

use iso_lang_finder::iso639::{resolve_language, shared_table};
use std::sync::Barrier;

#[test]
fn test_concurrent_first_access() {
    let queries = ["fr", "fre", "fra", "French", "de", "eng", "nonexisting", "zh"];
    let barrier = Barrier::new(queries.len());

    let results: Vec<(String, usize)> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let id = resolve_language(query).expect("shared table").id.clone();
                    let table = shared_table().expect("shared table") as *const _ as usize;
                    (id, table)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("lookup thread"))
            .collect()
    });

    let ids: Vec<&str> = results.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["fra", "fra", "fra", "fra", "deu", "eng", "und", "zho"]);

    let first_table = results[0].1;
    assert!(
        results.iter().all(|(_, table)| *table == first_table),
        "every thread should see the same table instance"
    );
}
