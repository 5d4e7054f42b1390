// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the log reconstructor
//!
//! Feeds raw bytes through `parse_reader`, which also exercises the lossy
//! decoding of non-UTF-8 log content.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ompvv_log::parse_reader;

fuzz_target!(|data: &[u8]| {
    if let Ok(results) = parse_reader(data) {
        for result in results {
            // A failed compilation is emitted before any run can attach
            assert!(!result.compile_failed() || result.runtime_result.is_none());
        }
    }
});
