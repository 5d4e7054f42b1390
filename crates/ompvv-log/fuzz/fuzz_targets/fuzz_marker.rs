// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for marker decoding
//!
//! Arbitrary text is prefixed with the sentinel so every input reaches the
//! field splitting and positional decoding.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ompvv_log::marker::{SENTINEL, parse_marker};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Should return Ok or Err, never panic
        let _ = parse_marker(&format!("{SENTINEL}{input}"));
        let _ = parse_marker(input);
    }
});
