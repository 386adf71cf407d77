//! Fuzz target for delimited parsing and column profiling.
//!
//! Arbitrary bytes must never make the parser or the analyzers panic.

#![no_main]

use colscope::{Parser, ReportAssembler};
use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::with_suffix(".csv") {
        if temp_file.write_all(data).is_ok() {
            if let Ok((dataset, _)) = Parser::new().parse_file(temp_file.path()) {
                let _ = ReportAssembler::new().with_parallel(false).assemble(&dataset);
            }
        }
    }
});
