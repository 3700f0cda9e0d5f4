#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Neither plain parsing nor unknown-key collection may panic
        let _ = toml::from_str::<shipit::Config>(content);
        let _ = shipit::config::parse_with_warnings(content, Path::new("shipit.toml"));
    }
});
