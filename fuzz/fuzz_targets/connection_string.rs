//! Fuzz target for the connection-string parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_string
//! ```

#![no_main]

use dsenv_mysql::try_parse_connection_string;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Rejections are fine, panics are not
        if let Ok(descriptor) = try_parse_connection_string(input, "MYSQL_URL") {
            assert!(descriptor.url().starts_with("jdbc:mysql://"));
            assert!(!descriptor.host().trim().is_empty());
            assert!(descriptor.port() > 0);
        }
    }
});
