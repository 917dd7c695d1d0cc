//! Fuzz target for TOML file layers.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_toml_layer
//! ```

#![no_main]

use dsenv_config::PropertySource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The loader should never panic, only return errors
        let _ = PropertySource::from_toml_str("fuzz", input);
    }
});
