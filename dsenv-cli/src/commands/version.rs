//! `dsenv version` command - Display version information.

use dsenv_mysql::variables::CONNECTION_STRING_VARIABLES;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("dsenv");
    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);
    output::newline();

    eprintln!("Connection string variables:");
    for (i, variable) in CONNECTION_STRING_VARIABLES.iter().enumerate() {
        output::numbered_item(i + 1, variable);
    }
    output::newline();

    println!("{} {}", NAME, VERSION);
    Ok(())
}
