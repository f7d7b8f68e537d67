//! Output formatting helpers for the CLI.

use std::path::Path;

use kvgate_core::{HostKind, StorageMethod};

/// JSON form of a `get` result. An absent value is `null`.
pub fn value_json(key: &str, method: StorageMethod, value: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "key": key,
        "method": method,
        "value": value,
    })
}

/// JSON form of the `host` report.
pub fn host_json(
    kind: HostKind,
    os_name: &str,
    methods: &[StorageMethod],
    store_path: &Path,
) -> serde_json::Value {
    serde_json::json!({
        "host": kind,
        "os": os_name,
        "methods": methods,
        "store": store_path.to_string_lossy(),
    })
}

/// Print a stored value. Quiet mode prints the bare value for scripting.
pub fn print_value(key: &str, method: StorageMethod, value: &str, quiet: bool) {
    if !quiet {
        println!("Key: {}", key);
        println!("Method: {}", method);
        println!();
    }
    println!("{}", value);
}
