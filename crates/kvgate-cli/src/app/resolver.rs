//! Path and method resolution for CLI invocations.

use std::path::PathBuf;

use kvgate_core::{Host, HostConfig, StorageMethod};

use crate::cli::{Cli, MethodArg};
use crate::config::{default_config_path, default_store_path, read_config, KvgateConfig};

/// Resolve the config file path from `--config`/`KVGATE_CONFIG` or the XDG default.
fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_config_path()
}

/// Load the config file. A missing file means defaults.
fn load_config(cli: &Cli) -> anyhow::Result<KvgateConfig> {
    let path = resolve_config_path(cli)?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(KvgateConfig::default());
    }
    read_config(&path)
}

/// Resolve the persistent store path: flag/env, then config, then XDG default.
pub fn resolve_store_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.clone() {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = load_config(cli)?.storage.path {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}

/// Resolve the storage method: `--method`, then config default, then `persistent`.
///
/// Unknown names fail with `KvError::InvalidMethod`.
pub fn resolve_method(cli: &Cli, arg: &MethodArg) -> anyhow::Result<StorageMethod> {
    if let Some(name) = arg.method.as_deref() {
        return Ok(name.parse::<StorageMethod>()?);
    }
    match load_config(cli)?.storage.default_method {
        Some(name) => Ok(name.parse::<StorageMethod>()?),
        None => Ok(StorageMethod::default()),
    }
}

/// Build the capability handle for this process.
pub fn open_host(cli: &Cli) -> anyhow::Result<Host> {
    let store_path = resolve_store_path(cli)?;
    tracing::debug!(store = %store_path.display(), "opening host");
    Ok(Host::detect(&HostConfig::new(store_path))?)
}
