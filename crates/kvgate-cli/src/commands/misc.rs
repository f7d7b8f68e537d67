use clap::CommandFactory;
use clap_complete::generate;

use kvgate_core::StorageMethod;

use crate::app::{open_host, resolve_store_path};
use crate::cli::{Cli, HostArgs};
use crate::output::host_json;

pub fn handle_host(cli: &Cli, args: &HostArgs) -> anyhow::Result<()> {
    let host = open_host(cli)?;
    let kind = host.kind();
    let methods = StorageMethod::supported_by(kind);
    let store_path = resolve_store_path(cli)?;

    if args.json {
        let value = host_json(kind, host.os_name(), &methods, &store_path);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let names: Vec<&str> = methods.iter().map(StorageMethod::as_str).collect();
    println!("Host: {}", kind);
    println!("OS: {}", host.os_name());
    println!("Methods: {}", names.join(", "));
    if !cli.quiet {
        println!("Store: {}", store_path.display());
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "kvgate", &mut std::io::stdout());
    Ok(())
}
