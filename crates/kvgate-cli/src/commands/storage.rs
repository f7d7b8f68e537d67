//! Storage subcommands: get, set, remove, clear.

use kvgate_core::Storage;

use crate::app::{open_host, resolve_method};
use crate::cli::{ClearArgs, Cli, GetArgs, RemoveArgs, SetArgs};
use crate::errors::CliError;
use crate::output::{print_value, value_json};

pub fn handle_get(cli: &Cli, args: &GetArgs) -> anyhow::Result<()> {
    let method = resolve_method(cli, &args.method)?;
    let mut host = open_host(cli)?;
    let storage = Storage::new(&mut host);

    let value = storage.get(method, &args.key)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&value_json(&args.key, method, value.as_deref()))?
        );
        return Ok(());
    }

    match value {
        Some(value) => {
            print_value(&args.key, method, &value, cli.quiet);
            Ok(())
        }
        None => Err(CliError::not_found(
            format!("No value stored for \"{}\" ({})", args.key, method),
            "Hint: Run `kvgate set <KEY> <VALUE>` to store one.",
        )
        .into()),
    }
}

pub fn handle_set(cli: &Cli, args: &SetArgs) -> anyhow::Result<()> {
    let method = resolve_method(cli, &args.method)?;
    let mut host = open_host(cli)?;
    let mut storage = Storage::new(&mut host);

    storage.set(method, &args.key, &args.value)?;
    if !cli.quiet {
        println!("Stored \"{}\" ({})", args.key, method);
    }
    Ok(())
}

pub fn handle_remove(cli: &Cli, args: &RemoveArgs) -> anyhow::Result<()> {
    let method = resolve_method(cli, &args.method)?;
    let mut host = open_host(cli)?;
    let mut storage = Storage::new(&mut host);

    storage.remove(method, &args.key)?;
    if !cli.quiet {
        println!("Removed \"{}\" ({})", args.key, method);
    }
    Ok(())
}

pub fn handle_clear(cli: &Cli, args: &ClearArgs) -> anyhow::Result<()> {
    let method = resolve_method(cli, &args.method)?;
    let mut host = open_host(cli)?;
    let mut storage = Storage::new(&mut host);

    storage.clear(method)?;
    if !cli.quiet {
        println!("Cleared {} storage", method);
    }
    Ok(())
}
