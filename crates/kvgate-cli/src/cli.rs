use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use kvgate_core::VERSION;

/// kvgate - Read, write, and clear named values in the host's storage
#[derive(Parser)]
#[command(name = "kvgate")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the persistent store file
    #[arg(short, long, global = true, env = "KVGATE_STORE")]
    pub store: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "KVGATE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Storage method selection shared by the storage commands
#[derive(Args)]
pub struct MethodArg {
    /// Storage method: ephemeral, persistent, or cookie (default: persistent)
    ///
    /// Ephemeral values only live for the current process.
    #[arg(short, long, value_name = "METHOD")]
    pub method: Option<String>,
}

/// Arguments for the `get` command
#[derive(Args)]
pub struct GetArgs {
    /// Key to read
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub method: MethodArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command
#[derive(Args)]
pub struct SetArgs {
    /// Key to write
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Value to store
    #[arg(value_name = "VALUE")]
    pub value: String,

    #[command(flatten)]
    pub method: MethodArg,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Key to remove
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub method: MethodArg,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    #[command(flatten)]
    pub method: MethodArg,
}

/// Arguments for the `host` command
#[derive(Args)]
pub struct HostArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the value stored under a key
    Get(GetArgs),

    /// Store a value under a key
    #[command(alias = "put")]
    Set(SetArgs),

    /// Remove a key
    Remove(RemoveArgs),

    /// Remove every value stored through a method
    Clear(ClearArgs),

    /// Show the detected host and its storage methods
    Host(HostArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
