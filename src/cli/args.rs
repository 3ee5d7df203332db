/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// topocli — query topology objects from a remote topology service.
#[derive(Debug, Parser)]
#[command(
    name = "topocli",
    about = "Query entities, relations, and kinds from a topology service",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Topology service endpoint.
    #[arg(
        long,
        global = true,
        value_name = "HOST:PORT",
        env = "TOPO_ADDRESS",
        default_value = "127.0.0.1:5150"
    )]
    pub address: String,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_headers: bool,

    /// Verbose output: one aspect=value line under each row instead of the
    /// aspect-name summary column.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Raise the stderr log level to debug.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get a single entity by ID, or list all entities.
    #[command(visible_alias = "entities")]
    Entity(GetArgs),
    /// Get a single relation by ID, or list all relations.
    #[command(visible_alias = "relations")]
    Relation(GetArgs),
    /// Get a single kind by ID, or list all kinds.
    #[command(visible_alias = "kinds")]
    Kind(GetArgs),
}

/// Arguments shared by the three get subcommands.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Object identifier. Omit to list every object of the subcommand's type.
    pub id: Option<String>,
}
