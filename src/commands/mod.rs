/// Command dispatch: routes each object subcommand to the shared get handler.
pub mod get;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::topo::{ObjectType, TopoError};

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `TopoError` on any command failure.
pub async fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), TopoError> {
    match command {
        Command::Entity(args) => get::run(args, ObjectType::Entity, ctx).await,
        Command::Relation(args) => get::run(args, ObjectType::Relation, ctx).await,
        Command::Kind(args) => get::run(args, ObjectType::Kind, ctx).await,
    }
}
