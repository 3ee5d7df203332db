/// `entity`/`relation`/`kind` command: get one object by ID or list all
/// objects of the requested type.
use std::io::{self, Write};

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::args::GetArgs;
use crate::cli::output::{write_header, write_object};
use crate::topo::{Id, Object, ObjectType, TopoError, get_object, list_objects};

/// Run one of the get subcommands with `object_type` as the row filter.
///
/// The header block is written before the remote call, so a failed lookup
/// still shows it. A failed list is not an error: it degrades to no rows. A
/// failed lookup by ID is.
///
/// # Errors
///
/// Returns `TopoError` when the lookup-by-ID path fails (connection, remote
/// error, timeout) or when stdout cannot be written.
pub async fn run(
    args: &GetArgs,
    object_type: ObjectType,
    ctx: &OutputCtx,
) -> Result<(), TopoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !ctx.no_headers {
        write_header(&mut out, object_type, ctx.verbose)?;
    }

    match &args.id {
        None => match list_objects(&ctx.address).await {
            Ok(objects) => render_matching(&mut out, &objects, object_type, ctx.verbose)?,
            Err(err) => debug!("list failed, printing no rows: {err}"),
        },
        Some(id) => {
            let id = Id::new(id.as_str());
            let object = get_object(&ctx.address, &id).await?;
            if object.object_type() == object_type {
                write_object(&mut out, &object, ctx.verbose)?;
            }
        }
    }

    Ok(())
}

/// Write the rows for objects whose type tag matches `object_type`, keeping
/// their original relative order. Non-matching objects are skipped.
fn render_matching<W: Write>(
    out: &mut W,
    objects: &[Object],
    object_type: ObjectType,
    verbose: bool,
) -> io::Result<()> {
    for object in objects {
        if object.object_type() == object_type {
            write_object(out, object, verbose)?;
        }
    }
    Ok(())
}
