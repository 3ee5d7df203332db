/// Fixed-width table output: column writer, header and row formatting,
/// aspect rendering. Data rows go to the given sink; errors go to stderr.
use std::error::Error;
use std::io::{self, Write};

use crate::topo::{Object, ObjectType, TopoError};

/// Column width shared by header and row layouts.
const WIDTH: usize = 16;

/// Output context passed to all commands.
pub struct OutputCtx {
    /// Service endpoint, `host:port`.
    pub address: String,
    pub no_headers: bool,
    pub verbose: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(address: impl Into<String>, no_headers: bool, verbose: bool) -> Self {
        Self {
            address: address.into(),
            no_headers,
            verbose,
        }
    }
}

// --- Column writer ---

/// Write one left-justified column: padded to `width`, content truncated to
/// `width - 1` characters.
fn write_column<W: Write>(out: &mut W, width: usize, content: &str) -> io::Result<()> {
    let precision = width.saturating_sub(1);
    write!(out, "{content:<width$.precision$}")
}

// --- Header formatting ---

/// Write the header block for `object_type`: two physical lines, the shared
/// type+ID columns first, the type-specific columns below. Non-verbose mode
/// appends a trailing `Aspects` column header.
///
/// # Errors
///
/// Propagates sink write failures.
pub fn write_header<W: Write>(
    out: &mut W,
    object_type: ObjectType,
    verbose: bool,
) -> io::Result<()> {
    match object_type {
        ObjectType::Entity => {
            write_column(out, WIDTH, "Object Type")?;
            write_column(out, WIDTH, "Entity ID")?;
            writeln!(out)?;
            write_column(out, WIDTH, "Kind ID")?;
        }
        ObjectType::Relation => {
            write_column(out, WIDTH, "Object Type")?;
            write_column(out, WIDTH, "Relation ID")?;
            writeln!(out)?;
            write_column(out, WIDTH, "Kind ID")?;
            write_column(out, WIDTH, "Source ID")?;
            write_column(out, WIDTH, "Target ID")?;
        }
        ObjectType::Kind => {
            write_column(out, WIDTH, "Object Type")?;
            write_column(out, WIDTH, "Kind ID")?;
            writeln!(out)?;
            write_column(out, WIDTH, "Name")?;
        }
        ObjectType::Unspecified => return Ok(()),
    }
    if verbose {
        writeln!(out)
    } else {
        writeln!(out, "\tAspects")
    }
}

// --- Row formatting ---

/// Write one object as a fixed-width row followed by its aspect content.
/// Column order mirrors the header for the object's own type tag; objects of
/// a type this client does not know degrade to a bare newline.
///
/// # Errors
///
/// Propagates sink write failures.
pub fn write_object<W: Write>(out: &mut W, object: &Object, verbose: bool) -> io::Result<()> {
    let tag = object.object_type().to_string();
    match object.object_type() {
        ObjectType::Entity => {
            write_column(out, WIDTH, &tag)?;
            write_column(out, WIDTH, object.id.as_str())?;
            write_column(out, WIDTH, object.kind_id())?;
            write_aspects(out, object, verbose)
        }
        ObjectType::Relation => {
            write_column(out, WIDTH, &tag)?;
            write_column(out, WIDTH, object.id.as_str())?;
            write_column(out, WIDTH, object.kind_id())?;
            write_column(out, WIDTH, object.src_entity_id())?;
            write_column(out, WIDTH, object.tgt_entity_id())?;
            write_aspects(out, object, verbose)
        }
        ObjectType::Kind => {
            write_column(out, WIDTH, &tag)?;
            write_column(out, WIDTH, object.id.as_str())?;
            write_column(out, WIDTH, object.name())?;
            write_aspects(out, object, verbose)
        }
        ObjectType::Unspecified => writeln!(out),
    }
}

// --- Aspect rendering ---

/// Write the trailing aspect content for one row. Verbose: terminate the row,
/// then one `\t<type>=<value>` line per aspect. Non-verbose: a single
/// tab-separated column of comma-joined aspect-type names. Aspect map
/// iteration order is unspecified in both modes.
fn write_aspects<W: Write>(out: &mut W, object: &Object, verbose: bool) -> io::Result<()> {
    if verbose {
        writeln!(out)?;
        for (aspect_type, payload) in &object.aspects {
            writeln!(out, "\t{aspect_type}={}", String::from_utf8_lossy(payload))?;
        }
        Ok(())
    } else {
        writeln!(out, "\t{}", aspect_list(object))
    }
}

/// Comma-joined aspect-type names; the empty string when the object has none.
fn aspect_list(object: &Object) -> String {
    object
        .aspects
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

// --- Error output ---

/// Write an error and its source chain to stderr.
pub fn write_error(err: &TopoError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "  Caused by: {cause}");
        source = cause.source();
    }
}
