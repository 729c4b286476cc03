//! Assembly of the final artifact from completed segment files.
//!
//! Segment files are appended strictly by ascending index into a uniquely
//! named `.<filename>.XXXXXX.part` staging file. The staging file lives next
//! to the destination so the final rename never crosses filesystems, and it
//! belongs to a single assembly, so downloads racing for the same destination
//! never write into each other's bytes. The destination only appears once
//! every byte has been written and flushed.

use crate::error::{Error, Result};
use crate::segment::Segment;
use crate::workspace::Workspace;

use std::path::Path;
use tokio::{
    fs::File,
    io::{self, AsyncWriteExt},
};
use tracing::debug;

fn staging_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Concatenate the segment files of `workspace` into `destination`.
///
/// `segments` must be the plan the workspace was filled from. Returns the
/// number of bytes written. Unless `overwrite` is set, an existing
/// destination, including one that appeared while assembling, is never
/// replaced. Any failure is reported as [`Error::Storage`] and leaves the
/// destination untouched.
pub async fn assemble(
    segments: &[Segment],
    workspace: &Workspace,
    destination: &Path,
    overwrite: bool,
) -> Result<u64> {
    let dir = staging_dir(destination);
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    // The staging path removes its file when dropped, which covers every
    // early return and cancellation.
    let (file, part) = tempfile::Builder::new()
        .prefix(&format!(".{}.", name))
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| Error::storage(dir, e))?
        .into_parts();
    let mut out = File::from_std(file);
    debug!("Assembling into {:?}", part);

    let mut ordered: Vec<&Segment> = segments.iter().collect();
    ordered.sort_by_key(|s| s.index);

    let mut written = 0u64;
    for segment in ordered {
        let source = workspace.segment_path(segment.index);
        let mut input = File::open(&source)
            .await
            .map_err(|e| Error::storage(&source, e))?;
        let copied = io::copy(&mut input, &mut out)
            .await
            .map_err(|e| Error::storage(&*part, e))?;
        debug!("Appended segment {} ({} bytes)", segment, copied);
        written += copied;
    }

    out.flush().await.map_err(|e| Error::storage(&*part, e))?;
    out.sync_all().await.map_err(|e| Error::storage(&*part, e))?;
    drop(out);

    let persisted = if overwrite {
        part.persist(destination)
    } else {
        part.persist_noclobber(destination)
    };
    persisted.map_err(|e| Error::storage(destination, e.error))?;

    debug!("Assembled {:?} ({} bytes)", destination, written);
    Ok(written)
}
