//! Batch loading of reagent files, one file per reaction component slot.

use std::path::PathBuf;

use tracing::debug;

use crate::core::reagent::Reagent;
use crate::core::settings::PriorSettings;
use crate::parsing::smi::{parse_reagent_file, ParseError};

/// Load the reagent files for every component slot of a reaction.
///
/// Element *i* of the result holds the records parsed from `paths[i]`, so the
/// output always has one entry per input path, in input order. Each file is
/// loaded independently; duplicate paths yield duplicate sequences and no
/// cross-file merging or deduplication takes place. `settings` and
/// `num_to_select` apply uniformly to every file.
///
/// Files are read sequentially. Loading stops at the first file that fails,
/// leaving later files unread.
///
/// # Errors
///
/// Propagates the first [`ParseError`] raised by
/// [`parse_reagent_file`], unchanged.
pub fn read_reagent_files(
    paths: &[PathBuf],
    settings: &PriorSettings,
    num_to_select: Option<usize>,
) -> Result<Vec<Vec<Reagent>>, ParseError> {
    let mut slots = Vec::with_capacity(paths.len());

    for path in paths {
        let reagents = parse_reagent_file(path, settings, num_to_select)?;
        debug!("loaded {} reagents from {}", reagents.len(), path.display());
        slots.push(reagents);
    }

    Ok(slots)
}
