//! Record decoders and the section orchestrator.
//!
//! Sections are read strictly in stream order; each record decoder consumes
//! exactly its own bytes and leaves the cursor at the next record.

pub mod batch;
pub mod config;
pub mod faction;
pub mod header;
pub mod overlay;
pub mod patrol_path;
pub mod save;
pub mod sector;
pub mod unit;

#[cfg(test)]
pub(crate) mod fixtures;

pub use batch::decode_batch;
pub use config::{DecodeConfig, DecoderBuilder, UnknownUnitPolicy};
pub use overlay::{MergeOutcome, OverlayRecord, OverlaySection, UnitIndex, UnitOverlay};
pub use save::SaveDecoder;
pub use unit::{is_projectile_class, PROJECTILE_CLASS_IDS};

use crate::codec::BinaryReader;
use crate::error::Result;
use crate::lookup::ClassMappings;
use crate::state::Save;

/// Decode one save with the default configuration
pub fn decode_save(data: &[u8], mappings: &ClassMappings) -> Result<Save> {
    DecoderBuilder::new(mappings).decode(data)
}

/// Upper bound on records reserved up front by [`read_list`]
const PREALLOC_LIMIT: usize = 1024;

/// Read a count-prefixed list of records.
///
/// The count is untrusted: at most [`PREALLOC_LIMIT`] records are reserved
/// and the list grows from there, so a corrupt count runs into
/// `TruncatedData` instead of a huge allocation.
pub(crate) fn read_list<'a, T>(
    reader: &mut BinaryReader<'a>,
    section: &'static str,
    mut read_one: impl FnMut(&mut BinaryReader<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    let count = reader.read_count(section)?;
    let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        items.push(read_one(reader)?);
    }
    Ok(items)
}
