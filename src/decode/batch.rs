use rayon::prelude::*;
use tracing::debug;

use crate::decode::config::{DecodeConfig, DecoderBuilder};
use crate::error::Result;
use crate::lookup::ClassMappings;
use crate::state::Save;

/// Decode independent save buffers in parallel.
///
/// Results come back in input order; one failing buffer does not affect the
/// others.
pub fn decode_batch(
    buffers: &[&[u8]],
    mappings: &ClassMappings,
    config: DecodeConfig,
) -> Vec<Result<Save>> {
    debug!(count = buffers.len(), "decoding batch");
    buffers
        .par_iter()
        .map(|data| DecoderBuilder::new(mappings).config(config).decode(data))
        .collect()
}
