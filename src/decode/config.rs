use crate::decode::save::SaveDecoder;
use crate::error::Result;
use crate::lookup::ClassMappings;
use crate::state::Save;

/// What to do with an overlay record whose unit id has no primary unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownUnitPolicy {
    /// Log a warning and drop the record
    #[default]
    Skip,
    /// Abort the decode with `UnknownUnitReference`
    Reject,
}

/// Decoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    pub unknown_units: UnknownUnitPolicy,
    /// Fail with `TrailingData` unless the whole buffer was consumed
    pub require_exhausted: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            unknown_units: UnknownUnitPolicy::Skip,
            require_exhausted: true,
        }
    }
}

/// Builder for decoding a save buffer
pub struct DecoderBuilder<'m> {
    mappings: &'m ClassMappings,
    config: DecodeConfig,
}

impl<'m> DecoderBuilder<'m> {
    pub fn new(mappings: &'m ClassMappings) -> Self {
        Self {
            mappings,
            config: DecodeConfig::default(),
        }
    }

    pub fn config(mut self, config: DecodeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn unknown_units(mut self, policy: UnknownUnitPolicy) -> Self {
        self.config.unknown_units = policy;
        self
    }

    pub fn require_exhausted(mut self, require: bool) -> Self {
        self.config.require_exhausted = require;
        self
    }

    pub fn build<'a>(self, data: &'a [u8]) -> SaveDecoder<'a, 'm> {
        SaveDecoder::new(data, self.mappings, self.config)
    }

    pub fn decode(self, data: &[u8]) -> Result<Save> {
        self.build(data).decode()
    }
}
