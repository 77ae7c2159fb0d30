use tracing::debug;

use crate::codec::BinaryReader;
use crate::decode::config::DecodeConfig;
use crate::decode::faction::{attach_groups, read_faction_groups, FactionIndex};
use crate::decode::overlay::{merge, OverlaySection, UnitIndex};
use crate::decode::read_list;
use crate::error::{Error, Result};
use crate::lookup::ClassMappings;
use crate::state::{
    Faction, FactionOpinion, FactionRelation, Header, PatrolPath, Save, Sector, Unit,
};

/// Single-pass decoder for one save buffer.
///
/// Sections are read in the fixed stream order:
/// header, elapsed time, sectors, factions, patrol paths, faction relations,
/// faction opinions, units, then the unit overlay sections in
/// [`OverlaySection::STREAM_ORDER`]. Relations and opinions are attached to
/// factions and overlays to units as soon as their section is decoded; no
/// field is read twice.
pub struct SaveDecoder<'a, 'm> {
    reader: BinaryReader<'a>,
    mappings: &'m ClassMappings,
    config: DecodeConfig,
}

impl<'a, 'm> SaveDecoder<'a, 'm> {
    pub fn new(data: &'a [u8], mappings: &'m ClassMappings, config: DecodeConfig) -> Self {
        Self {
            reader: BinaryReader::new(data),
            mappings,
            config,
        }
    }

    pub fn position(&self) -> usize {
        self.reader.position()
    }

    pub fn decode(mut self) -> Result<Save> {
        let reader = &mut self.reader;

        let header = Header::read(reader)?;
        debug!(version = %header.version, offset = reader.position(), "header");

        let seconds_elapsed = reader.read_game_time()?;

        let sectors = read_section(reader, "sectors", Sector::read)?;
        let mut factions = read_section(reader, "factions", Faction::read)?;
        let patrol_paths = read_section(reader, "patrol paths", PatrolPath::read)?;

        let faction_index = FactionIndex::build(&factions);
        let relations = read_faction_groups(reader, "faction relations", FactionRelation::read)?;
        attach_groups(&mut factions, &faction_index, "faction relations", relations, |f| {
            &mut f.relations
        })?;
        let opinions = read_faction_groups(reader, "faction opinions", FactionOpinion::read)?;
        attach_groups(&mut factions, &faction_index, "faction opinions", opinions, |f| {
            &mut f.opinions
        })?;

        let mappings = self.mappings;
        let mut units = read_section(reader, "units", |r| Unit::read(r, mappings))?;

        let unit_index = UnitIndex::build(&units);
        for section in OverlaySection::STREAM_ORDER {
            let offset = reader.position();
            let records = section.read_records(reader)?;
            debug!(section = section.name(), offset, count = records.len(), "section");
            merge(&mut units, &unit_index, section, records, self.config.unknown_units)?;
        }

        if self.config.require_exhausted && !reader.is_empty() {
            return Err(Error::TrailingData {
                offset: reader.position(),
                len: reader.len(),
            });
        }

        Ok(Save {
            header,
            seconds_elapsed,
            sectors,
            factions,
            patrol_paths,
            units,
        })
    }
}

fn read_section<'a, T>(
    reader: &mut BinaryReader<'a>,
    section: &'static str,
    read_one: impl FnMut(&mut BinaryReader<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    let offset = reader.position();
    let items = read_list(reader, section, read_one)?;
    debug!(section, offset, count = items.len(), "section");
    Ok(items)
}
