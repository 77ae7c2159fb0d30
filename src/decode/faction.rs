use ahash::AHashMap;
use tracing::{debug, trace, warn};

use crate::codec::BinaryReader;
use crate::decode::read_list;
use crate::error::{Error, Result};
use crate::state::{
    ClassCounts, Faction, FactionAiSettings, FactionId, FactionName, FactionOpinion,
    FactionRelation, FactionStats,
};

impl FactionName {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        if reader.read_bool()? {
            return Ok(Self::Generated {
                name_id: reader.read_i32_le()?,
                suffix_id: reader.read_i32_le()?,
            });
        }
        if reader.read_bool()? {
            return Ok(Self::Custom {
                name: reader.read_string()?,
                short_name: reader.read_string()?,
            });
        }
        Ok(Self::Unnamed)
    }
}

impl FactionAiSettings {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            prefer_single_ship: reader.read_bool()?,
            repair_ships: reader.read_bool()?,
            upgrade_ships: reader.read_bool()?,
            repair_min_hull_damage: reader.read_f32_le()?,
            repair_min_credits_before_repair: reader.read_i32_le()?,
            preference_to_place_bounty: reader.read_f32_le()?,
            large_ship_preference: reader.read_f32_le()?,
            daily_income: reader.read_i32_le()?,
            hostile_with_all: reader.read_bool()?,
            min_fleet_unit_count: reader.read_i32_le()?,
            max_fleet_unit_count: reader.read_i32_le()?,
            offensive_stance: reader.read_f32_le()?,
            allow_other_factions_to_use_docks: reader.read_bool()?,
            preference_to_build_turrets: reader.read_f32_le()?,
            preference_to_build_stations: reader.read_f32_le()?,
            ignore_stations_credit_reserve: reader.read_bool()?,
        })
    }
}

fn read_class_counts(reader: &mut BinaryReader, section: &'static str) -> Result<ClassCounts> {
    let pairs = read_list(reader, section, |r| Ok((r.read_i32_le()?, r.read_i32_le()?)))?;
    Ok(pairs.into_iter().collect())
}

impl FactionStats {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            total_ships_claimed: reader.read_i32_le()?,
            units_destroyed_by_class_id: read_class_counts(reader, "units destroyed")?,
            units_lost_by_class_id: read_class_counts(reader, "units lost")?,
            scratchcards_scratched: reader.read_i32_le()?,
            highest_scratchcard_win: reader.read_i32_le()?,
        })
    }
}

impl Faction {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        let id = reader.read_i32_le()?;
        let name = FactionName::read(reader)?;
        let credits = reader.read_i32_le()?;
        let description = reader.read_string()?;
        let is_civilian = reader.read_bool()?;
        let faction_type = reader.read_i32_le()?;
        let aggression = reader.read_f32_le()?;
        let virtue = reader.read_f32_le()?;
        let greed = reader.read_f32_le()?;
        let trade_efficiency = reader.read_f32_le()?;
        let dynamic_relations = reader.read_bool()?;
        let show_job_boards = reader.read_bool()?;
        let create_jobs = reader.read_bool()?;
        let requisition_point_multiplier = reader.read_f32_le()?;
        let destroy_when_no_units = reader.read_bool()?;
        let min_npc_combat_efficiency = reader.read_f32_le()?;
        let max_npc_combat_efficiency = reader.read_f32_le()?;
        let additional_rp_provision = reader.read_i32_le()?;
        let trade_illegal_goods = reader.read_bool()?;
        let spawn_time = reader.read_game_time()?;
        let highest_ever_networth = reader.read_i32_le()?;

        let ai_settings = if reader.read_bool()? {
            Some(FactionAiSettings::read(reader)?)
        } else {
            None
        };
        let stats = if reader.read_bool()? {
            Some(FactionStats::read(reader)?)
        } else {
            None
        };
        let autopilot_excluded_sectors =
            read_list(reader, "excluded sectors", |r| r.read_i32_le())?;

        Ok(Self {
            id,
            name,
            credits,
            description,
            is_civilian,
            faction_type,
            aggression,
            virtue,
            greed,
            trade_efficiency,
            dynamic_relations,
            show_job_boards,
            create_jobs,
            requisition_point_multiplier,
            destroy_when_no_units,
            min_npc_combat_efficiency,
            max_npc_combat_efficiency,
            additional_rp_provision,
            trade_illegal_goods,
            spawn_time,
            highest_ever_networth,
            ai_settings,
            stats,
            autopilot_excluded_sectors,
            relations: Vec::new(),
            opinions: Vec::new(),
        })
    }
}

impl FactionRelation {
    pub fn read(reader: &mut BinaryReader, faction_id: FactionId) -> Result<Self> {
        Ok(Self {
            faction_id,
            other_faction_id: reader.read_i32_le()?,
            permanent_peace: reader.read_bool()?,
            restrict_hostility_timeout: reader.read_bool()?,
            neutrality: reader.read_i32_le()?,
            hostility_end_time: reader.read_game_time()?,
            recent_damage_received: reader.read_f32_le()?,
        })
    }
}

impl FactionOpinion {
    pub fn read(reader: &mut BinaryReader, faction_id: FactionId) -> Result<Self> {
        Ok(Self {
            faction_id,
            other_faction_id: reader.read_i32_le()?,
            opinion: reader.read_f32_le()?,
        })
    }
}

/// Records for one owning faction, as grouped in the stream
#[derive(Debug, Clone)]
pub struct FactionGroup<T> {
    /// Offset of the group's faction id
    pub offset: usize,
    pub faction_id: FactionId,
    pub records: Vec<T>,
}

/// Read a grouped section: group count, then per group the owning faction
/// id, a record count and the records.
pub fn read_faction_groups<'a, T>(
    reader: &mut BinaryReader<'a>,
    section: &'static str,
    read_one: impl Fn(&mut BinaryReader<'a>, FactionId) -> Result<T>,
) -> Result<Vec<FactionGroup<T>>> {
    read_list(reader, section, |r| {
        let offset = r.position();
        let faction_id = r.read_i32_le()?;
        let records = read_list(r, section, |r| read_one(r, faction_id))?;
        Ok(FactionGroup { offset, faction_id, records })
    })
}

/// Faction id to positions in the faction list, built once after the
/// faction section. A duplicated id maps to every faction carrying it.
pub struct FactionIndex {
    positions: AHashMap<FactionId, Vec<usize>>,
}

impl FactionIndex {
    pub fn build(factions: &[Faction]) -> Self {
        let mut positions: AHashMap<FactionId, Vec<usize>> =
            AHashMap::with_capacity(factions.len());
        for (i, faction) in factions.iter().enumerate() {
            let slots = positions.entry(faction.id).or_default();
            if !slots.is_empty() {
                warn!(faction_id = faction.id, position = i, "duplicate faction id");
            }
            slots.push(i);
        }
        Self { positions }
    }

    pub fn get(&self, id: FactionId) -> &[usize] {
        self.positions.get(&id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Append each group's records to its faction.
///
/// Every group must name a decoded faction; a dangling id is a structural
/// error, never dropped.
pub fn attach_groups<T: Clone>(
    factions: &mut [Faction],
    index: &FactionIndex,
    section: &'static str,
    groups: Vec<FactionGroup<T>>,
    target: impl Fn(&mut Faction) -> &mut Vec<T>,
) -> Result<()> {
    for group in groups {
        let Some((&last, rest)) = index.get(group.faction_id).split_last() else {
            return Err(Error::OverlayReference {
                offset: group.offset,
                section,
                faction_id: group.faction_id,
            });
        };
        trace!(section, faction_id = group.faction_id, records = group.records.len(), "attach");
        for &pos in rest {
            target(&mut factions[pos]).extend(group.records.iter().cloned());
        }
        target(&mut factions[last]).extend(group.records);
    }
    debug!(section, "attached faction groups");
    Ok(())
}
