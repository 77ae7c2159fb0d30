use indexmap::IndexMap;
use serde::Serialize;

use crate::codec::GameTime;
use crate::state::save::SectorId;

pub type FactionId = i32;

/// How a faction is named in the save.
///
/// Selected by two sequential flags: the custom-name flag is only present
/// when the generated-name flag is false.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactionName {
    Generated { name_id: i32, suffix_id: i32 },
    Custom { name: String, short_name: String },
    #[default]
    Unnamed,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: FactionName,
    pub credits: i32,
    pub description: String,
    pub is_civilian: bool,
    pub faction_type: i32,
    pub aggression: f32,
    pub virtue: f32,
    pub greed: f32,
    pub trade_efficiency: f32,
    pub dynamic_relations: bool,
    pub show_job_boards: bool,
    pub create_jobs: bool,
    pub requisition_point_multiplier: f32,
    pub destroy_when_no_units: bool,
    pub min_npc_combat_efficiency: f32,
    pub max_npc_combat_efficiency: f32,
    pub additional_rp_provision: i32,
    pub trade_illegal_goods: bool,
    pub spawn_time: GameTime,
    pub highest_ever_networth: i32,
    pub ai_settings: Option<FactionAiSettings>,
    pub stats: Option<FactionStats>,
    pub autopilot_excluded_sectors: Vec<SectorId>,

    /// Attached from the relations section
    pub relations: Vec<FactionRelation>,
    /// Attached from the opinions section
    pub opinions: Vec<FactionOpinion>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FactionAiSettings {
    pub prefer_single_ship: bool,
    pub repair_ships: bool,
    pub upgrade_ships: bool,
    pub repair_min_hull_damage: f32,
    pub repair_min_credits_before_repair: i32,
    pub preference_to_place_bounty: f32,
    pub large_ship_preference: f32,
    pub daily_income: i32,
    pub hostile_with_all: bool,
    pub min_fleet_unit_count: i32,
    pub max_fleet_unit_count: i32,
    pub offensive_stance: f32,
    pub allow_other_factions_to_use_docks: bool,
    pub preference_to_build_turrets: f32,
    pub preference_to_build_stations: f32,
    pub ignore_stations_credit_reserve: bool,
}

/// Unit counts keyed by unit class id, in stream order.
///
/// A class id repeated in the stream keeps its first position and the last
/// count read.
pub type ClassCounts = IndexMap<i32, i32>;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FactionStats {
    pub total_ships_claimed: i32,
    pub units_destroyed_by_class_id: ClassCounts,
    pub units_lost_by_class_id: ClassCounts,
    pub scratchcards_scratched: i32,
    pub highest_scratchcard_win: i32,
}

/// One faction's standing towards another. Directional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactionRelation {
    pub faction_id: FactionId,
    pub other_faction_id: FactionId,
    pub permanent_peace: bool,
    pub restrict_hostility_timeout: bool,
    pub neutrality: i32,
    pub hostility_end_time: GameTime,
    pub recent_damage_received: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactionOpinion {
    pub faction_id: FactionId,
    pub other_faction_id: FactionId,
    pub opinion: f32,
}

impl Faction {
    pub fn relation_with(&self, other: FactionId) -> Option<&FactionRelation> {
        self.relations.iter().find(|r| r.other_faction_id == other)
    }

    pub fn opinion_of(&self, other: FactionId) -> Option<f32> {
        self.opinions
            .iter()
            .rev()
            .find(|o| o.other_faction_id == other)
            .map(|o| o.opinion)
    }
}
