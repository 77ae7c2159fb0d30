use serde::Serialize;

use crate::codec::{GameTime, Vector3};
use crate::state::faction::{Faction, FactionId};
use crate::state::unit::{Unit, UnitId};

pub type SectorId = i32;

/// A fully decoded save
#[derive(Debug, Clone, Default, Serialize)]
pub struct Save {
    pub header: Header,

    /// Time played, as stored
    pub seconds_elapsed: GameTime,

    pub sectors: Vec<Sector>,
    pub factions: Vec<Faction>,
    pub patrol_paths: Vec<PatrolPath>,
    pub units: Vec<Unit>,
}

impl Save {
    pub fn faction(&self, id: FactionId) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == id)
    }

    /// Units located in the given sector, in stream order
    pub fn units_in_sector(&self, sector_id: SectorId) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.sector_id == sector_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SaveVersion {
    pub major: i32,
    pub minor: i32,
    pub build: i32,
}

impl std::fmt::Display for SaveVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Header {
    pub version: SaveVersion,
    pub is_autosave: bool,
    pub timestamp: String,
    pub scenario_info_id: i32,
    pub global_save_number: i32,
    pub save_number: i32,
    /// Present when the save has a player
    pub player: Option<PlayerState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerState {
    pub sector_name: String,
    pub player_name: String,
    pub credits: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    pub map_position: Vector3,
    pub resource_name: String,
    pub description: String,
    pub gate_distance_multiplier: f32,
    pub random_seed: i32,
    pub position: Vector3,
    pub background_rotation: Vector3,
    pub light_rotation: Vector3,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatrolPath {
    pub id: i32,
    pub sector_id: SectorId,
    pub is_loop: bool,
    pub nodes: Vec<PatrolPathNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatrolPathNode {
    pub position: Vector3,
    pub order: i32,
}
