use serde::Serialize;

use crate::codec::{GameTime, Vector3, Vector4};
use crate::state::faction::FactionId;
use crate::state::save::SectorId;

pub type UnitId = i32;

/// A unit (ship, station, cargo pod, projectile, ...)
///
/// The fields up to `projectile` come from the primary unit record. The rest
/// are attached afterwards by the overlay sections, keyed by `id`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Unit {
    pub id: UnitId,
    pub class_id: i32,
    /// Resolved through the unit class table, `None` when the id is unknown
    pub class_name: Option<String>,
    pub sector_id: SectorId,
    pub position: Vector3,
    pub rotation: Vector4,
    pub faction_id: FactionId,
    pub rp_provision: i32,
    pub cargo: Option<UnitCargo>,
    pub ship_trader: Option<Vec<ShipTraderItem>>,
    pub projectile: Option<UnitProjectile>,

    pub name: Option<String>,
    pub modules: Option<UnitModuleData>,
    pub modded_components: Vec<ModdedComponent>,
    pub capacitor_charge: Option<f32>,
    pub cloaked: bool,
    pub powered_down_bays: Vec<i32>,
    pub engine_throttle: Option<f32>,
    pub component_cargo: Vec<ComponentCargo>,
    pub shield_points: Vec<ShieldPoint>,
    pub component_health: Vec<ComponentHealth>,
    pub kinematics: Option<UnitKinematics>,
    pub health: Option<UnitHealth>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitCargo {
    pub class_id: i32,
    /// Resolved through the cargo class table
    pub class_name: Option<String>,
    pub quantity: i32,
    pub expires: bool,
    pub expiry_time: GameTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipTraderItem {
    pub sell_multiplier: f32,
    pub unit_class_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitProjectile {
    pub source_unit_id: UnitId,
    pub target_unit_id: UnitId,
    pub fire_time: GameTime,
    pub remaining_movement: f32,
    pub damage_type: DamageType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageType {
    pub damage: f32,
    pub mining_damage: f32,
    pub shield_damage_type: i32,
}

/// Ship naming: an index into the game's name list, or a custom name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShipName {
    Indexed { index: i32 },
    Custom { name: String },
}

/// Index value marking a custom ship name
pub const CUSTOM_SHIP_NAME_INDEX: i32 = -1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitModuleData {
    pub ship_name: ShipName,
    pub cargo_capacity: f32,
    /// Present when the factory flag is set
    pub factories: Option<Vec<FactoryState>>,
    pub is_under_construction: bool,
    pub construction_progress: f32,
    pub station_unit_class_number: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactoryState {
    pub state: i32,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModdedComponent {
    pub bay_id: i32,
    pub component_class_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentCargo {
    pub class_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShieldPoint {
    pub index: u8,
    pub health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentHealth {
    pub bay_id: i32,
    pub health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitKinematics {
    pub velocity: Vector3,
    pub current_turn: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitHealth {
    pub destroyed: bool,
    pub total_damage_received: f32,
    pub health: f32,
}
