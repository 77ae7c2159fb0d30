//! Unit overlay sections.
//!
//! After the primary unit list the stream carries a fixed run of
//! count-prefixed sections keyed by unit id. Each section is decoded in full
//! first, then merged onto the units through a [`UnitIndex`]. Scalar overlays
//! replace the previous value, list overlays append in stream order.

use ahash::AHashMap;
use tracing::{debug, trace, warn};

use crate::codec::BinaryReader;
use crate::decode::config::UnknownUnitPolicy;
use crate::decode::read_list;
use crate::error::{Error, Result};
use crate::state::{
    ComponentCargo, ComponentHealth, FactoryState, ModdedComponent, ShieldPoint, ShipName, Unit,
    UnitHealth, UnitId, UnitKinematics, UnitModuleData, CUSTOM_SHIP_NAME_INDEX,
};

/// Overlay sections in the order they follow the unit list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlaySection {
    Names,
    ModuleData,
    ModdedComponents,
    CapacitorCharges,
    CloakedUnits,
    PoweredDownComponents,
    EngineThrottles,
    ComponentCargo,
    ShieldPoints,
    ComponentHealth,
    ActiveUnits,
    UnitHealth,
}

impl OverlaySection {
    pub const STREAM_ORDER: [OverlaySection; 12] = [
        Self::Names,
        Self::ModuleData,
        Self::ModdedComponents,
        Self::CapacitorCharges,
        Self::CloakedUnits,
        Self::PoweredDownComponents,
        Self::EngineThrottles,
        Self::ComponentCargo,
        Self::ShieldPoints,
        Self::ComponentHealth,
        Self::ActiveUnits,
        Self::UnitHealth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Names => "unit names",
            Self::ModuleData => "unit module data",
            Self::ModdedComponents => "modded components",
            Self::CapacitorCharges => "capacitor charges",
            Self::CloakedUnits => "cloaked units",
            Self::PoweredDownComponents => "powered down components",
            Self::EngineThrottles => "engine throttles",
            Self::ComponentCargo => "component cargo",
            Self::ShieldPoints => "shield points",
            Self::ComponentHealth => "component health",
            Self::ActiveUnits => "active units",
            Self::UnitHealth => "unit health",
        }
    }

    /// Decode every record of this section, whether or not its unit exists
    pub fn read_records(self, reader: &mut BinaryReader) -> Result<Vec<OverlayRecord>> {
        let section = self.name();
        read_list(reader, section, |r| {
            let offset = r.position();
            let unit_id = r.read_i32_le()?;
            let overlay = self.read_payload(r)?;
            Ok(OverlayRecord { offset, unit_id, overlay })
        })
    }

    fn read_payload(self, r: &mut BinaryReader) -> Result<UnitOverlay> {
        let section = self.name();
        Ok(match self {
            Self::Names => UnitOverlay::Name(r.read_string()?),
            Self::ModuleData => UnitOverlay::Modules(UnitModuleData::read(r)?),
            Self::ModdedComponents => UnitOverlay::ModdedComponent(ModdedComponent {
                bay_id: r.read_i32_le()?,
                component_class_id: r.read_i32_le()?,
            }),
            Self::CapacitorCharges => UnitOverlay::CapacitorCharge(r.read_f32_le()?),
            Self::CloakedUnits => UnitOverlay::Cloaked,
            Self::PoweredDownComponents => UnitOverlay::PoweredDown { bay_id: r.read_i32_le()? },
            Self::EngineThrottles => UnitOverlay::EngineThrottle(r.read_f32_le()?),
            Self::ComponentCargo => UnitOverlay::Cargo(read_list(r, section, |r| {
                Ok(ComponentCargo {
                    class_id: r.read_i32_le()?,
                    quantity: r.read_i32_le()?,
                })
            })?),
            Self::ShieldPoints => {
                // Shield point counts are a single byte
                let count = r.read_u8()?;
                let mut points = Vec::with_capacity(usize::from(count));
                for _ in 0..count {
                    points.push(ShieldPoint {
                        index: r.read_u8()?,
                        health: r.read_f32_le()?,
                    });
                }
                UnitOverlay::Shields(points)
            }
            Self::ComponentHealth => UnitOverlay::ComponentHealth(read_list(r, section, |r| {
                Ok(ComponentHealth {
                    bay_id: r.read_i32_le()?,
                    health: r.read_f32_le()?,
                })
            })?),
            Self::ActiveUnits => UnitOverlay::Kinematics(UnitKinematics {
                velocity: r.read_vector3()?,
                current_turn: r.read_f32_le()?,
            }),
            Self::UnitHealth => UnitOverlay::Health(UnitHealth {
                destroyed: r.read_bool()?,
                total_damage_received: r.read_f32_le()?,
                health: r.read_f32_le()?,
            }),
        })
    }
}

impl UnitModuleData {
    /// Read the module payload that follows the unit id
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        let index = reader.read_i32_le()?;
        let ship_name = if index == CUSTOM_SHIP_NAME_INDEX {
            ShipName::Custom { name: reader.read_string()? }
        } else {
            ShipName::Indexed { index }
        };
        let cargo_capacity = reader.read_f32_le()?;
        let factories = if reader.read_bool()? {
            Some(read_list(reader, "factories", |r| {
                Ok(FactoryState {
                    state: r.read_i32_le()?,
                    progress: r.read_f32_le()?,
                })
            })?)
        } else {
            None
        };
        Ok(Self {
            ship_name,
            cargo_capacity,
            factories,
            is_under_construction: reader.read_bool()?,
            construction_progress: reader.read_f32_le()?,
            station_unit_class_number: reader.read_i32_le()?,
        })
    }
}

/// Data one overlay record attaches to a unit
#[derive(Debug, Clone, PartialEq)]
pub enum UnitOverlay {
    Name(String),
    Modules(UnitModuleData),
    ModdedComponent(ModdedComponent),
    CapacitorCharge(f32),
    Cloaked,
    PoweredDown { bay_id: i32 },
    EngineThrottle(f32),
    Cargo(Vec<ComponentCargo>),
    Shields(Vec<ShieldPoint>),
    ComponentHealth(Vec<ComponentHealth>),
    Kinematics(UnitKinematics),
    Health(UnitHealth),
}

impl UnitOverlay {
    pub fn apply(self, unit: &mut Unit) {
        match self {
            Self::Name(name) => unit.name = Some(name),
            Self::Modules(modules) => unit.modules = Some(modules),
            Self::ModdedComponent(component) => unit.modded_components.push(component),
            Self::CapacitorCharge(charge) => unit.capacitor_charge = Some(charge),
            Self::Cloaked => unit.cloaked = true,
            Self::PoweredDown { bay_id } => unit.powered_down_bays.push(bay_id),
            Self::EngineThrottle(throttle) => unit.engine_throttle = Some(throttle),
            Self::Cargo(cargo) => unit.component_cargo.extend(cargo),
            Self::Shields(points) => unit.shield_points.extend(points),
            Self::ComponentHealth(health) => unit.component_health.extend(health),
            Self::Kinematics(kinematics) => unit.kinematics = Some(kinematics),
            Self::Health(health) => unit.health = Some(health),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRecord {
    /// Offset of the record's unit id
    pub offset: usize,
    pub unit_id: UnitId,
    pub overlay: UnitOverlay,
}

/// Unit id to positions in the unit list, built once after the unit section.
///
/// Ids should be unique; when they are not, every unit sharing the id
/// receives the overlay.
pub struct UnitIndex {
    positions: AHashMap<UnitId, Vec<usize>>,
}

impl UnitIndex {
    pub fn build(units: &[Unit]) -> Self {
        let mut positions: AHashMap<UnitId, Vec<usize>> = AHashMap::with_capacity(units.len());
        for (i, unit) in units.iter().enumerate() {
            let slots = positions.entry(unit.id).or_default();
            if !slots.is_empty() {
                warn!(unit_id = unit.id, position = i, "duplicate unit id");
            }
            slots.push(i);
        }
        Self { positions }
    }

    /// Positions of every unit with this id, in list order
    pub fn get(&self, id: UnitId) -> &[usize] {
        self.positions.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Counts from merging one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    pub applied: usize,
    pub skipped: usize,
}

/// Apply a decoded section onto the units in record order
pub fn merge(
    units: &mut [Unit],
    index: &UnitIndex,
    section: OverlaySection,
    records: Vec<OverlayRecord>,
    policy: UnknownUnitPolicy,
) -> Result<MergeOutcome> {
    let mut outcome = MergeOutcome::default();
    for record in records {
        match index.get(record.unit_id).split_last() {
            Some((&last, rest)) => {
                trace!(section = section.name(), unit_id = record.unit_id, "merge");
                for &pos in rest {
                    record.overlay.clone().apply(&mut units[pos]);
                }
                record.overlay.apply(&mut units[last]);
                outcome.applied += 1;
            }
            None => match policy {
                UnknownUnitPolicy::Skip => {
                    warn!(
                        section = section.name(),
                        unit_id = record.unit_id,
                        offset = record.offset,
                        "overlay references unknown unit, skipping"
                    );
                    outcome.skipped += 1;
                }
                UnknownUnitPolicy::Reject => {
                    return Err(Error::UnknownUnitReference {
                        offset: record.offset,
                        section: section.name(),
                        unit_id: record.unit_id,
                    });
                }
            },
        }
    }
    debug!(
        section = section.name(),
        applied = outcome.applied,
        skipped = outcome.skipped,
        "merged overlay"
    );
    Ok(outcome)
}
