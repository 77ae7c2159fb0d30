use crate::codec::BinaryReader;
use crate::decode::read_list;
use crate::error::{Error, Result};
use crate::lookup::ClassMappings;
use crate::state::{DamageType, ShipTraderItem, Unit, UnitCargo, UnitProjectile};

/// Unit class ids that carry a projectile payload.
///
/// The stream has no flag for it; the payload follows the trader block only
/// for these classes.
pub const PROJECTILE_CLASS_IDS: [i32; 15] = [
    30100, 30200, 30300, 30400, 29100, 30600, 29350, 30800, 30820, 30840, 30860, 30880, 30900,
    30920, 30940,
];

pub fn is_projectile_class(class_id: i32) -> bool {
    PROJECTILE_CLASS_IDS.contains(&class_id)
}

impl UnitCargo {
    pub fn read(reader: &mut BinaryReader, mappings: &ClassMappings) -> Result<Self> {
        let class_id = reader.read_i32_le()?;
        Ok(Self {
            class_id,
            class_name: mappings.cargo_class_name(class_id).map(str::to_owned),
            quantity: reader.read_i32_le()?,
            expires: reader.read_bool()?,
            expiry_time: reader.read_game_time()?,
        })
    }
}

impl ShipTraderItem {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            sell_multiplier: reader.read_f32_le()?,
            unit_class_id: reader.read_i32_le()?,
        })
    }
}

impl DamageType {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            damage: reader.read_f32_le()?,
            mining_damage: reader.read_f32_le()?,
            shield_damage_type: reader.read_i32_le()?,
        })
    }
}

impl UnitProjectile {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            source_unit_id: reader.read_i32_le()?,
            target_unit_id: reader.read_i32_le()?,
            fire_time: reader.read_game_time()?,
            remaining_movement: reader.read_f32_le()?,
            damage_type: DamageType::read(reader)?,
        })
    }
}

impl Unit {
    /// Read a primary unit record. Overlay fields start empty.
    pub fn read(reader: &mut BinaryReader, mappings: &ClassMappings) -> Result<Self> {
        let id = reader.read_i32_le()?;
        let class_id = reader.read_i32_le()?;
        let sector_id = reader.read_i32_le()?;
        let position = reader.read_vector3()?;
        let rotation = reader.read_vector4()?;
        let faction_id = reader.read_i32_le()?;
        let rp_provision = reader.read_i32_le()?;

        let cargo = if reader.read_bool()? {
            Some(UnitCargo::read(reader, mappings)?)
        } else {
            None
        };

        let debris_offset = reader.position();
        if reader.read_bool()? {
            return Err(Error::UnsupportedVariant {
                offset: debris_offset,
                what: "unit debris block",
            });
        }

        let ship_trader = if reader.read_bool()? {
            Some(read_list(reader, "ship trader items", ShipTraderItem::read)?)
        } else {
            None
        };

        let projectile = if is_projectile_class(class_id) {
            Some(UnitProjectile::read(reader)?)
        } else {
            None
        };

        Ok(Self {
            id,
            class_id,
            class_name: mappings.unit_class_name(class_id).map(str::to_owned),
            sector_id,
            position,
            rotation,
            faction_id,
            rp_provision,
            cargo,
            ship_trader,
            projectile,
            ..Self::default()
        })
    }
}
