use crate::codec::BinaryReader;
use crate::error::Result;
use crate::state::Sector;

impl Sector {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            id: reader.read_i32_le()?,
            name: reader.read_string()?,
            map_position: reader.read_vector3()?,
            resource_name: reader.read_string()?,
            description: reader.read_string()?,
            gate_distance_multiplier: reader.read_f32_le()?,
            random_seed: reader.read_i32_le()?,
            position: reader.read_vector3()?,
            background_rotation: reader.read_vector3()?,
            light_rotation: reader.read_vector3()?,
        })
    }
}
