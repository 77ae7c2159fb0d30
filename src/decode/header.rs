use crate::codec::BinaryReader;
use crate::error::Result;
use crate::state::{Header, PlayerState, SaveVersion};

impl SaveVersion {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            major: reader.read_i32_le()?,
            minor: reader.read_i32_le()?,
            build: reader.read_i32_le()?,
        })
    }
}

impl Header {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        let version = SaveVersion::read(reader)?;
        let is_autosave = reader.read_bool()?;
        let timestamp = reader.read_string()?;
        let scenario_info_id = reader.read_i32_le()?;
        let global_save_number = reader.read_i32_le()?;
        let save_number = reader.read_i32_le()?;

        let player = if reader.read_bool()? {
            Some(PlayerState {
                sector_name: reader.read_string()?,
                player_name: reader.read_string()?,
                credits: reader.read_i32_le()?,
            })
        } else {
            None
        };

        Ok(Self {
            version,
            is_autosave,
            timestamp,
            scenario_info_id,
            global_save_number,
            save_number,
            player,
        })
    }
}
