use crate::codec::BinaryReader;
use crate::decode::read_list;
use crate::error::Result;
use crate::state::{PatrolPath, PatrolPathNode};

impl PatrolPathNode {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            position: reader.read_vector3()?,
            order: reader.read_i32_le()?,
        })
    }
}

impl PatrolPath {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            id: reader.read_i32_le()?,
            sector_id: reader.read_i32_le()?,
            is_loop: reader.read_bool()?,
            nodes: read_list(reader, "patrol path nodes", PatrolPathNode::read)?,
        })
    }
}
