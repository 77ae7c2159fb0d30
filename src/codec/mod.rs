pub mod reader;
pub mod writer;
pub mod types;

pub use reader::{BinaryReader, MAX_VARINT_BYTES};
pub use writer::BinaryWriter;
pub use types::{GameTime, Vector3, Vector4};
