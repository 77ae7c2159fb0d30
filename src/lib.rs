//! Pixelfactor save decoder
//!
//! Reads the binary save format written by Pixelfactor 1.6.x into an
//! in-memory model of sectors, factions, patrol paths and units.
//!
//! ```no_run
//! use pixelfactor_save::{decode_save, ClassMappings};
//!
//! let data = std::fs::read("save.sav")?;
//! let save = decode_save(&data, &ClassMappings::default())?;
//! println!("{} units", save.units.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod decode;
pub mod error;
pub mod lookup;
pub mod state;

pub use codec::{BinaryReader, BinaryWriter, GameTime, Vector3, Vector4};
pub use decode::{
    decode_batch, decode_save, DecodeConfig, DecoderBuilder, SaveDecoder, UnknownUnitPolicy,
};
pub use error::{Error, Result};
pub use lookup::ClassMappings;
pub use state::{Faction, FactionId, Header, PatrolPath, Save, Sector, SectorId, Unit, UnitId};
