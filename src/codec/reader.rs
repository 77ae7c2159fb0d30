use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use super::types::{GameTime, Vector3, Vector4};

/// Longest 7-bit encoded integer the format produces
pub const MAX_VARINT_BYTES: usize = 6;

/// Forward-only cursor over one save buffer.
///
/// Every read checks the remaining length first and fails with
/// `TruncatedData` instead of returning a short value. The cursor only ever
/// moves forward.
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::TruncatedData {
                offset: self.pos,
                need: n,
                have: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Any nonzero byte is `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    pub fn read_game_time(&mut self) -> Result<GameTime> {
        Ok(GameTime(self.read_u64_le()?))
    }

    /// Read a section or list count (signed 32-bit).
    ///
    /// A negative count never occurs in a well-formed save and is rejected.
    pub fn read_count(&mut self, section: &'static str) -> Result<usize> {
        let offset = self.pos;
        let count = self.read_i32_le()?;
        usize::try_from(count).map_err(|_| Error::InvalidCount { offset, section, count })
    }

    /// Read a 7-bit encoded unsigned integer.
    ///
    /// The low seven bits of each byte are data, first byte least significant;
    /// a set high bit means another byte follows. At most six bytes are
    /// consumed. A sixth byte that still signals continuation is accepted only
    /// when the byte after it does not continue the run as well.
    pub fn read_7bit_u64(&mut self) -> Result<u64> {
        let start = self.pos;
        let mut value = 0u64;
        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_u8()?;
            value |= u64::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        match self.peek() {
            Some(next) if next & 0x80 != 0 => Err(Error::MalformedVarInt {
                offset: start,
                max_bytes: MAX_VARINT_BYTES,
            }),
            _ => Ok(value),
        }
    }

    /// Read a string prefixed by its 7-bit encoded byte length
    pub fn read_string(&mut self) -> Result<String> {
        let len_offset = self.pos;
        let len = self.read_7bit_u64()?;
        let len = usize::try_from(len).map_err(|_| Error::TruncatedData {
            offset: len_offset,
            need: usize::MAX,
            have: self.remaining(),
        })?;
        let offset = self.pos;
        let bytes = self.read_bytes(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|source| Error::InvalidEncoding { offset, source })
    }

    pub fn read_vector3(&mut self) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.read_f32_le()?,
            y: self.read_f32_le()?,
            z: self.read_f32_le()?,
        })
    }

    pub fn read_vector4(&mut self) -> Result<Vector4> {
        Ok(Vector4 {
            x: self.read_f32_le()?,
            y: self.read_f32_le()?,
            z: self.read_f32_le()?,
            w: self.read_f32_le()?,
        })
    }
}
