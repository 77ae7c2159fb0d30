use super::types::{GameTime, Vector3, Vector4};

/// Binary writer producing the save byte layout.
///
/// Fixture encoder: the decoder never writes saves. It mirrors
/// [`BinaryReader`](super::BinaryReader) so callers can build test buffers
/// in the same layout.
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    pub fn write_i32_le(&mut self, v: i32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_f32_le(&mut self, v: f32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, v: u64) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_game_time(&mut self, t: GameTime) {
        self.write_u64_le(t.raw());
    }

    /// Write a section or list count
    pub fn write_count(&mut self, count: usize) {
        self.write_i32_le(count as i32);
    }

    /// Write a 7-bit encoded unsigned integer, least significant group first
    pub fn write_7bit_u64(&mut self, mut v: u64) {
        while v >= 0x80 {
            self.write_u8((v as u8 & 0x7F) | 0x80);
            v >>= 7;
        }
        self.write_u8(v as u8);
    }

    pub fn write_string(&mut self, s: &str) {
        self.write_7bit_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    pub fn write_vector3(&mut self, v: Vector3) {
        self.write_f32_le(v.x);
        self.write_f32_le(v.y);
        self.write_f32_le(v.z);
    }

    pub fn write_vector4(&mut self, v: Vector4) {
        self.write_f32_le(v.x);
        self.write_f32_le(v.y);
        self.write_f32_le(v.z);
        self.write_f32_le(v.w);
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BinaryWriter> for Vec<u8> {
    fn from(writer: BinaryWriter) -> Self {
        writer.into_vec()
    }
}
