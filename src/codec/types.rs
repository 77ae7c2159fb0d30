use serde::Serialize;

/// Three consecutive little-endian floats (positions, euler rotations)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Four consecutive little-endian floats (quaternion rotations)
///
/// Values are passed through as stored; nothing is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// An 8-byte time field (elapsed seconds, spawn/expiry/fire times).
///
/// The save stores these as eight little-endian bytes. They are kept as the
/// raw unsigned integer; `as_double` reinterprets the same bits as an
/// IEEE-754 double for callers that know the field is a floating timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct GameTime(pub u64);

impl GameTime {
    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn as_double(self) -> f64 {
        f64::from_bits(self.0)
    }
}
