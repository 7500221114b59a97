use serde::{Deserialize, Serialize};

/// A signed position decoded from raw 28-bit longitude and 27-bit latitude
/// fields.
///
/// Values are in fractional minutes; the scale (1/10000 or 1/100000 of a
/// minute) is fixed by the message type and documented on its record. The
/// raw unsigned fields are reinterpreted as two's complement against their
/// field-width moduli.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    pub longitude: i32,
    pub latitude: i32,
}

impl Position {
    const LON_MODULUS: i64 = 0x1000_0000;
    const LAT_MODULUS: i64 = 0x800_0000;

    /// Build a position from raw unsigned field values.
    #[must_use]
    pub fn from_raw(longitude: u32, latitude: u32) -> Self {
        Position {
            longitude: Self::signed(i64::from(longitude), Self::LON_MODULUS),
            latitude: Self::signed(i64::from(latitude), Self::LAT_MODULUS),
        }
    }

    fn signed(raw: i64, modulus: i64) -> i32 {
        let value = if raw >= modulus / 2 { raw - modulus } else { raw };
        value as i32
    }
}
