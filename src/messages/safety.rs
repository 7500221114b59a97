use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 12: addressed safety-related text.
///
/// 72 to 1008 bits; the text length is whatever the payload length leaves
/// after the fixed fields, (bits − 72) / 6 characters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressedSafety {
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 2 bits : sequence number
    pub sequence: u8,
    /// 30 bits : destination MMSI
    pub destination: Mmsi,
    pub retransmit: bool,
    pub spare: u8,
    pub text: String,
}

impl AddressedSafety {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(12, six, 72, 1008)?;
        let (repeat, mmsi) = preamble(six)?;

        Ok(AddressedSafety {
            repeat,
            mmsi,
            sequence: six.read(2)? as u8,
            destination: six.read(30)?,
            retransmit: six.read(1)? == 1,
            spare: six.read(1)? as u8,
            text: six.read_string(((bits - 72) / 6) as usize)?,
        })
    }
}

/// Message 14: safety-related broadcast text.
///
/// 40 to 1008 bits; (bits − 40) / 6 characters of text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SafetyBroadcast {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare: u8,
    pub text: String,
}

impl SafetyBroadcast {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(14, six, 40, 1008)?;
        let (repeat, mmsi) = preamble(six)?;

        Ok(SafetyBroadcast {
            repeat,
            mmsi,
            spare: six.read(2)? as u8,
            text: six.read_string(((bits - 40) / 6) as usize)?,
        })
    }
}
