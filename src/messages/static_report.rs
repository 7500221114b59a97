use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::error::Error;
use crate::sixbit::Sixbit;
use crate::Result;

/// Payload of the two Class B static data report parts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum StaticDataPart {
    /// Part A: 20-character '@'-padded vessel name.
    Name(String),
    /// Part B: type, vendor, callsign, and dimensions.
    Details {
        ship_type: u8,
        /// 7 characters, '@'-padded
        vendor_id: String,
        /// 7 characters, '@'-padded
        callsign: String,
        dim_bow: u16,
        dim_stern: u16,
        dim_port: u8,
        dim_starboard: u8,
        spare: u8,
    },
}

/// Message 24: Class B static data report.
///
/// Sent in two parts. Part A is 160 bits and carries the name; part B is
/// 168 bits and carries the rest of the static data. The part number is
/// validated against the payload length before any field is read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StaticDataReport {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub part_number: u8,
    pub part: StaticDataPart,
}

impl StaticDataReport {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(24, six, 160, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        let part_number = six.read(2)? as u8;
        let expected = if part_number == 0 { 160 } else { 168 };
        if bits != expected {
            return Err(Error::WrongLength {
                message_id: 24,
                bits,
            });
        }

        let part = if part_number == 0 {
            StaticDataPart::Name(six.read_string(20)?)
        } else {
            StaticDataPart::Details {
                ship_type: six.read(8)? as u8,
                vendor_id: six.read_string(7)?,
                callsign: six.read_string(7)?,
                dim_bow: six.read(9)? as u16,
                dim_stern: six.read(9)? as u16,
                dim_port: six.read(6)? as u8,
                dim_starboard: six.read(6)? as u8,
                spare: six.read(6)? as u8,
            }
        };

        Ok(StaticDataReport {
            repeat,
            mmsi,
            part_number,
            part,
        })
    }
}
