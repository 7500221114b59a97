use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 5: static and voyage-related data.
///
/// 424 bits, always a multi-fragment transmission in practice. Text fields
/// keep their `'@'` padding; the ETA is the raw 20-bit wire pattern, not a
/// validated date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StaticAndVoyage {
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 2 bits : AIS version indicator
    pub ais_version: u8,
    /// 30 bits : IMO number
    pub imo: u32,
    /// 42 bits : callsign, 7 characters
    pub callsign: String,
    /// 120 bits : ship name, 20 characters
    pub name: String,
    /// 8 bits : ship and cargo type
    pub ship_type: u8,
    /// 9 bits : GPS antenna distance from bow, meters
    pub dim_bow: u16,
    /// 9 bits : distance from stern
    pub dim_stern: u16,
    /// 6 bits : distance from port side
    pub dim_port: u8,
    /// 6 bits : distance from starboard side
    pub dim_starboard: u8,
    /// 4 bits : position fixing device type
    pub fix_type: u8,
    /// 20 bits : raw ETA (month/day/hour/minute packed)
    pub eta: u32,
    /// 8 bits : maximum present static draught, 1/10 meter
    pub draught: u8,
    /// 120 bits : destination, 20 characters
    pub destination: String,
    pub dte: bool,
    pub spare: u8,
}

impl StaticAndVoyage {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(5, six, 424, 424)?;
        let (repeat, mmsi) = preamble(six)?;

        Ok(StaticAndVoyage {
            repeat,
            mmsi,
            ais_version: six.read(2)? as u8,
            imo: six.read(30)?,
            callsign: six.read_string(7)?,
            name: six.read_string(20)?,
            ship_type: six.read(8)? as u8,
            dim_bow: six.read(9)? as u16,
            dim_stern: six.read(9)? as u16,
            dim_port: six.read(6)? as u8,
            dim_starboard: six.read(6)? as u8,
            fix_type: six.read(4)? as u8,
            eta: six.read(20)?,
            draught: six.read(8)? as u8,
            destination: six.read_string(20)?,
            dte: six.read(1)? == 1,
            spare: six.read(1)? as u8,
        })
    }
}
