use serde::{Deserialize, Serialize};

use super::comm_state::Sotdma;
use super::position::Position;
use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 4 (base station report) and message 11 (UTC/date response).
///
/// 168 bits, identical layouts. Date/time fields are raw; a month of 0 or
/// an hour of 24 means "not available" and is not rejected here. Position
/// is in 1/10000 minute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UtcDateReport {
    pub message_id: u8,
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 14 bits : UTC year
    pub utc_year: u16,
    /// 4 bits : UTC month
    pub utc_month: u8,
    /// 5 bits : UTC day
    pub utc_day: u8,
    /// 5 bits : UTC hour
    pub utc_hour: u8,
    /// 6 bits : UTC minute
    pub utc_minute: u8,
    /// 6 bits : UTC second
    pub utc_second: u8,
    pub position_accuracy: bool,
    pub position: Position,
    /// 4 bits : position fixing device type
    pub fix_type: u8,
    /// 10 bits : spare
    pub spare: u16,
    pub raim: bool,
    pub sotdma: Sotdma,
}

impl UtcDateReport {
    pub(crate) fn decode(message_id: u8, six: &mut Sixbit) -> Result<Self> {
        require_len(message_id, six, 168, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        Ok(UtcDateReport {
            message_id,
            repeat,
            mmsi,
            utc_year: six.read(14)? as u16,
            utc_month: six.read(4)? as u8,
            utc_day: six.read(5)? as u8,
            utc_hour: six.read(5)? as u8,
            utc_minute: six.read(6)? as u8,
            utc_second: six.read(6)? as u8,
            position_accuracy: six.read(1)? == 1,
            position: Position::from_raw(six.read(28)?, six.read(27)?),
            fix_type: six.read(4)? as u8,
            spare: six.read(10)? as u16,
            raim: six.read(1)? == 1,
            sotdma: Sotdma::decode(six)?,
        })
    }
}
