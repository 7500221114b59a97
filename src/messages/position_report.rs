use serde::{Deserialize, Serialize};

use super::comm_state::{CommState, Itdma, Sotdma};
use super::position::Position;
use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Messages 1, 2, 3: Class A position report.
///
/// 168 bits. Messages 1 and 2 close with a SOTDMA state, message 3 with an
/// ITDMA state. Position is in 1/10000 minute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PositionReport {
    pub message_id: u8,
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 4 bits : navigational status
    pub nav_status: u8,
    /// 8 bits : raw rate of turn
    pub rate_of_turn: u8,
    /// 10 bits : speed over ground, 1/10 knot
    pub speed: u16,
    pub position_accuracy: bool,
    pub position: Position,
    /// 12 bits : course over ground, 1/10 degree
    pub course: u16,
    /// 9 bits : true heading
    pub heading: u16,
    /// 6 bits : UTC second of transmission
    pub utc_sec: u8,
    /// 4 bits : regional reserved
    pub regional: u8,
    pub spare: u8,
    pub raim: bool,
    pub comm_state: CommState,
}

impl PositionReport {
    pub(crate) fn decode(message_id: u8, six: &mut Sixbit) -> Result<Self> {
        require_len(message_id, six, 168, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        let nav_status = six.read(4)? as u8;
        let rate_of_turn = six.read(8)? as u8;
        let speed = six.read(10)? as u16;
        let position_accuracy = six.read(1)? == 1;
        let position = Position::from_raw(six.read(28)?, six.read(27)?);
        let course = six.read(12)? as u16;
        let heading = six.read(9)? as u16;
        let utc_sec = six.read(6)? as u8;
        let regional = six.read(4)? as u8;
        let spare = six.read(1)? as u8;
        let raim = six.read(1)? == 1;

        // The comm state flavor is fixed by the message id, not a selector.
        let comm_state = if message_id == 3 {
            CommState::Itdma(Itdma::decode(six)?)
        } else {
            CommState::Sotdma(Sotdma::decode(six)?)
        };

        Ok(PositionReport {
            message_id,
            repeat,
            mmsi,
            nav_status,
            rate_of_turn,
            speed,
            position_accuracy,
            position,
            course,
            heading,
            utc_sec,
            regional,
            spare,
            raim,
            comm_state,
        })
    }
}
