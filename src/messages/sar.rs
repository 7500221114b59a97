use serde::{Deserialize, Serialize};

use super::comm_state::CommState;
use super::position::Position;
use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 9: standard search-and-rescue aircraft position report.
///
/// 168 bits. Position is in 1/10000 minute; 4095 meters altitude means
/// "not available or higher", left raw.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SarAircraftPosition {
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 12 bits : altitude in meters
    pub altitude: u16,
    /// 10 bits : speed over ground, knots
    pub speed: u16,
    pub position_accuracy: bool,
    pub position: Position,
    /// 12 bits : course over ground, 1/10 degree
    pub course: u16,
    /// 6 bits : UTC second of transmission
    pub utc_sec: u8,
    /// 8 bits : regional reserved
    pub regional: u8,
    pub dte: bool,
    /// 3 bits : spare
    pub spare: u8,
    pub assigned: bool,
    pub raim: bool,
    pub comm_state: CommState,
}

impl SarAircraftPosition {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(9, six, 168, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        let altitude = six.read(12)? as u16;
        let speed = six.read(10)? as u16;
        let position_accuracy = six.read(1)? == 1;
        let position = Position::from_raw(six.read(28)?, six.read(27)?);
        let course = six.read(12)? as u16;
        let utc_sec = six.read(6)? as u8;
        let regional = six.read(8)? as u8;
        let dte = six.read(1)? == 1;
        let spare = six.read(3)? as u8;
        let assigned = six.read(1)? == 1;
        let raim = six.read(1)? == 1;
        let selector = six.read(1)?;
        let comm_state = CommState::decode_selected(selector, six)?;

        Ok(SarAircraftPosition {
            repeat,
            mmsi,
            altitude,
            speed,
            position_accuracy,
            position,
            course,
            utc_sec,
            regional,
            dte,
            spare,
            assigned,
            raim,
            comm_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;
    use crate::messages::Sotdma;

    #[test]
    fn sar_aircraft_fix() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,91b55wi;hbwwhH000rV3QG@20P1T,0*05");
        assert_eq!(id, 9);
        let msg = SarAircraftPosition::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 111_232_511);
        assert_eq!(msg.altitude, 303);
        assert_eq!(msg.speed, 42);
        assert!(msg.position_accuracy);
        assert_eq!(msg.position.longitude, -32_000);
        assert_eq!(msg.position.latitude, 15_000);
        assert_eq!(msg.course, 901);
        assert_eq!(msg.utc_sec, 29);
        assert!(msg.dte);
        assert!(!msg.assigned);
        assert!(!msg.raim);
        assert_eq!(
            msg.comm_state,
            CommState::Sotdma(Sotdma {
                sync_state: 1,
                slot_timeout: 0,
                sub_message: 100,
            })
        );
    }
}
