use serde::{Deserialize, Serialize};

use super::comm_state::CommState;
use super::position::Position;
use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 18: standard Class B equipment position report.
///
/// Exactly 168 bits. Unlike the Class A reports the comm state selector is
/// carried in the payload rather than implied by the message id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassBPosition {
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 8 bits : reserved for regional applications
    pub regional1: u8,
    /// 10 bits : speed over ground, 1/10 knot
    pub speed: u16,
    pub position_accuracy: bool,
    pub position: Position,
    /// 12 bits : course over ground, 1/10 degree
    pub course: u16,
    /// 9 bits : true heading, 511 = unavailable
    pub heading: u16,
    /// 6 bits : UTC second of the fix
    pub utc_sec: u8,
    /// 2 bits : reserved for regional applications
    pub regional2: u8,
    /// Carrier sense unit flag, true for CS Class B
    pub cs_unit: bool,
    pub display: bool,
    pub dsc: bool,
    pub band: bool,
    pub message_22: bool,
    pub assigned: bool,
    pub raim: bool,
    pub comm_state: CommState,
}

impl ClassBPosition {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(18, six, 168, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        let regional1 = six.read(8)? as u8;
        let speed = six.read(10)? as u16;
        let position_accuracy = six.read(1)? != 0;
        let position = Position::from_raw(six.read(28)?, six.read(27)?);
        let course = six.read(12)? as u16;
        let heading = six.read(9)? as u16;
        let utc_sec = six.read(6)? as u8;
        let regional2 = six.read(2)? as u8;
        let cs_unit = six.read(1)? != 0;
        let display = six.read(1)? != 0;
        let dsc = six.read(1)? != 0;
        let band = six.read(1)? != 0;
        let message_22 = six.read(1)? != 0;
        let assigned = six.read(1)? != 0;
        let raim = six.read(1)? != 0;
        let selector = six.read(1)?;
        let comm_state = CommState::decode_selected(selector, six)?;

        Ok(ClassBPosition {
            repeat,
            mmsi,
            regional1,
            speed,
            position_accuracy,
            position,
            course,
            heading,
            utc_sec,
            regional2,
            cs_unit,
            display,
            dsc,
            band,
            message_22,
            assigned,
            raim,
            comm_state,
        })
    }
}

/// Message 19: extended Class B position report with static data.
///
/// Exactly 312 bits. No comm state; instead carries name, ship type, and
/// dimensions like the static reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassBExtendedPosition {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub regional1: u8,
    /// 10 bits : speed over ground, 1/10 knot
    pub speed: u16,
    pub position_accuracy: bool,
    pub position: Position,
    /// 12 bits : course over ground, 1/10 degree
    pub course: u16,
    /// 9 bits : true heading, 511 = unavailable
    pub heading: u16,
    pub utc_sec: u8,
    /// 4 bits : reserved for regional applications
    pub regional2: u8,
    /// 20 characters, '@'-padded
    pub name: String,
    pub ship_type: u8,
    /// Meters to bow / stern / port / starboard
    pub dim_bow: u16,
    pub dim_stern: u16,
    pub dim_port: u8,
    pub dim_starboard: u8,
    pub fix_type: u8,
    pub raim: bool,
    pub dte: bool,
    pub assigned: bool,
    pub spare: u8,
}

impl ClassBExtendedPosition {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(19, six, 312, 312)?;
        let (repeat, mmsi) = preamble(six)?;

        let regional1 = six.read(8)? as u8;
        let speed = six.read(10)? as u16;
        let position_accuracy = six.read(1)? != 0;
        let position = Position::from_raw(six.read(28)?, six.read(27)?);
        let course = six.read(12)? as u16;
        let heading = six.read(9)? as u16;
        let utc_sec = six.read(6)? as u8;
        let regional2 = six.read(4)? as u8;
        let name = six.read_string(20)?;
        let ship_type = six.read(8)? as u8;
        let dim_bow = six.read(9)? as u16;
        let dim_stern = six.read(9)? as u16;
        let dim_port = six.read(6)? as u8;
        let dim_starboard = six.read(6)? as u8;
        let fix_type = six.read(4)? as u8;
        let raim = six.read(1)? != 0;
        let dte = six.read(1)? != 0;
        let assigned = six.read(1)? != 0;
        let spare = six.read(4)? as u8;

        Ok(ClassBExtendedPosition {
            repeat,
            mmsi,
            regional1,
            speed,
            position_accuracy,
            position,
            course,
            heading,
            utc_sec,
            regional2,
            name,
            ship_type,
            dim_bow,
            dim_stern,
            dim_port,
            dim_starboard,
            fix_type,
            raim,
            dte,
            assigned,
            spare,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::comm_state::Itdma;
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn standard_report() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,B52K>;h00Fc>jpUlNV@ikwpUoP06,0*4C");
        assert_eq!(id, 18);
        let msg = ClassBPosition::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 338_087_471);
        assert_eq!(msg.speed, 1);
        assert_eq!(msg.position.longitude, -44_443_279);
        assert_eq!(msg.position.latitude, 24_410_724);
        assert_eq!(msg.course, 796);
        assert_eq!(msg.heading, 511);
        assert_eq!(msg.utc_sec, 49);
        assert!(msg.cs_unit);
        assert!(msg.dsc);
        assert!(msg.band);
        assert!(msg.message_22);
        assert!(msg.raim);
        assert_eq!(
            msg.comm_state,
            CommState::Itdma(Itdma {
                sync_state: 3,
                slot_increment: 0,
                num_slots: 3,
                keep: false,
            })
        );
    }

    #[test]
    fn extended_report() {
        let (id, mut six) =
            assemble("!AIVDM,1,1,,A,C5N3SRP0Eowr9000LDSAwwWP62PaLELTBJ:V00000000S0D:R220,0*48");
        assert_eq!(id, 19);
        let msg = ClassBExtendedPosition::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 367_059_850);
        assert_eq!(msg.speed, 87);
        assert_eq!(msg.position.longitude, -48_000);
        assert_eq!(msg.position.latitude, 29_000);
        assert_eq!(msg.course, 3359);
        assert_eq!(msg.name, "CAPT.J.RIMES@@@@@@@@");
        assert_eq!(msg.ship_type, 70);
        assert_eq!(msg.dim_bow, 5);
        assert_eq!(msg.dim_stern, 21);
        assert_eq!(msg.dim_port, 4);
        assert_eq!(msg.dim_starboard, 4);
        assert_eq!(msg.fix_type, 1);
    }
}
