use serde::{Deserialize, Serialize};

use super::position::Position;
use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 21: aid-to-navigation report.
///
/// 272 bits, plus up to 88 bits of name extension in 6-bit characters when
/// the 20-character name field is not enough.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AidToNavigation {
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 5 bits : type of aid, per the ITU table (0 = unspecified)
    pub aton_type: u8,
    /// 20 characters, '@'-padded
    pub name: String,
    pub position_accuracy: bool,
    pub position: Position,
    pub dim_bow: u16,
    pub dim_stern: u16,
    pub dim_port: u8,
    pub dim_starboard: u8,
    pub fix_type: u8,
    /// 6 bits : UTC second, 60 = unavailable
    pub utc_sec: u8,
    /// True when the aid is off its charted position
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    /// True for a virtual aid, false for a physical one
    pub virtual_aton: bool,
    pub assigned: bool,
    pub spare: u8,
    /// Continuation of `name`, present only when transmitted
    pub name_extension: Option<String>,
}

impl AidToNavigation {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(21, six, 272, 360)?;
        let (repeat, mmsi) = preamble(six)?;

        let aton_type = six.read(5)? as u8;
        let name = six.read_string(20)?;
        let position_accuracy = six.read(1)? != 0;
        let position = Position::from_raw(six.read(28)?, six.read(27)?);
        let dim_bow = six.read(9)? as u16;
        let dim_stern = six.read(9)? as u16;
        let dim_port = six.read(6)? as u8;
        let dim_starboard = six.read(6)? as u8;
        let fix_type = six.read(4)? as u8;
        let utc_sec = six.read(6)? as u8;
        let off_position = six.read(1)? != 0;
        let regional = six.read(8)? as u8;
        let raim = six.read(1)? != 0;
        let virtual_aton = six.read(1)? != 0;
        let assigned = six.read(1)? != 0;
        let spare = six.read(1)? as u8;
        let name_extension = if bits > 272 {
            Some(six.read_string(((bits - 272) / 6) as usize)?)
        } else {
            None
        };

        Ok(AidToNavigation {
            repeat,
            mmsi,
            aton_type,
            name,
            position_accuracy,
            position,
            dim_bow,
            dim_stern,
            dim_port,
            dim_starboard,
            fix_type,
            utc_sec,
            off_position,
            regional,
            raim,
            virtual_aton,
            assigned,
            spare,
            name_extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn without_name_extension() {
        let (id, mut six) =
            assemble("!AIVDM,1,1,,A,E>jHC6?9b@42V2W0h64ST:00000OueQ0wnn4050`@Cv020,4*27");
        assert_eq!(id, 21);
        let msg = AidToNavigation::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 992_351_000);
        assert_eq!(msg.aton_type, 30);
        assert_eq!(msg.name, "ST HELENA LIGHT@@@@@");
        assert_eq!(msg.position.longitude, -600_000);
        assert_eq!(msg.position.latitude, -300_000);
        assert_eq!(msg.dim_bow, 5);
        assert_eq!(msg.dim_stern, 5);
        assert_eq!(msg.dim_port, 2);
        assert_eq!(msg.dim_starboard, 2);
        assert_eq!(msg.fix_type, 7);
        assert_eq!(msg.utc_sec, 60);
        assert!(msg.raim);
        assert!(msg.name_extension.is_none());
    }

    #[test]
    fn with_name_extension() {
        let (id, mut six) = assemble(
            "!AIVDM,1,1,,A,E>jHC6?9b@42V2W0h64ST:00000OueQ0wnn4050`@Cv021F51CTjCkP00000,4*51",
        );
        assert_eq!(id, 21);
        let msg = AidToNavigation::decode(&mut six).unwrap();

        assert_eq!(msg.name, "ST HELENA LIGHT@@@@@");
        assert_eq!(msg.name_extension.as_deref(), Some("EXTENSION@@@@@"));
    }
}
