use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// One reserved slot block in a data link management message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotReservation {
    /// 12 bits : offset of the first reserved slot
    pub offset: u16,
    /// 4 bits : number of consecutive slots
    pub slots: u8,
    /// 3 bits : timeout in minutes
    pub timeout: u8,
    /// 11 bits : slot increment
    pub increment: u16,
}

/// Message 20: data link management.
///
/// 72 to 160 bits; one to four 30-bit reservation blocks depending on the
/// payload length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataLinkManagement {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare: u8,
    pub reservations: Vec<SlotReservation>,
}

impl DataLinkManagement {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(20, six, 72, 160)?;
        let (repeat, mmsi) = preamble(six)?;

        let spare = six.read(2)? as u8;
        let mut reservations = vec![Self::reservation(six)?];
        for threshold in [72, 104, 136] {
            if bits > threshold {
                reservations.push(Self::reservation(six)?);
            }
        }

        Ok(DataLinkManagement {
            repeat,
            mmsi,
            spare,
            reservations,
        })
    }

    fn reservation(six: &mut Sixbit) -> Result<SlotReservation> {
        Ok(SlotReservation {
            offset: six.read(12)? as u16,
            slots: six.read(4)? as u8,
            timeout: six.read(3)? as u8,
            increment: six.read(11)? as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn two_reservations() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,D02<HoP6AH?`<Pl9H0,4*0E");
        assert_eq!(id, 20);
        let msg = DataLinkManagement::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 2_300_126);
        assert_eq!(
            msg.reservations,
            vec![
                SlotReservation {
                    offset: 100,
                    slots: 5,
                    timeout: 4,
                    increment: 250,
                },
                SlotReservation {
                    offset: 200,
                    slots: 3,
                    timeout: 2,
                    increment: 150,
                },
            ]
        );
    }
}
