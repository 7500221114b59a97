use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 6: addressed binary message.
///
/// 88 to 1008 bits. The application payload after the 16-bit application id
/// is not interpreted; the remaining stream is handed back for a
/// caller-supplied decoder keyed on the application id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddressedBinary {
    pub repeat: u8,
    pub mmsi: Mmsi,
    /// 2 bits : sequence number
    pub sequence: u8,
    /// 30 bits : destination MMSI
    pub destination: Mmsi,
    pub retransmit: bool,
    pub spare: u8,
    /// 16 bits : application id (DAC + FI)
    pub app_id: u16,
    /// Remaining payload bits, positioned at the application data.
    pub data: Sixbit,
}

impl AddressedBinary {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(6, six, 88, 1008)?;
        let (repeat, mmsi) = preamble(six)?;

        let sequence = six.read(2)? as u8;
        let destination = six.read(30)?;
        let retransmit = six.read(1)? == 1;
        let spare = six.read(1)? as u8;
        let app_id = six.read(16)? as u16;

        Ok(AddressedBinary {
            repeat,
            mmsi,
            sequence,
            destination,
            retransmit,
            spare,
            app_id,
            data: std::mem::take(six),
        })
    }
}

/// Message 8: binary broadcast message.
///
/// 56 to 1008 bits; same uninterpreted-payload contract as message 6.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BinaryBroadcast {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare: u8,
    /// 16 bits : application id (DAC + FI)
    pub app_id: u16,
    /// Remaining payload bits, positioned at the application data.
    pub data: Sixbit,
}

impl BinaryBroadcast {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(8, six, 56, 1008)?;
        let (repeat, mmsi) = preamble(six)?;

        let spare = six.read(2)? as u8;
        let app_id = six.read(16)? as u16;

        Ok(BinaryBroadcast {
            repeat,
            mmsi,
            spare,
            app_id,
            data: std::mem::take(six),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn broadcast_hands_back_raw_payload() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,85MwpKh0Gssg,0*52");
        assert_eq!(id, 8);
        let mut msg = BinaryBroadcast::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 366_999_663);
        // DAC 1, FI 31
        assert_eq!(msg.app_id, (1 << 6) | 31);
        assert_eq!(msg.data.read(16).unwrap(), 0xbeef);
        assert!(msg.data.read(1).is_err(), "payload fully consumed");
    }

    #[test]
    fn addressed_binary() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,62?n;be:cbap0al:d0,4*32");
        assert_eq!(id, 6);
        let mut msg = AddressedBinary::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 150_834_090);
        assert_eq!(msg.sequence, 3);
        assert_eq!(msg.destination, 313_240_222);
        assert!(!msg.retransmit);
        assert_eq!(msg.app_id, 669);
        assert_eq!(msg.data.read(16).unwrap(), 0x0ab0);
    }

    #[test]
    fn truncated_broadcast_is_a_length_error() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,85Mwp,0*61");
        assert_eq!(id, 8);
        assert!(BinaryBroadcast::decode(&mut six).is_err());
    }
}
