use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Messages 7 (binary acknowledge) and 13 (safety acknowledge).
///
/// 72 to 168 bits; one to four acknowledged (MMSI, sequence) pairs, the
/// count fixed by the payload length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Acknowledge {
    pub message_id: u8,
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare: u8,
    /// 32 bits each : acknowledged destination and its sequence number
    pub acks: Vec<(Mmsi, u8)>,
}

impl Acknowledge {
    pub(crate) fn decode(message_id: u8, six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(message_id, six, 72, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        let spare = six.read(2)? as u8;
        let count = ((bits - 40) / 32).min(4);
        let mut acks = Vec::with_capacity(count as usize);
        for _ in 0..count {
            acks.push((six.read(30)?, six.read(2)? as u8));
        }

        Ok(Acknowledge {
            message_id,
            repeat,
            mmsi,
            spare,
            acks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn two_acknowledgements() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,702R5`hwCjq8?lvKl@,4*2D");
        assert_eq!(id, 7);
        let msg = Acknowledge::decode(id, &mut six).unwrap();

        assert_eq!(msg.mmsi, 2_655_651);
        assert_eq!(
            msg.acks,
            vec![(265_538_450, 0), (265_545_460, 1)]
        );
    }
}
