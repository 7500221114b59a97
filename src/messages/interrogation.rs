use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// One requested message from an interrogated station.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterrogationRequest {
    /// 6 bits : requested message id
    pub message_id: u8,
    /// 12 bits : response slot offset
    pub slot_offset: u16,
}

/// Message 15: interrogation.
///
/// 88 to 160 bits. Always one request of a first station; a payload longer
/// than 88 bits adds a second request of the same station, and longer than
/// 108 bits a request of a second station.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Interrogation {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare1: u8,
    /// 30 bits : first interrogated station
    pub destination1: Mmsi,
    pub request1: InterrogationRequest,
    /// Second request of the first station.
    pub request1b: Option<InterrogationRequest>,
    /// 30 bits : second interrogated station, with its request.
    pub destination2: Option<(Mmsi, InterrogationRequest)>,
}

impl Interrogation {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        let bits = require_len(15, six, 88, 160)?;
        let (repeat, mmsi) = preamble(six)?;

        let spare1 = six.read(2)? as u8;
        let destination1 = six.read(30)?;
        let request1 = Self::request(six)?;

        let request1b = if bits > 88 {
            six.read(2)?; // spare
            Some(Self::request(six)?)
        } else {
            None
        };

        let destination2 = if bits > 108 {
            six.read(2)?; // spare
            let destination = six.read(30)?;
            let request = Self::request(six)?;
            six.read(2)?; // spare
            Some((destination, request))
        } else {
            None
        };

        Ok(Interrogation {
            repeat,
            mmsi,
            spare1,
            destination1,
            request1,
            request1b,
            destination2,
        })
    }

    fn request(six: &mut Sixbit) -> Result<InterrogationRequest> {
        Ok(InterrogationRequest {
            message_id: six.read(6)? as u8,
            slot_offset: six.read(12)? as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn single_station_single_request() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,?5OP=l00052HD00,2*5B");
        assert_eq!(id, 15);
        let msg = Interrogation::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 368_578_000);
        assert_eq!(msg.destination1, 5158);
        assert_eq!(
            msg.request1,
            InterrogationRequest {
                message_id: 5,
                slot_offset: 0
            }
        );
        assert!(msg.request1b.is_none());
        assert!(msg.destination2.is_none());
    }
}
