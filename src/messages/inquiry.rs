use serde::{Deserialize, Serialize};

use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Message 10: UTC/date inquiry. 72 bits exactly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcDateInquiry {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare1: u8,
    /// 30 bits : interrogated station
    pub destination: Mmsi,
    pub spare2: u8,
}

impl UtcDateInquiry {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(10, six, 72, 72)?;
        let (repeat, mmsi) = preamble(six)?;

        Ok(UtcDateInquiry {
            repeat,
            mmsi,
            spare1: six.read(2)? as u8,
            destination: six.read(30)?,
            spare2: six.read(2)? as u8,
        })
    }
}
