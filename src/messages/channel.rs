use serde::{Deserialize, Serialize};

use super::position::Position;
use super::{preamble, require_len, Mmsi};
use crate::sixbit::Sixbit;
use crate::Result;

/// Target of a channel management message: either two addressed stations or
/// a broadcast region.
///
/// The same four payload fields carry both forms. For the addressed form the
/// corner fields are recombined into two 30-bit MMSIs; for the broadcast form
/// they are corner coordinates in 1/10 minute resolution, scaled to the
/// 1/10000 minute resolution of the position reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ChannelRegion {
    Addressed { mmsi1: Mmsi, mmsi2: Mmsi },
    Broadcast { north_east: Position, south_west: Position },
}

/// Message 22: channel management.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChannelManagement {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare1: u8,
    /// 12 bits : channel A number per ITU-R M.1084
    pub channel_a: u16,
    /// 12 bits : channel B number
    pub channel_b: u16,
    /// 4 bits : transmit/receive mode
    pub txrx_mode: u8,
    /// True for low power
    pub power: bool,
    pub region: ChannelRegion,
    /// True when channel A uses 12.5 kHz bandwidth
    pub bandwidth_a: bool,
    pub bandwidth_b: bool,
    /// 3 bits : transitional zone size
    pub zone_size: u8,
}

impl ChannelManagement {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(22, six, 168, 168)?;
        let (repeat, mmsi) = preamble(six)?;

        let spare1 = six.read(1)? as u8;
        let channel_a = six.read(12)? as u16;
        let channel_b = six.read(12)? as u16;
        let txrx_mode = six.read(4)? as u8;
        let power = six.read(1)? != 0;
        let ne_longitude = six.read(18)?;
        let ne_latitude = six.read(17)?;
        let sw_longitude = six.read(18)?;
        let sw_latitude = six.read(17)?;
        let addressed = six.read(1)? != 0;
        let bandwidth_a = six.read(1)? != 0;
        let bandwidth_b = six.read(1)? != 0;
        let zone_size = six.read(3)? as u8;

        let region = if addressed {
            ChannelRegion::Addressed {
                mmsi1: (ne_longitude << 12) + (ne_latitude >> 5),
                mmsi2: (sw_longitude << 12) + (sw_latitude >> 5),
            }
        } else {
            ChannelRegion::Broadcast {
                north_east: Position::from_raw(ne_longitude * 10, ne_latitude * 10),
                south_west: Position::from_raw(sw_longitude * 10, sw_latitude * 10),
            }
        };

        Ok(ChannelManagement {
            repeat,
            mmsi,
            spare1,
            channel_a,
            channel_b,
            txrx_mode,
            power,
            region,
            bandwidth_a,
            bandwidth_b,
            zone_size,
        })
    }
}

/// Message 23: group assignment command.
///
/// Exactly 160 bits. The region corners are kept in their raw 1/10 minute
/// resolution as transmitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment {
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub spare1: u8,
    /// 18 bits : north-east corner longitude, 1/10 minute
    pub ne_longitude: u32,
    /// 17 bits : north-east corner latitude, 1/10 minute
    pub ne_latitude: u32,
    pub sw_longitude: u32,
    pub sw_latitude: u32,
    /// 4 bits : station type selector
    pub station_type: u8,
    pub ship_type: u8,
    pub spare2: u32,
    /// 2 bits : transmit/receive mode
    pub txrx_mode: u8,
    /// 4 bits : reporting interval selector
    pub interval: u8,
    /// 4 bits : quiet time in minutes, 0 = none
    pub quiet_time: u8,
    pub spare3: u8,
}

impl GroupAssignment {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        require_len(23, six, 160, 160)?;
        let (repeat, mmsi) = preamble(six)?;

        Ok(GroupAssignment {
            repeat,
            mmsi,
            spare1: six.read(2)? as u8,
            ne_longitude: six.read(18)?,
            ne_latitude: six.read(17)?,
            sw_longitude: six.read(18)?,
            sw_latitude: six.read(17)?,
            station_type: six.read(4)? as u8,
            ship_type: six.read(8)? as u8,
            spare2: six.read(22)?,
            txrx_mode: six.read(2)? as u8,
            interval: six.read(4)? as u8,
            quiet_time: six.read(4)? as u8,
            spare3: six.read(6)? as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::assemble;
    use super::*;

    #[test]
    fn broadcast_region() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,F01uEOD4t50@3r0?`0GL0vPD0000,0*18");
        assert_eq!(id, 22);
        let msg = ChannelManagement::decode(&mut six).unwrap();

        assert_eq!(msg.channel_a, 2087);
        assert_eq!(msg.channel_b, 2088);
        assert!(msg.power);
        assert_eq!(
            msg.region,
            ChannelRegion::Broadcast {
                north_east: Position {
                    longitude: 10_000,
                    latitude: 20_000,
                },
                south_west: Position {
                    longitude: 30_000,
                    latitude: 40_000,
                },
            }
        );
        assert!(msg.bandwidth_a);
        assert_eq!(msg.zone_size, 4);
    }

    #[test]
    fn addressed_stations() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,F01uEOD4t50@3r0?`0GL0vPl0000,0*30");
        assert_eq!(id, 22);
        let msg = ChannelManagement::decode(&mut six).unwrap();

        assert_eq!(
            msg.region,
            ChannelRegion::Addressed {
                mmsi1: 4_096_062,
                mmsi2: 12_288_125,
            }
        );
    }

    #[test]
    fn group_assignment() {
        let (id, mut six) = assemble("!AIVDM,1,1,,A,G02:Kn01e=0P03IB0p600000980,2*38");
        assert_eq!(id, 23);
        let msg = GroupAssignment::decode(&mut six).unwrap();

        assert_eq!(msg.mmsi, 2_268_120);
        assert_eq!(msg.ne_longitude, 1747);
        assert_eq!(msg.ne_latitude, 33_024);
        assert_eq!(msg.sw_longitude, 1738);
        assert_eq!(msg.sw_latitude, 32_992);
        assert_eq!(msg.station_type, 6);
        assert_eq!(msg.interval, 9);
        assert_eq!(msg.quiet_time, 2);
    }
}
