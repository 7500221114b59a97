use serde::{Deserialize, Serialize};

use crate::sixbit::Sixbit;
use crate::Result;

/// SOTDMA communication state: slot-access scheduling for stations that
/// self-organize around a frame map.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sotdma {
    /// 2 bits : sync state
    pub sync_state: u8,
    /// 3 bits : slot timeout
    pub slot_timeout: u8,
    /// 14 bits : sub-message, meaning varies with slot timeout
    pub sub_message: u16,
}

impl Sotdma {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        Ok(Sotdma {
            sync_state: six.read(2)? as u8,
            slot_timeout: six.read(3)? as u8,
            sub_message: six.read(14)? as u16,
        })
    }
}

/// ITDMA communication state: incremental slot allocation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Itdma {
    /// 2 bits : sync state
    pub sync_state: u8,
    /// 13 bits : slot increment
    pub slot_increment: u16,
    /// 3 bits : number of slots
    pub num_slots: u8,
    /// 1 bit : keep flag
    pub keep: bool,
}

impl Itdma {
    pub(crate) fn decode(six: &mut Sixbit) -> Result<Self> {
        Ok(Itdma {
            sync_state: six.read(2)? as u8,
            slot_increment: six.read(13)? as u16,
            num_slots: six.read(3)? as u8,
            keep: six.read(1)? == 1,
        })
    }
}

/// Communication state carried by position reports; the two variants are
/// mutually exclusive.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommState {
    Sotdma(Sotdma),
    Itdma(Itdma),
}

impl CommState {
    /// Decode after a 1-bit selector: 0 selects SOTDMA, 1 ITDMA.
    pub(crate) fn decode_selected(selector: u32, six: &mut Sixbit) -> Result<Self> {
        if selector == 0 {
            Ok(CommState::Sotdma(Sotdma::decode(six)?))
        } else {
            Ok(CommState::Itdma(Itdma::decode(six)?))
        }
    }
}
