//! ITU-R M.1371 message catalog.
//!
//! Every message starts with the same preamble: 6-bit message id (consumed
//! during reassembly), 2-bit repeat indicator, 30-bit source MMSI. Each
//! decoder validates the total payload bit length against its published
//! exact value or range before reading a single field, so a partially
//! decoded record can never escape.
//!
//! The decoders are structural: field widths follow the wire contract and
//! values are left raw (an ETA is a 20-bit pattern here, not a date).

mod ack;
mod aton;
mod base_station;
mod binary;
mod channel;
mod class_b;
mod comm_state;
mod datalink;
mod inquiry;
mod interrogation;
mod position;
mod position_report;
mod safety;
mod sar;
mod static_report;
mod static_voyage;

pub use ack::Acknowledge;
pub use aton::AidToNavigation;
pub use base_station::UtcDateReport;
pub use binary::{AddressedBinary, BinaryBroadcast};
pub use channel::{ChannelManagement, ChannelRegion, GroupAssignment};
pub use class_b::{ClassBExtendedPosition, ClassBPosition};
pub use comm_state::{CommState, Itdma, Sotdma};
pub use datalink::{DataLinkManagement, SlotReservation};
pub use inquiry::UtcDateInquiry;
pub use interrogation::{Interrogation, InterrogationRequest};
pub use position::Position;
pub use position_report::PositionReport;
pub use safety::{AddressedSafety, SafetyBroadcast};
pub use sar::SarAircraftPosition;
pub use static_report::{StaticDataPart, StaticDataReport};
pub use static_voyage::StaticAndVoyage;

use serde::{Deserialize, Serialize};

use crate::sixbit::Sixbit;
use crate::{Error, Result};

/// 30-bit station identifier (Maritime Mobile Service Identity).
pub type Mmsi = u32;

/// A decoded AIS message, tagged by message id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum Message {
    /// Messages 1, 2, 3
    PositionReport(PositionReport),
    /// Message 4
    BaseStationReport(UtcDateReport),
    /// Message 5
    StaticAndVoyage(StaticAndVoyage),
    /// Message 6
    AddressedBinary(AddressedBinary),
    /// Message 7
    BinaryAcknowledge(Acknowledge),
    /// Message 8
    BinaryBroadcast(BinaryBroadcast),
    /// Message 9
    SarAircraftPosition(SarAircraftPosition),
    /// Message 10
    UtcDateInquiry(UtcDateInquiry),
    /// Message 11
    UtcDateResponse(UtcDateReport),
    /// Message 12
    AddressedSafety(AddressedSafety),
    /// Message 13
    SafetyAcknowledge(Acknowledge),
    /// Message 14
    SafetyBroadcast(SafetyBroadcast),
    /// Message 15
    Interrogation(Interrogation),
    /// Message 18
    ClassBPosition(ClassBPosition),
    /// Message 19
    ClassBExtendedPosition(ClassBExtendedPosition),
    /// Message 20
    DataLinkManagement(DataLinkManagement),
    /// Message 21
    AidToNavigation(AidToNavigation),
    /// Message 22
    ChannelManagement(ChannelManagement),
    /// Message 23
    GroupAssignment(GroupAssignment),
    /// Message 24
    StaticDataReport(StaticDataReport),
}

impl Message {
    /// Decode the message body for `message_id` from a stream positioned
    /// just past the 6-bit id, as handed out by
    /// [`Assembler`](crate::Assembler).
    ///
    /// # Errors
    /// [`Error::UnsupportedMessage`] for ids without a decoder;
    /// [`Error::WrongLength`] when the payload length does not match the
    /// type; bit-stream errors from the underlying reads.
    pub fn decode(message_id: u8, six: &mut Sixbit) -> Result<Message> {
        match message_id {
            1 | 2 | 3 => Ok(Message::PositionReport(PositionReport::decode(
                message_id, six,
            )?)),
            4 => Ok(Message::BaseStationReport(UtcDateReport::decode(4, six)?)),
            5 => Ok(Message::StaticAndVoyage(StaticAndVoyage::decode(six)?)),
            6 => Ok(Message::AddressedBinary(AddressedBinary::decode(six)?)),
            7 => Ok(Message::BinaryAcknowledge(Acknowledge::decode(7, six)?)),
            8 => Ok(Message::BinaryBroadcast(BinaryBroadcast::decode(six)?)),
            9 => Ok(Message::SarAircraftPosition(SarAircraftPosition::decode(
                six,
            )?)),
            10 => Ok(Message::UtcDateInquiry(UtcDateInquiry::decode(six)?)),
            11 => Ok(Message::UtcDateResponse(UtcDateReport::decode(11, six)?)),
            12 => Ok(Message::AddressedSafety(AddressedSafety::decode(six)?)),
            13 => Ok(Message::SafetyAcknowledge(Acknowledge::decode(13, six)?)),
            14 => Ok(Message::SafetyBroadcast(SafetyBroadcast::decode(six)?)),
            15 => Ok(Message::Interrogation(Interrogation::decode(six)?)),
            18 => Ok(Message::ClassBPosition(ClassBPosition::decode(six)?)),
            19 => Ok(Message::ClassBExtendedPosition(
                ClassBExtendedPosition::decode(six)?,
            )),
            20 => Ok(Message::DataLinkManagement(DataLinkManagement::decode(
                six,
            )?)),
            21 => Ok(Message::AidToNavigation(AidToNavigation::decode(six)?)),
            22 => Ok(Message::ChannelManagement(ChannelManagement::decode(six)?)),
            23 => Ok(Message::GroupAssignment(GroupAssignment::decode(six)?)),
            24 => Ok(Message::StaticDataReport(StaticDataReport::decode(six)?)),
            id => Err(Error::UnsupportedMessage(id)),
        }
    }

    /// The numeric message id of this record.
    #[must_use]
    pub fn id(&self) -> u8 {
        match self {
            Message::PositionReport(m) => m.message_id,
            Message::BaseStationReport(m) => m.message_id,
            Message::StaticAndVoyage(_) => 5,
            Message::AddressedBinary(_) => 6,
            Message::BinaryAcknowledge(m) => m.message_id,
            Message::BinaryBroadcast(_) => 8,
            Message::SarAircraftPosition(_) => 9,
            Message::UtcDateInquiry(_) => 10,
            Message::UtcDateResponse(m) => m.message_id,
            Message::AddressedSafety(_) => 12,
            Message::SafetyAcknowledge(m) => m.message_id,
            Message::SafetyBroadcast(_) => 14,
            Message::Interrogation(_) => 15,
            Message::ClassBPosition(_) => 18,
            Message::ClassBExtendedPosition(_) => 19,
            Message::DataLinkManagement(_) => 20,
            Message::AidToNavigation(_) => 21,
            Message::ChannelManagement(_) => 22,
            Message::GroupAssignment(_) => 23,
            Message::StaticDataReport(_) => 24,
        }
    }
}

/// Read the shared preamble: 2-bit repeat indicator and 30-bit MMSI.
pub(crate) fn preamble(six: &mut Sixbit) -> Result<(u8, Mmsi)> {
    Ok((six.read(2)? as u8, six.read(30)?))
}

/// Validate the total payload length for `message_id` against `[min, max]`
/// bits (use `min == max` for exact-length types).
pub(crate) fn require_len(message_id: u8, six: &Sixbit, min: u32, max: u32) -> Result<u32> {
    let bits = six.bit_len();
    if bits < min || bits > max {
        return Err(Error::WrongLength { message_id, bits });
    }
    Ok(bits)
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::{Assembler, Outcome, Sixbit};

    /// Run one sentence line through reassembly and return the stream
    /// positioned past the message id.
    pub fn assemble(line: &str) -> (u8, Sixbit) {
        let mut assembler = Assembler::new();
        match assembler.add(line).unwrap() {
            Outcome::Complete(assembled) => (assembled.message_id, assembled.sixbit),
            Outcome::Incomplete => panic!("fixture should be single-fragment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::assemble;
    use super::*;

    #[test]
    fn unsupported_message_id() {
        let mut six = Sixbit::new();
        six.append("0000");
        assert!(matches!(
            Message::decode(25, &mut six),
            Err(Error::UnsupportedMessage(25))
        ));
    }

    #[test]
    fn wrong_length_fails_before_any_field_read() {
        // A type-1 header with far too few bits for a position report.
        let (id, mut six) = assemble("!AIVDM,1,1,,A,19NS7Sp0,0*17");
        assert_eq!(id, 1);
        assert!(matches!(
            Message::decode(id, &mut six),
            Err(Error::WrongLength {
                message_id: 1,
                bits: 48
            })
        ));
        // Nothing past the id was consumed by the failed decode.
        assert_eq!(six.read(2).unwrap(), 0);
    }

    #[test]
    fn message_id_accessor_matches_variant() {
        let (id, mut six) =
            assemble("!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27");
        let msg = Message::decode(id, &mut six).unwrap();
        assert_eq!(msg.id(), 1);
    }

    #[test]
    fn decoded_record_serializes() {
        let (id, mut six) =
            assemble("!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27");
        let msg = Message::decode(id, &mut six).unwrap();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("636012431"));
    }
}
