//! NMEA 0183 sentence framing for AIVDM/AIVDO.
//!
//! A sentence looks like
//! `!AIVDM,<total>,<index>,<seq>,<channel>,<payload>,<fill>*<checksum>`
//! where the checksum is the XOR of every byte between the leading `!`/`$`
//! and the `*`, as two hex digits.

use crate::{Error, Result};

/// One parsed AIVDM/AIVDO sentence, holding a single payload fragment.
///
/// Ephemeral: constructed per raw line and consumed by
/// [`Assembler::add`](crate::Assembler::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// `true` for VDO (own ship), `false` for VDM.
    pub own_ship: bool,
    /// Total number of fragments in this logical message.
    pub total: u32,
    /// 1-based index of this fragment.
    pub index: u32,
    /// Sequential message id linking fragments; 0 if the field was empty.
    pub sequence: u32,
    /// Radio channel character, usually `A` or `B`.
    pub channel: char,
    /// Raw 6-bit ASCII payload fragment.
    pub payload: String,
    /// Trailing pad bits in the final payload character, 0 to 5.
    pub fill_bits: u8,
}

/// XOR checksum over the bytes of `body`, per NMEA 0183.
#[must_use]
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |sum, b| sum ^ b)
}

impl Sentence {
    /// Parse and checksum-verify one raw sentence line.
    ///
    /// Trailing line terminators are ignored. The five-character sentence
    /// tag may carry any talker id; only the `VDM`/`VDO` suffix is
    /// significant. An empty sequence field is not an error and reads as 0.
    ///
    /// # Errors
    /// [`Error::Framing`], [`Error::Checksum`], [`Error::NotAis`],
    /// [`Error::FieldCount`], or [`Error::FieldFormat`] as described on
    /// each variant.
    pub fn parse(line: &str) -> Result<Sentence> {
        let line = line.trim_end();
        let start = line.find(['!', '$']).ok_or(Error::Framing)?;
        let body = &line[start + 1..];

        let star = body.rfind('*').ok_or(Error::Framing)?;
        let expected =
            u8::from_str_radix(body.get(star + 1..star + 3).ok_or(Error::Framing)?, 16)
                .map_err(|_| Error::Framing)?;
        let computed = checksum(&body[..star]);
        if computed != expected {
            return Err(Error::Checksum { expected, computed });
        }

        match body.get(2..5) {
            Some("VDM" | "VDO") => {}
            _ => return Err(Error::NotAis),
        }
        let own_ship = &body[2..5] == "VDO";

        let fields: Vec<&str> = body[..star + 3]
            .split([',', '*'])
            .collect();
        if fields.len() != 8 {
            return Err(Error::FieldCount(fields.len()));
        }

        let total = parse_int(fields[1], "fragment total")?;
        let index = parse_int(fields[2], "fragment index")?;
        if total < 1 || index < 1 || index > total {
            return Err(Error::FieldFormat {
                field: "fragment index",
                value: format!("{index} of {total}"),
            });
        }
        // Absent sequence id is common for single-fragment traffic.
        let sequence = fields[3].parse().unwrap_or(0);

        let channel = fields[4].chars().next().ok_or(Error::FieldFormat {
            field: "channel",
            value: String::new(),
        })?;
        let payload = fields[5].to_string();

        let fill_bits: u8 = parse_int(fields[6], "fill bits")?;
        if fill_bits > 5 {
            return Err(Error::FieldFormat {
                field: "fill bits",
                value: fields[6].to_string(),
            });
        }

        Ok(Sentence {
            own_ship,
            total,
            index,
            sequence,
            channel,
            payload,
            fill_bits,
        })
    }
}

fn parse_int<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T> {
    value.parse().map_err(|_| Error::FieldFormat {
        field,
        value: value.to_string(),
    })
}
