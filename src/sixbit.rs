//! 6-bit packed ASCII bit-stream extraction.
//!
//! AIS payloads arrive as ASCII characters each carrying 6 bits of data.
//! [Sixbit] accumulates those characters across sentence fragments and hands
//! out arbitrary-width integer and text fields, most-significant-bit first.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Convert a payload ASCII byte to its 6-bit binary value.
///
/// # Errors
/// [`Error::InvalidSymbol`] for bytes outside `0x30..=0x57` / `0x60..=0x77`.
pub fn symbol_to_bits(ascii: u8) -> Result<u8> {
    match ascii {
        0x30..=0x57 => Ok((ascii - 0x30) & 0x3f),
        0x60..=0x77 => Ok((ascii - 0x38) & 0x3f),
        _ => Err(Error::InvalidSymbol(ascii)),
    }
}

/// Convert a 6-bit value from the data stream to its text character.
///
/// This is the table for strings carried *inside* the payload (ship name,
/// callsign, destination), not the payload transport encoding above.
#[must_use]
pub fn bits_to_char(value: u8) -> char {
    debug_assert!(value <= 0x3f);
    if value < 0x20 {
        char::from(value + 0x40)
    } else {
        char::from(value)
    }
}

const REMAINDER_MASK: [u8; 7] = [0x00, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f];

/// A destructive, forward-only reader over a 6-bit packed ASCII payload.
///
/// The stream is created empty, extended with [`Sixbit::append`] as sentence
/// fragments arrive, and consumed by sequential [`Sixbit::read`] calls once
/// reassembly is complete. Reads are not replayable; this mirrors a streaming
/// radio receiver.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Sixbit {
    /// Raw 6-bit ASCII payload characters.
    data: Vec<u8>,
    /// Index of the next undecoded character.
    cursor: usize,
    /// Unconsumed bits left over from the last decoded character.
    remainder: u8,
    remainder_len: u8,
    /// Number of trailing pad bits in the final character.
    fill_bits: u8,
}

impl Sixbit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the backing payload with more 6-bit ASCII characters.
    ///
    /// Characters are validated lazily, when a `read` first consumes them.
    pub fn append(&mut self, symbols: &str) {
        self.data.extend_from_slice(symbols.as_bytes());
    }

    /// Declare how many low bits of the final character are padding.
    pub fn set_fill_bits(&mut self, n: u8) {
        debug_assert!(n <= 5);
        self.fill_bits = n;
    }

    /// Total usable bits in the stream, including any already consumed.
    ///
    /// Fill bits only ever pad a final character, so an empty stream has
    /// zero bits no matter what was declared.
    #[must_use]
    pub fn bit_len(&self) -> u32 {
        (self.data.len() as u32 * 6).saturating_sub(u32::from(self.fill_bits))
    }

    /// Read the next `width` bits (1 to 32) as an unsigned integer, MSB
    /// first, consuming them.
    ///
    /// # Errors
    /// [`Error::BitsExhausted`] if fewer than `width` bits remain;
    /// [`Error::InvalidSymbol`] if a payload byte is outside the alphabet.
    pub fn read(&mut self, width: u32) -> Result<u32> {
        assert!(width >= 1 && width <= 32, "read width out of range");
        let mut result: u64 = 0;
        let mut need = width;

        while need > 0 {
            if self.remainder_len > 0 {
                let avail = u32::from(self.remainder_len);
                if avail <= need {
                    result = (result << avail) | u64::from(self.remainder);
                    need -= avail;
                    self.remainder = 0;
                    self.remainder_len = 0;
                } else {
                    // Take `need` bits off the top of the remainder.
                    result = (result << need) | u64::from(self.remainder >> (avail - need));
                    self.remainder_len -= need as u8;
                    self.remainder &= REMAINDER_MASK[self.remainder_len as usize];
                    return Ok(result as u32);
                }
            }
            if need == 0 {
                break;
            }

            if self.cursor >= self.data.len() {
                return Err(Error::BitsExhausted);
            }
            let value = symbol_to_bits(self.data[self.cursor])?;
            self.cursor += 1;
            if self.cursor == self.data.len() {
                // Pad bits in the final character are not data.
                self.remainder = value >> self.fill_bits;
                self.remainder_len = 6 - self.fill_bits;
            } else {
                self.remainder = value;
                self.remainder_len = 6;
            }
        }

        Ok(result as u32)
    }

    /// Read `count` text characters, 6 bits each.
    ///
    /// Running out of bits mid-string is common in historical data and is
    /// not an error: the remaining characters are filled with `'@'`, the
    /// AIS "unset" character.
    ///
    /// # Errors
    /// [`Error::InvalidSymbol`] only; exhaustion degrades to padding.
    pub fn read_string(&mut self, count: usize) -> Result<String> {
        let mut out = String::with_capacity(count);
        for i in 0..count {
            match self.read(6) {
                Ok(v) => out.push(bits_to_char(v as u8)),
                Err(Error::BitsExhausted) => {
                    for _ in i..count {
                        out.push('@');
                    }
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(payload: &str) -> Sixbit {
        let mut six = Sixbit::new();
        six.append(payload);
        six
    }

    #[test]
    fn symbol_alphabet() {
        assert_eq!(symbol_to_bits(b'0').unwrap(), 0);
        assert_eq!(symbol_to_bits(b'W').unwrap(), 0x27);
        assert_eq!(symbol_to_bits(b'`').unwrap(), 0x28);
        assert_eq!(symbol_to_bits(b'w').unwrap(), 0x3f);

        for bad in [0x2fu8, 0x58, 0x5f, 0x78, b' '] {
            assert!(matches!(
                symbol_to_bits(bad),
                Err(Error::InvalidSymbol(b)) if b == bad
            ));
        }
    }

    #[test]
    fn text_table_offsets_control_range() {
        assert_eq!(bits_to_char(0), '@');
        assert_eq!(bits_to_char(1), 'A');
        assert_eq!(bits_to_char(0x1f), '_');
        assert_eq!(bits_to_char(0x20), ' ');
        assert_eq!(bits_to_char(0x3f), '?');
    }

    #[test]
    fn read_within_one_symbol() {
        // 'w' = 0b111111, '0' = 0b000000
        let mut six = stream("w0");
        assert_eq!(six.read(3).unwrap(), 0b111);
        assert_eq!(six.read(3).unwrap(), 0b111);
        assert_eq!(six.read(6).unwrap(), 0);
    }

    #[test]
    fn read_spans_symbols_msb_first() {
        // '1' = 000001, '2' = 000010 -> 12 bits 000001_000010
        let mut six = stream("12");
        assert_eq!(six.read(12).unwrap(), 0b0000_0100_0010);

        let mut six = stream("12");
        assert_eq!(six.read(8).unwrap(), 0b0000_0100);
        assert_eq!(six.read(4).unwrap(), 0b0010);
    }

    #[test]
    fn read_32_bits_across_many_symbols() {
        // six 'w' symbols = 36 set bits
        let mut six = stream("wwwwww");
        assert_eq!(six.read(32).unwrap(), u32::MAX);
        assert_eq!(six.read(4).unwrap(), 0b1111);
    }

    #[test]
    fn fill_bits_shorten_the_stream() {
        let mut six = stream("ww");
        six.set_fill_bits(4);
        assert_eq!(six.bit_len(), 8);
        assert_eq!(six.read(8).unwrap(), 0xff);
        assert!(matches!(six.read(1), Err(Error::BitsExhausted)));
    }

    #[test]
    fn fill_bits_are_dropped_not_read() {
        // '1' = 000001, 'w' = 111111 with 5 fill bits leaves one usable
        // bit, the MSB of the final symbol.
        let mut six = stream("1w");
        six.set_fill_bits(5);
        assert_eq!(six.bit_len(), 7);
        assert_eq!(six.read(7).unwrap(), 0b0000011);
    }

    #[test]
    fn read_accounts_for_every_usable_bit() {
        let mut six = stream("19NS7Sp0");
        six.set_fill_bits(2);
        let mut total = 0;
        for width in [6, 2, 30, 4, 3, 1] {
            six.read(width).unwrap();
            total += width;
        }
        assert_eq!(total, six.bit_len());
        assert!(matches!(six.read(1), Err(Error::BitsExhausted)));
    }

    #[test]
    fn fill_bits_on_empty_stream() {
        let mut six = Sixbit::new();
        six.set_fill_bits(2);
        assert_eq!(six.bit_len(), 0);
        assert!(matches!(six.read(1), Err(Error::BitsExhausted)));
    }

    #[test]
    fn exhausted_read_fails_hard() {
        let mut six = stream("0");
        assert!(matches!(six.read(7), Err(Error::BitsExhausted)));
    }

    #[test]
    fn invalid_symbol_fails_at_read_time() {
        let mut six = stream("0 0");
        assert_eq!(six.read(6).unwrap(), 0);
        assert!(matches!(six.read(6), Err(Error::InvalidSymbol(0x20))));
    }

    #[test]
    fn append_accumulates_fragments() {
        let mut six = Sixbit::new();
        six.append("12");
        six.append("34");
        assert_eq!(six.bit_len(), 24);
        assert_eq!(six.read(24).unwrap(), 0b000001_000010_000011_000100);
    }

    #[test]
    fn read_string_maps_text() {
        // 'C' carries value 0x13 = 'S' - 0x40... build "SOS" from values
        // 19, 15, 19 -> symbols 'C', '?', 'C'
        let mut six = stream("C?C");
        assert_eq!(six.read_string(3).unwrap(), "SOS");
    }

    #[test]
    fn read_string_pads_with_at_on_exhaustion() {
        let mut six = stream("C?C");
        assert_eq!(six.read_string(5).unwrap(), "SOS@@");
    }

    #[test]
    fn read_string_still_fails_on_invalid_symbol() {
        let mut six = stream("C C");
        assert!(matches!(
            six.read_string(3),
            Err(Error::InvalidSymbol(0x20))
        ));
    }
}
