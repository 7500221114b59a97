//! Reassembly of multi-fragment AIS payloads.
//!
//! The NMEA line-length limit forces long messages (message 5 is the usual
//! case) to span several VDM sentences. [Assembler] collects the fragments
//! of one logical message at a time and yields the assembled bit stream once
//! the last fragment has arrived.

use tracing::{debug, trace};

use crate::sentence::Sentence;
use crate::sixbit::Sixbit;
use crate::{Error, Result};

/// Result of feeding one sentence line to the assembler.
#[derive(Debug)]
pub enum Outcome {
    /// More fragments are needed for the in-progress message.
    Incomplete,
    /// A logical message is complete and ready for decoding.
    Complete(Assembled),
}

/// A fully reassembled payload.
///
/// The stream is positioned just past the 6-bit message id, ready for the
/// shared preamble read and message-specific decoding, typically through
/// [`Message::decode`](crate::Message::decode).
#[derive(Debug)]
pub struct Assembled {
    /// Message id from the first 6 bits of the payload.
    pub message_id: u8,
    /// Radio channel of the final fragment.
    pub channel: char,
    pub sixbit: Sixbit,
}

/// Tracks one in-progress logical message.
///
/// Fragments must arrive in index order with a consistent sequence id; a
/// gap or sequence change drops the partial message and resets to idle.
/// One assembler serves one sentence source; use one instance per source
/// when mixing feeds.
#[derive(Debug, Default)]
pub struct Assembler {
    /// Expected fragment count; 0 while idle.
    total: u32,
    /// Index of the last accepted fragment.
    index: u32,
    /// Sequence id of the in-progress message.
    sequence: u32,
    channel: char,
    sixbit: Sixbit,
}

impl Assembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no partial message is being accumulated.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.total == 0
    }

    /// Parse one raw sentence line and feed it to the assembler.
    ///
    /// Framing, checksum, and field errors from [`Sentence::parse`] pass
    /// through without touching any in-progress accumulation, so one
    /// corrupt line cannot break an unrelated multi-fragment message.
    ///
    /// # Errors
    /// Any [`Sentence::parse`] error; [`Error::OutOfSequence`] on a
    /// fragment gap or sequence-id change (this resets the assembler);
    /// [`Error::BitsExhausted`] if a completed payload is shorter than the
    /// 6-bit message id. The assembler is idle again after either error.
    pub fn add(&mut self, line: &str) -> Result<Outcome> {
        let sentence = Sentence::parse(line)?;
        self.accept(sentence)
    }

    /// Feed an already-parsed sentence to the assembler.
    pub fn accept(&mut self, sentence: Sentence) -> Result<Outcome> {
        trace!(
            total = sentence.total,
            index = sentence.index,
            sequence = sentence.sequence,
            channel = %sentence.channel,
            "fragment"
        );

        if self.total > 0 {
            if self.sequence != sentence.sequence || self.index + 1 != sentence.index {
                debug!(
                    expected_sequence = self.sequence,
                    expected_index = self.index + 1,
                    got_sequence = sentence.sequence,
                    got_index = sentence.index,
                    "out of sequence fragment, dropping partial message"
                );
                self.reset();
                return Err(Error::OutOfSequence {
                    sequence: sentence.sequence,
                    index: sentence.index,
                });
            }
            self.index += 1;
        } else {
            if sentence.index != 1 {
                // A continuation with no first fragment; nothing to resume.
                return Err(Error::OutOfSequence {
                    sequence: sentence.sequence,
                    index: sentence.index,
                });
            }
            self.total = sentence.total;
            self.index = 1;
            self.sequence = sentence.sequence;
            self.sixbit = Sixbit::new();
        }

        self.channel = sentence.channel;
        self.sixbit.append(&sentence.payload);

        if self.index < self.total {
            return Ok(Outcome::Incomplete);
        }

        // Final fragment: its fill bits apply to the whole stream. Take the
        // stream and return to idle before touching it, so a failed id read
        // cannot strand the assembler mid-message.
        self.sixbit.set_fill_bits(sentence.fill_bits);
        let mut sixbit = std::mem::take(&mut self.sixbit);
        let channel = self.channel;
        self.reset();
        let message_id = sixbit.read(6)? as u8;
        trace!(message_id, bits = sixbit.bit_len(), "message complete");

        Ok(Outcome::Complete(Assembled {
            message_id,
            channel,
            sixbit,
        }))
    }

    fn reset(&mut self) {
        self.total = 0;
        self.index = 0;
        self.sequence = 0;
        self.sixbit = Sixbit::new();
    }
}
