#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No `!` or `$` start marker, or the `*XX` checksum suffix is missing
    /// or malformed.
    #[error("malformed NMEA frame")]
    Framing,

    #[error("checksum mismatch: sentence says {expected:#04x}, computed {computed:#04x}")]
    Checksum { expected: u8, computed: u8 },

    /// The sentence tag is not VDM or VDO.
    #[error("not an AIS sentence")]
    NotAis,

    #[error("expected 8 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid {field} field: {value:?}")]
    FieldFormat {
        field: &'static str,
        value: String,
    },

    /// Fragment index gap or sequence-id mismatch while accumulating a
    /// multi-fragment message. The assembler has been reset to idle.
    #[error("out of sequence fragment: sequence {sequence}, index {index}")]
    OutOfSequence { sequence: u32, index: u32 },

    /// A hard read past the usable bits of the stream.
    #[error("ran out of bits")]
    BitsExhausted,

    /// A byte outside the 6-bit ASCII alphabet.
    #[error("invalid 6-bit ASCII value: {0:#04x}")]
    InvalidSymbol(u8),

    /// Payload bit length outside the allowed range for the message type.
    /// Raised before any field is decoded.
    #[error("message {message_id} wrong length: {bits} bits")]
    WrongLength { message_id: u8, bits: u32 },

    #[error("unsupported message id {0}")]
    UnsupportedMessage(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
