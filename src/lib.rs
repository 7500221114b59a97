#![doc = include_str!("../README.md")]

mod assembler;
mod error;
pub mod messages;
pub mod sentence;
pub mod sixbit;

pub use assembler::{Assembled, Assembler, Outcome};
pub use error::{Error, Result};
pub use messages::Message;
pub use sentence::Sentence;
pub use sixbit::Sixbit;
