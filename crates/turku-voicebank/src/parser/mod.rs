//! Oto record parser - embedded in turku-voicebank
//!
//! Line-oriented parser for the classic oto.ini record format.

mod error;
mod parse;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub use parse::parse_oto_str;
