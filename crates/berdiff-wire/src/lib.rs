#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod length;
pub mod mode;
pub mod tag;

pub use cursor::Cursor;
pub use error::WireError;
pub use length::{Length, LengthForm, LengthValue, decode_length};
pub use mode::ParseMode;
pub use tag::{Tag, TagClass, decode_tag};
