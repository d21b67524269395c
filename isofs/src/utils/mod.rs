//! Byte, string, date and sector helpers shared by the parsers

pub mod bytes;
pub mod datetime;
pub mod sector;
pub mod string;
