//! The flat `KEY=VALUE` text format used for everything that survives a restart.

mod codec;
mod custom_data;


pub use codec::{decode_line, decode_point, encode_line, encode_point};
pub use custom_data::CustomData;
