pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

pub const ALPHABET: Alphabet<85> = match Alphabet::contiguous(b'!') {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub(crate) const POWERS: [u32; 5] = [1, 85, 85 * 85, 85 * 85 * 85, 85 * 85 * 85 * 85];
