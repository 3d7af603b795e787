pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

pub const ALPHABET: Alphabet<64> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

#[cfg(test)]
mod tests {
    #[test]
    fn round_trip() {
        let data: Vec<u8> = (0u8..=255).collect();
        for length in 0..=data.len() {
            let encoded = super::encode(&data[..length]);
            assert_eq!(encoded.len(), (length * 8).div_ceil(6));
            assert!(encoded.bytes().all(|character| super::ALPHABET.decode(character, 0).is_ok()));
            assert_eq!(super::decode(&encoded), Ok(data[..length].to_vec()));
        }
    }
}
