use super::{Alphabet, ALPHABET, POWERS};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    GroupOverflow { index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Error::GroupOverflow { index } => write!(f, "Symbol group at index {} exceeds 32 bits", index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<85>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<85>) -> Self {
        Self { alphabet }
    }

    /// Decodes into `output` and returns the decoded length, always
    /// `4 * ceil(len / 5)`. A final partial group is completed with the
    /// zero character, undoing the encoder's trim, so the tail may carry
    /// up to three zero bytes past the original payload; the caller
    /// truncates using a length it knows from elsewhere.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < input.len().div_ceil(5) * 4 {
            return Err(Error::BufferTooSmall);
        }
        let zero = self.alphabet.encode(0);
        let mut index = 0;
        for (group_index, group) in input.chunks(5).enumerate() {
            let mut symbols = [zero; 5];
            symbols[..group.len()].copy_from_slice(group);

            let mut value: u64 = 0;
            for (position, &symbol) in symbols.iter().enumerate() {
                let digit = self.alphabet.decode(symbol, group_index * 5 + position)?;
                value += digit as u64 * POWERS[position] as u64;
            }
            let value = u32::try_from(value).map_err(|_| Error::GroupOverflow { index: group_index * 5 })?;

            output[index..index + 4].copy_from_slice(&value.to_le_bytes());
            index += 4;
        }
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; input.len().div_ceil(5) * 4];
        let len = self.decode_into(input, &mut output)?;
        assert_eq!(len, output.len());
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("!"), Ok(vec![0x00, 0x00, 0x00, 0x00]));
        assert_eq!(super::decode("!!!!!!"), Ok(vec![0x00; 8]));
        assert_eq!(super::decode("\""), Ok(vec![0x01, 0x00, 0x00, 0x00]));
        assert_eq!(super::decode("!-W8s"), Ok(vec![0xff, 0xff, 0xff, 0xff]));
        assert_eq!(super::decode("O>#"), Ok(vec![0x41, 0x42, 0x00, 0x00]));
        assert_eq!(super::decode("=(0("), Ok(vec![0x41, 0x42, 0x43, 0x00]));
        assert_eq!(super::decode(",:jp6"), Ok(vec![0x41, 0x42, 0x43, 0x44]));
        assert_eq!(super::decode(",:jp6f"), Ok(vec![0x41, 0x42, 0x43, 0x44, 0x45, 0x00, 0x00, 0x00]));
        assert_eq!(super::decode("b!!!!c"), Ok(vec![0x41, 0x00, 0x00, 0x00, 0x42, 0x00, 0x00, 0x00]));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(super::decode(" "), Err(Error::InvalidCharacter { character: ' ', index: 0 }));
        assert_eq!(super::decode("!!v"), Err(Error::InvalidCharacter { character: 'v', index: 2 }));
        assert_eq!(super::decode([b'!', 0x80]), Err(Error::NonAsciiCharacter { character: 0x80, index: 1 }));
        assert_eq!(super::decode("uuuuu"), Err(Error::GroupOverflow { index: 0 }));
        assert_eq!(super::decode("!!!!!uuuuu"), Err(Error::GroupOverflow { index: 5 }));
    }
}
