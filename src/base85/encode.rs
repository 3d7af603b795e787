use super::{Alphabet, ALPHABET, POWERS};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    GroupOverflow { value: u32 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::GroupOverflow { value } => write!(f, "Group value {} does not fit in five digits", value),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<85>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<85>) -> Self {
        Self { alphabet }
    }

    /// Encodes into `output` and returns the encoded length. Each 4-byte
    /// group becomes a little-endian 32-bit value written as five base-85
    /// digits, least significant first; the final group is zero padded, so
    /// the output ends in zero characters that are trimmed, at most four.
    /// `output` must still hold the untrimmed `5 * ceil(len / 4)` bytes.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < input.len().div_ceil(4) * 5 {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        for group in input.chunks(4) {
            let mut bytes = [0u8; 4];
            bytes[..group.len()].copy_from_slice(group);
            let value = u32::from_le_bytes(bytes);

            let mut digits = [0u8; 5];
            let mut rest = value;
            for position in (0..5).rev() {
                let digit = rest / POWERS[position];
                if digit >= 85 {
                    return Err(Error::GroupOverflow { value });
                }
                digits[position] = digit as u8;
                rest -= digit * POWERS[position];
            }
            // the 85^0 division consumes the remainder entirely

            for &digit in &digits {
                output[index] = self.alphabet.encode(digit as usize);
                index += 1;
            }
        }
        let zero = self.alphabet.encode(0);
        let mut trimmed = 0;
        while trimmed < 4 && index > 0 && output[index - 1] == zero {
            index -= 1;
            trimmed += 1;
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let mut output = vec![0u8; input.as_ref().len().div_ceil(4) * 5];
        let len = self.encode_into(input, &mut output)?;
        output.truncate(len);
        Ok(unsafe { String::from_utf8_unchecked(output) })
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Encoder::default().encode(input)
}
