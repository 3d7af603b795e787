use crate::base85;
use crate::compression::{self, ContentSize};
use std::{error, fmt};

/// When the compressed form of a payload is used instead of the raw form.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Policy {
    Never,
    WhenSmaller,
    Always,
}

#[derive(Debug)]
pub enum Error {
    Encode(base85::encode::Error),
    Decode(base85::decode::Error),
    Compression(compression::Error),
    UnknownContentSize,
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(error) => write!(f, "{}", error),
            Self::Decode(error) => write!(f, "{}", error),
            Self::Compression(error) => write!(f, "{}", error),
            Self::UnknownContentSize => write!(f, "Cannot determine decompressed size"),
            Self::LengthMismatch { expected, actual } => write!(f, "Expected {} bytes, decoded {}", expected, actual),
        }
    }
}

impl From<base85::encode::Error> for Error {
    fn from(error: base85::encode::Error) -> Self {
        Self::Encode(error)
    }
}

impl From<base85::decode::Error> for Error {
    fn from(error: base85::decode::Error) -> Self {
        Self::Decode(error)
    }
}

impl From<compression::Error> for Error {
    fn from(error: compression::Error) -> Self {
        Self::Compression(error)
    }
}

pub struct Codec {
    policy: Policy,
    level: i32,
}

impl Codec {
    pub const fn new(policy: Policy, level: i32) -> Self {
        Self { policy, level }
    }

    /// Encodes `data` as a printable password, picking the shorter of the
    /// plain base85 form and the compressed-then-encoded form. Ties keep
    /// the plain form.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> Result<String, Error> {
        let data = data.as_ref();
        let plain = base85::encode(data)?;
        if let Policy::Never = self.policy {
            return Ok(plain);
        }
        let compressed = base85::encode(compression::compress(data, self.level)?)?;
        if self.policy == Policy::Always || compressed.len() < plain.len() {
            Ok(compressed)
        } else {
            Ok(plain)
        }
    }

    /// Decodes a password produced by [`Codec::encode`]. The two forms
    /// share one wire format with no flag byte: a payload whose frame
    /// header declares a decompressed size is decompressed to exactly that
    /// size, anything the header rejects is the raw payload, returned
    /// as-is with up to three trailing zero bytes of group padding (see
    /// [`Codec::decode_exact`]). A raw payload that itself starts with a
    /// frame header is indistinguishable from a compressed one.
    pub fn decode(&self, password: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let decoded = base85::decode(password)?;
        match compression::content_size(&decoded) {
            ContentSize::Invalid => Ok(decoded),
            ContentSize::Unknown => Err(Error::UnknownContentSize),
            ContentSize::Size(size) => {
                let frame = compression::frame_size(&decoded)?;
                Ok(compression::decompress(&decoded[..frame], size)?)
            }
        }
    }

    /// Decodes a password whose payload length the caller knows, stripping
    /// the group padding a raw password leaves behind.
    pub fn decode_exact(&self, password: impl AsRef<[u8]>, length: usize) -> Result<Vec<u8>, Error> {
        let mut data = self.decode(password)?;
        let padded = data.len() >= length && data.len() - length < 4 && data[length..].iter().all(|&value| value == 0);
        if !padded {
            return Err(Error::LengthMismatch {
                expected: length,
                actual: data.len(),
            });
        }
        data.truncate(length);
        Ok(data)
    }

    pub fn default() -> &'static Self {
        &CODEC
    }
}

const CODEC: Codec = Codec::new(Policy::WhenSmaller, compression::DEFAULT_LEVEL);

pub fn encode(data: impl AsRef<[u8]>) -> Result<String, Error> {
    Codec::default().encode(data)
}

pub fn decode(password: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Codec::default().decode(password)
}

pub fn decode_exact(password: impl AsRef<[u8]>, length: usize) -> Result<Vec<u8>, Error> {
    Codec::default().decode_exact(password, length)
}
