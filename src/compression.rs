use std::{error, fmt, io};

pub const DEFAULT_LEVEL: i32 = 3;

#[derive(Debug)]
pub enum Error {
    Compress(io::Error),
    Decompress(io::Error),
    Frame(&'static str),
    ContentSizeTooLarge { size: u64 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compress(error) => write!(f, "Compression failed: {}", error),
            Self::Decompress(error) => write!(f, "Decompression failed: {}", error),
            Self::Frame(message) => write!(f, "Invalid frame: {}", message),
            Self::ContentSizeTooLarge { size } => write!(f, "Declared content size {} does not fit in memory", size),
        }
    }
}

/// What the frame header at the start of a buffer declares about its
/// decompressed size.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContentSize {
    Size(u64),
    Unknown,
    Invalid,
}

pub fn compress_bound(length: usize) -> usize {
    zstd::zstd_safe::compress_bound(length)
}

pub fn compress(data: impl AsRef<[u8]>, level: i32) -> Result<Vec<u8>, Error> {
    zstd::bulk::compress(data.as_ref(), level).map_err(Error::Compress)
}

pub fn content_size(data: impl AsRef<[u8]>) -> ContentSize {
    match zstd::zstd_safe::get_frame_content_size(data.as_ref()) {
        Ok(Some(size)) => ContentSize::Size(size),
        Ok(None) => ContentSize::Unknown,
        Err(_) => ContentSize::Invalid,
    }
}

/// Compressed byte count of the frame at the head of `data`, which may be
/// followed by unrelated trailing bytes.
pub fn frame_size(data: impl AsRef<[u8]>) -> Result<usize, Error> {
    zstd::zstd_safe::find_frame_compressed_size(data.as_ref()).map_err(|code| Error::Frame(zstd::zstd_safe::get_error_name(code)))
}

pub fn decompress(data: impl AsRef<[u8]>, content_size: u64) -> Result<Vec<u8>, Error> {
    let capacity = usize::try_from(content_size).map_err(|_| Error::ContentSizeTooLarge { size: content_size })?;
    zstd::bulk::decompress(data.as_ref(), capacity).map_err(Error::Decompress)
}

#[cfg(test)]
mod tests {
    use super::ContentSize;

    #[test]
    fn round_trip() {
        let data = b"around and around and around the codec goes".repeat(4);
        let compressed = super::compress(&data, super::DEFAULT_LEVEL).unwrap();
        assert!(compressed.len() <= super::compress_bound(data.len()));
        assert_eq!(super::content_size(&compressed), ContentSize::Size(data.len() as u64));
        assert_eq!(super::frame_size(&compressed).unwrap(), compressed.len());
        assert_eq!(super::decompress(&compressed, data.len() as u64).unwrap(), data);
    }

    #[test]
    fn frame_size_ignores_trailing_bytes() {
        let compressed = super::compress(b"framed", super::DEFAULT_LEVEL).unwrap();
        let mut padded = compressed.clone();
        padded.extend_from_slice(&[0, 0, 0]);
        assert_eq!(super::frame_size(&padded).unwrap(), compressed.len());
        assert_eq!(super::content_size(&padded), ContentSize::Size(6));
    }

    #[test]
    fn foreign_bytes_are_not_a_frame() {
        assert_eq!(super::content_size(b"no frame here"), ContentSize::Invalid);
        assert_eq!(super::content_size(b""), ContentSize::Invalid);
    }
}
