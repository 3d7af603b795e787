//! Reversible binary-to-text codecs that pack arbitrary byte payloads into
//! printable password strings, with an optional zstd compression pass that
//! is used when it shortens the password.

pub mod base64;
pub mod base85;
pub mod base_common;
pub mod compression;
pub mod password;

pub use base_common::Alphabet;
pub use password::{decode, decode_exact, encode, Codec, Policy};
