//! Hex literal encoding of file contents.

use crate::assets::EncodedAsset;
use crate::progress::ProgressObserver;
use std::io::{self, Read};
use thiserror::Error;

/// Size of the buffer files are read through.
pub const CHUNK_SIZE: usize = 4096;

/// Number of byte literals per line of an encoded fragment.
pub const BYTES_PER_LINE: u64 = 20;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes of literal text produced for each input byte (`0xHH, `).
const TOKEN_LEN: usize = 6;

/// Renders byte streams as comma separated `0xHH` literals.
///
/// Lines are wrapped after every [`BYTES_PER_LINE`] bytes and each line starts
/// with `indent`, which lets a template drop the fragment straight into its
/// array syntax.
#[derive(Clone, Copy, Debug)]
pub struct HexEncoder<'a> {
    indent: &'a str,
}

impl<'a> HexEncoder<'a> {
    pub fn new(indent: &'a str) -> Self {
        Self { indent }
    }

    /// Encodes everything `reader` yields.
    ///
    /// `size_hint` is the declared size of the stream and only sizes the output
    /// buffer. Interrupted reads are retried, any other read error is returned
    /// as is.
    pub fn encode<R, O>(
        &self,
        mut reader: R,
        size_hint: u64,
        observer: &mut O,
    ) -> io::Result<EncodedAsset>
    where
        R: Read,
        O: ProgressObserver + ?Sized,
    {
        let mut fragment = String::with_capacity(self.capacity_for(size_hint));
        let mut buf = [0u8; CHUNK_SIZE];
        let mut total: u64 = 0;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            for &byte in &buf[..n] {
                self.push_byte(&mut fragment, byte, total);
                total += 1;
            }
            observer.chunk_processed(n);
        }

        Ok(EncodedAsset::new(fragment, total))
    }

    /// Encodes an in-memory buffer.
    pub fn encode_bytes(&self, bytes: &[u8]) -> EncodedAsset {
        let mut fragment = String::with_capacity(self.capacity_for(bytes.len() as u64));
        for (index, &byte) in bytes.iter().enumerate() {
            self.push_byte(&mut fragment, byte, index as u64);
        }
        EncodedAsset::new(fragment, bytes.len() as u64)
    }

    fn push_byte(&self, fragment: &mut String, byte: u8, index: u64) {
        if index == 0 {
            fragment.push_str(self.indent);
        } else if index % BYTES_PER_LINE == 0 {
            fragment.push('\n');
            fragment.push_str(self.indent);
        }
        fragment.push_str("0x");
        fragment.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        fragment.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
        fragment.push_str(", ");
    }

    fn capacity_for(&self, size: u64) -> usize {
        let size = usize::try_from(size).unwrap_or(0);
        let lines = size.div_ceil(BYTES_PER_LINE as usize);
        size.saturating_mul(TOKEN_LEN)
            .saturating_add(lines.saturating_mul(self.indent.len() + 1))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid byte literal '{0}'")]
    InvalidToken(String),
}

/// Parses an encoded fragment back into the bytes it was produced from.
///
/// Tokens are separated by commas and whitespace, each must be `0x` followed by
/// exactly two hex digits.
pub fn decode_fragment(fragment: &str) -> Result<Vec<u8>, DecodeError> {
    fragment
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(decode_token)
        .collect()
}

fn decode_token(token: &str) -> Result<u8, DecodeError> {
    let invalid = || DecodeError::InvalidToken(token.to_string());
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .ok_or_else(invalid)?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(digits, 16).map_err(|_| invalid())
}
