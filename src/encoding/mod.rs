//! # Text Transcoders
//!
//! Conversions between binary data and the text forms OpenPGP uses:
//! hex fingerprints, Radix-64 (base64) bodies, Z-Base32 WKD hashes, and
//! "binary strings" holding one byte per character.
//!
//! ## Components
//! - **Hex**: lowercase, two digits per byte (`hex` crate)
//! - **Base64**: standard and URL-safe alphabets (`base64` crate)
//! - **Z-Base32**: RFC 6189 human-oriented alphabet, no padding
//! - **Text**: binary strings, UTF-8 round trips, line-ending normalisation
//!
//! Strict decoders fail with [`crate::error::UtilError::InvalidEncoding`].
//! [`text::decode_utf8`] is the one lenient decoder.

pub mod base64;
pub mod hex;
pub mod text;
pub mod zbase32;
