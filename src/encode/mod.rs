//! Text encoders
//!
//! This module contains the Base58 codec used to turn raw address bytes
//! into human-copyable text.

pub mod base58;

pub use base58::{
    base58_decode, base58_decode_into, base58_encode, is_base58_char, is_base58_string,
};
