//! Stream URL decryption.
//!
//! The upstream delivers playable URLs as base64-wrapped AES-128-CBC
//! ciphertext under a fixed key/IV pair shared by all of its web players.
//! Decryption happens here and nowhere else; callers receive plain URLs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use crate::error::{GatewayError, Result};

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

const STREAM_KEY: &[u8; 16] = b"g@1n!(f1#r.0$)&%";
const STREAM_IV: &[u8; 16] = b"asd!@#!@#@!12312";

/// Decrypts an encrypted stream message into a playable URL.
pub fn decrypt_stream_message(message: &str) -> Result<String> {
    let ciphertext = BASE64
        .decode(message.trim())
        .map_err(|e| GatewayError::Crypto(format!("invalid base64 payload: {e}")))?;

    let plaintext = Aes128CbcDec::new(STREAM_KEY.into(), STREAM_IV.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|e| GatewayError::Crypto(format!("decryption failed: {e}")))?;

    String::from_utf8(plaintext)
        .map_err(|e| GatewayError::Crypto(format!("decrypted payload is not UTF-8: {e}")))
}
