//! Trello webhook signature verification.
//!
//! Trello signs each delivery with `base64(HMAC-SHA1(secret, body ++ callbackURL))`
//! and sends it in the `x-trello-webhook` header.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_HEADER: &str = "x-trello-webhook";

/// Stand-in compared when the signature header is absent.
const MISSING_SIGNATURE: &str = "no such header";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("webhook signature did not match")]
    Unauthorized,
}

/// Lower-cased base64 HMAC-SHA1 over `body ++ callback_url`.
pub fn compute_signature(body: &[u8], secret: &str, callback_url: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body);
    mac.update(callback_url.as_bytes());
    STANDARD
        .encode(mac.finalize().into_bytes())
        .to_ascii_lowercase()
}

/// Check a delivery's signature header. Comparison is case-insensitive and
/// constant-time over equal-length inputs.
pub fn verify(
    body: &[u8],
    signature_header: Option<&str>,
    secret: &str,
    callback_url: &str,
) -> Result<(), AuthError> {
    let expected = compute_signature(body, secret, callback_url);
    let supplied = signature_header
        .unwrap_or(MISSING_SIGNATURE)
        .to_ascii_lowercase();

    if bool::from(expected.as_bytes().ct_eq(supplied.as_bytes())) {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}
