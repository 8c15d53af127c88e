//! JWT token service
//!
//! Stateless issuance and verification of session tokens. A token binds an
//! operator username (`sub`) to an absolute expiry (`exp`); there is no
//! server-side session state and no revocation beyond expiry.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::model::JwtPayload;

/// Encode a JWT token for the given subject.
///
/// The secret is a base64-encoded HS256 key supplied by configuration.
pub fn encode_jwt_token(
    sub: &str,
    secret_key: &str,
    expire_seconds: i64,
) -> jsonwebtoken::errors::Result<String> {
    let exp = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(expire_seconds))
        .unwrap_or_else(chrono::Utc::now)
        .timestamp();

    let payload = JwtPayload {
        sub: sub.to_string(),
        exp,
    };

    let header = Header::new(Algorithm::HS256);

    let encoding_key = EncodingKey::from_base64_secret(secret_key)?;
    encode(&header, &payload, &encoding_key)
}

/// Decode and validate a JWT token.
///
/// Fails on bad signature, malformed payload, or expiry; callers collapse
/// all failure kinds into one outward `Unauthorized` signal.
pub fn decode_jwt_token(
    token: &str,
    secret_key: &str,
) -> jsonwebtoken::errors::Result<jsonwebtoken::TokenData<JwtPayload>> {
    let decoding_key = DecodingKey::from_base64_secret(secret_key)?;
    decode::<JwtPayload>(token, &decoding_key, &Validation::default())
}
