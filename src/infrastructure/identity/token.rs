use anyhow::{Context, Result};
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Claims of a verified ID token that handlers are allowed to rely on.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token_use: Option<String>,
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing key {0:?} is not published by the user pool")]
    UnknownKey(Option<String>),
    #[error("token is not an ID token")]
    NotIdToken,
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
enum Keys {
    /// Keys published by the user pool, by `kid`.
    Published(Arc<HashMap<String, DecodingKey>>),
    /// One shared HMAC secret, for tokens minted in tests.
    #[cfg(test)]
    Shared(DecodingKey),
}

#[derive(Clone)]
pub struct TokenVerifier {
    keys: Keys,
    validation: Validation,
}

impl TokenVerifier {
    pub fn from_jwks(set: &JwkSet, issuer: &str, audience: &str) -> Result<Self> {
        let mut keys = HashMap::new();
        for jwk in &set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            let key = DecodingKey::from_jwk(jwk)
                .with_context(|| format!("unusable signing key {}", kid))?;
            keys.insert(kid, key);
        }

        Ok(Self {
            keys: Keys::Published(Arc::new(keys)),
            validation: Self::validation(Algorithm::RS256, issuer, audience),
        })
    }

    #[cfg(test)]
    pub fn from_secret(secret: &[u8], issuer: &str, audience: &str) -> Self {
        Self {
            keys: Keys::Shared(DecodingKey::from_secret(secret)),
            validation: Self::validation(Algorithm::HS256, issuer, audience),
        }
    }

    /// Downloads the user pool's JWKS once; keys are not refreshed afterwards.
    pub async fn fetch(jwks_url: &str, issuer: &str, audience: &str) -> Result<Self> {
        let set: JwkSet = reqwest::get(jwks_url)
            .await
            .context("failed to reach JWKS endpoint")?
            .error_for_status()
            .context("JWKS endpoint returned an error")?
            .json()
            .await
            .context("JWKS document is not valid JSON")?;

        let verifier = Self::from_jwks(&set, issuer, audience)?;
        info!("✅ Loaded {} signing keys from {}", set.keys.len(), jwks_url);
        Ok(verifier)
    }

    fn validation(algorithm: Algorithm, issuer: &str, audience: &str) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let key = match &self.keys {
            #[cfg(test)]
            Keys::Shared(key) => key,
            Keys::Published(keys) => {
                let kid = decode_header(token)?.kid;
                kid.as_ref()
                    .and_then(|kid| keys.get(kid))
                    .ok_or(TokenError::UnknownKey(kid.clone()))?
            }
        };

        let claims = decode::<IdentityClaims>(token, key, &self.validation)?.claims;

        if claims.token_use.as_deref() != Some("id") {
            return Err(TokenError::NotIdToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TEST_AUDIENCE, TEST_ISSUER, TEST_SECRET, mint_token};
    use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
    use serde_json::json;

    fn verifier() -> TokenVerifier {
        TokenVerifier::from_secret(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE)
    }

    #[test]
    fn accepts_id_token_from_the_pool() {
        let claims = verifier().verify(&mint_token("user-1")).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email.as_deref(), Some("user-1@example.com"));
    }

    #[test]
    fn rejects_access_tokens() {
        let token = encode(
            &Header::default(),
            &json!({
                "sub": "user-1",
                "token_use": "access",
                "iss": TEST_ISSUER,
                "aud": TEST_AUDIENCE,
                "exp": get_current_timestamp() + 600,
            }),
            &EncodingKey::from_secret(TEST_SECRET),
        )
        .unwrap();

        assert!(matches!(verifier().verify(&token), Err(TokenError::NotIdToken)));
    }

    #[test]
    fn rejects_foreign_audience_and_bad_signature() {
        let other_client = TokenVerifier::from_secret(TEST_SECRET, TEST_ISSUER, "another-client");
        assert!(other_client.verify(&mint_token("user-1")).is_err());

        let other_secret = TokenVerifier::from_secret(b"not-the-secret", TEST_ISSUER, TEST_AUDIENCE);
        assert!(other_secret.verify(&mint_token("user-1")).is_err());
    }

    #[test]
    fn rejects_expired_tokens() {
        let token = encode(
            &Header::default(),
            &json!({
                "sub": "user-1",
                "token_use": "id",
                "iss": TEST_ISSUER,
                "aud": TEST_AUDIENCE,
                "exp": get_current_timestamp() - 3600,
            }),
            &EncodingKey::from_secret(TEST_SECRET),
        )
        .unwrap();

        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn unknown_kid_is_reported() {
        let verifier = TokenVerifier::from_jwks(&JwkSet { keys: vec![] }, TEST_ISSUER, TEST_AUDIENCE).unwrap();
        let mut header = Header::default();
        header.kid = Some("missing".to_string());
        let token = encode(
            &header,
            &json!({ "sub": "user-1", "exp": get_current_timestamp() + 600 }),
            &EncodingKey::from_secret(TEST_SECRET),
        )
        .unwrap();

        match verifier.verify(&token) {
            Err(TokenError::UnknownKey(Some(kid))) => assert_eq!(kid, "missing"),
            other => panic!("unexpected result: {:?}", other.map(|c| c.sub)),
        }
    }
}
