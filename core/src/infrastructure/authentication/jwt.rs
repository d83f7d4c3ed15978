use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenSigner},
    common::entities::app_errors::CoreError,
};

/// HS256 signer keyed by the configured application secret.
#[derive(Clone)]
pub struct JwtTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenSigner {
    pub fn new(secret: &str) -> Result<Self, CoreError> {
        if secret.is_empty() {
            return Err(CoreError::Configuration(
                "the JWT secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, claims: &JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected token: {}", e);
                    CoreError::Unauthorized
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::entities::Role;

    fn claims(exp_offset: Duration) -> JwtClaim {
        let now = Utc::now();
        JwtClaim {
            sub: "42".to_string(),
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + exp_offset).timestamp(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = JwtTokenSigner::new("secret").unwrap();
        let claims = claims(Duration::minutes(30));

        let token = signer.sign(&claims).unwrap();
        let decoded = signer.verify(&token).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.user_id().unwrap(), 42);
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let signer = JwtTokenSigner::new("secret").unwrap();
        let token = signer.sign(&claims(-Duration::hours(1))).unwrap();

        assert_eq!(signer.verify(&token), Err(CoreError::TokenExpired));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = JwtTokenSigner::new("other")
            .unwrap()
            .sign(&claims(Duration::minutes(30)))
            .unwrap();

        let signer = JwtTokenSigner::new("secret").unwrap();
        assert_eq!(signer.verify(&token), Err(CoreError::Unauthorized));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let signer = JwtTokenSigner::new("secret").unwrap();

        assert_eq!(signer.verify("not.a.jwt"), Err(CoreError::Unauthorized));
    }

    #[test]
    fn test_empty_secret_is_a_configuration_error() {
        assert!(matches!(
            JwtTokenSigner::new(""),
            Err(CoreError::Configuration(_))
        ));
    }
}
