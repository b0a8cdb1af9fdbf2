use super::dtos::Claims;
use crate::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

impl Claims {
    pub fn user_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))
    }
}

pub fn decode_access_token(secret: &str, token: &str) -> AppResult<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
    Ok(token_data.claims)
}

/// Mint an HS256 access token the same way the identity service does.
pub fn issue_access_token(secret: &str, user_id: Uuid, ttl: Duration) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issued_token_decodes_to_same_user() {
        let user_id = Uuid::new_v4();
        let token = issue_access_token(SECRET, user_id, Duration::minutes(5)).unwrap();
        let claims = decode_access_token(SECRET, &token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_access_token(SECRET, Uuid::new_v4(), Duration::minutes(5)).unwrap();
        let err = decode_access_token("other-secret", &token).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Well past the default 60s leeway
        let token = issue_access_token(SECRET, Uuid::new_v4(), Duration::minutes(-10)).unwrap();
        assert!(decode_access_token(SECRET, &token).is_err());
    }

    #[test]
    fn test_non_uuid_subject() {
        let claims = Claims { sub: "nope".to_string(), exp: 0, iat: 0 };
        assert!(matches!(claims.user_id(), Err(AppError::Authentication(_))));
    }
}
