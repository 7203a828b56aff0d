// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const TEST_TOKEN: &str = "test-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl toiita_core::application::ports::security::TokenManager for DummyTokenManager {
    async fn issue(
        &self,
        _subject: toiita_core::application::dto::TokenSubject,
    ) -> toiita_core::application::ApplicationResult<toiita_core::application::dto::AccessTokenDto>
    {
        Ok(toiita_core::application::dto::AccessTokenDto {
            access_token: TEST_TOKEN.into(),
        })
    }

    async fn authenticate(
        &self,
        token: &str,
    ) -> toiita_core::application::ApplicationResult<toiita_core::application::dto::AuthenticatedUser>
    {
        let now = super::time::fixed_now();
        match token {
            TEST_TOKEN => Ok(first_user(now)),
            // Expired tokens should be rejected at authentication time
            EXPIRED_TOKEN => Err(
                toiita_core::application::error::ApplicationError::unauthorized("expired token"),
            ),
            _ => Err(
                toiita_core::application::error::ApplicationError::unauthorized("invalid token"),
            ),
        }
    }
}

fn first_user(now: DateTime<Utc>) -> toiita_core::application::dto::AuthenticatedUser {
    toiita_core::application::dto::AuthenticatedUser {
        id: toiita_core::domain::user::value_objects::UserId::new(1).expect("invalid user id"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// 寛容なパスワードハッシャー（大半のテストで使用）
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl toiita_core::application::ports::security::PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, _password: &str) -> toiita_core::application::ApplicationResult<String> {
        Ok("hash".into())
    }

    async fn verify(
        &self,
        _password: &str,
        _expected_hash: &str,
    ) -> toiita_core::application::ApplicationResult<()> {
        Ok(())
    }
}

/// 厳密なパスワードハッシャー（ネガティブパステスト用）
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl toiita_core::application::ports::security::PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> toiita_core::application::ApplicationResult<String> {
        Ok(format!("hash::{}", password))
    }

    async fn verify(
        &self,
        password: &str,
        expected_hash: &str,
    ) -> toiita_core::application::ApplicationResult<()> {
        if format!("hash::{}", password) == expected_hash {
            Ok(())
        } else {
            Err(toiita_core::application::error::ApplicationError::unauthorized("bad password"))
        }
    }
}
