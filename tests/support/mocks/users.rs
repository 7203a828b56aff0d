// tests/support/mocks/users.rs
use async_trait::async_trait;
use std::sync::Mutex;

use toiita_core::domain::errors::{DomainError, DomainResult};
use toiita_core::domain::user::entity::{NewUser, User};
use toiita_core::domain::user::value_objects::{EmailAddress, UserId};

/* -------------------------------- DummyUserRepo -------------------------------- */

/// ダミーのユーザーリポジトリ（常に空）
pub struct DummyUserRepo;

#[async_trait]
impl toiita_core::domain::user::repository::UserRepository for DummyUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn find_by_email(&self, _email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Ok(None)
    }
}

/* -------------------------------- InMemoryUserRepo -------------------------------- */

/// インメモリのユーザーリポジトリ
/// users.email の一意制約と同じ振る舞いで重複を拒否する
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl toiita_core::domain::user::repository::UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.inner.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let id = UserId::new(users.len() as i64 + 1).expect("invalid user id");
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
