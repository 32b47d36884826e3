//! Mock user directory.
//!
//! Simulates the hosted auth provider the mobile app talks to: an
//! in-memory registry with sign-up/sign-in and locally held profile
//! fields. Passwords are stored as SHA-256 digests and compared in
//! constant time; nothing here is meant to survive a restart.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("an account with that email already exists")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Profile fields exposed to the API; never carries the password digest.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub name: String,
}

#[derive(Debug)]
struct UserRecord {
    id: u64,
    email: String,
    name: String,
    password_digest: [u8; 32],
}

#[derive(Debug)]
struct DirectoryInner {
    users: Vec<UserRecord>,
    next_id: u64,
}

#[derive(Debug)]
pub struct UserDirectory {
    inner: RwLock<DirectoryInner>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Register a new account. Emails are unique, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`] when the email is already
    /// registered.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AuthError> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(AuthError::EmailTaken);
        }

        let id = inner.next_id;
        inner.next_id += 1;
        let record = UserRecord {
            id,
            email: email.to_string(),
            name: name.to_string(),
            password_digest: digest(password),
        };
        let profile = UserProfile {
            id,
            email: record.email.clone(),
            name: record.name.clone(),
        };
        inner.users.push(record);
        Ok(profile)
    }

    /// Verify credentials and return the matching profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for unknown emails and
    /// wrong passwords alike — callers can't probe which one failed.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let inner = self.inner.read().await;
        let supplied = digest(password);
        inner
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .filter(|u| u.password_digest.ct_eq(&supplied).into())
            .map(|u| UserProfile {
                id: u.id,
                email: u.email.clone(),
                name: u.name.clone(),
            })
            .ok_or(AuthError::InvalidCredentials)
    }

    pub async fn profile(&self, user_id: u64) -> Option<UserProfile> {
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| UserProfile {
                id: u.id,
                email: u.email.clone(),
                name: u.name.clone(),
            })
    }
}

fn digest(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}
