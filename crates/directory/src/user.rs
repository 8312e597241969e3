use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use shopdesk_core::{DomainError, DomainResult, EntityId};

/// User record.
///
/// Passwords are stored and compared in plaintext: this is a demo fixture,
/// and credential handling is an explicit non-goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
}

/// In-memory user repository. Usernames are unique, exact match.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<User> {
        self.read().clone()
    }

    pub fn get(&self, id: EntityId) -> Option<User> {
        self.read().iter().find(|u| u.id == id).cloned()
    }

    /// Plaintext credential check.
    pub fn login(&self, username: &str, password: &str) -> DomainResult<User> {
        self.read()
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
            .ok_or(DomainError::Unauthorized)
    }

    pub fn create(&self, draft: UserDraft) -> DomainResult<User> {
        if draft.username.trim().is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        let mut users = self.write();
        if users.iter().any(|u| u.username == draft.username) {
            return Err(DomainError::conflict("username already exists"));
        }
        let id = users
            .iter()
            .map(|u| u.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(EntityId(1));

        let user = User {
            id,
            username: draft.username,
            password: draft.password,
            email: draft.email,
            full_name: draft.full_name,
            is_active: draft.is_active,
        };
        users.push(user.clone());
        tracing::info!(id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub fn update(&self, id: EntityId, draft: UserDraft) -> DomainResult<User> {
        let mut users = self.write();
        if users.iter().any(|u| u.username == draft.username && u.id != id) {
            return Err(DomainError::conflict("username already exists"));
        }
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DomainError::NotFound)?;
        user.username = draft.username;
        user.password = draft.password;
        user.email = draft.email;
        user.full_name = draft.full_name;
        user.is_active = draft.is_active;
        Ok(user.clone())
    }

    pub fn delete(&self, id: EntityId) -> DomainResult<()> {
        let mut users = self.write();
        let idx = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DomainError::NotFound)?;
        users.remove(idx);
        Ok(())
    }
}
