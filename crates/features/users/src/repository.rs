//! User persistence.
//!
//! [`UserRepository`] is the storage seam; [`MemoryUserRepository`] keeps accounts in
//! process memory behind a single lock, so uniqueness checks and writes are atomic.

use crate::domain::{NewUser, User};
use crate::error::UserError;
use chrono::Utc;
use fxhash::FxHashMap;
use lcomp_kernel::domain::account::{AccountStatus, Role};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Debug;

pub trait UserRepository: Send + Sync + Debug {
    /// Stores a new account and assigns its id.
    ///
    /// # Errors
    /// [`UserError::Conflict`] when the username or e-mail is taken.
    fn insert(&self, user: NewUser) -> Result<User, UserError>;

    /// Applies `change` to the stored account under the write lock and refreshes
    /// `updated_at`. `id` and `created_at` cannot be changed. Nothing is stored when the
    /// result fails the uniqueness check.
    ///
    /// # Errors
    /// [`UserError::NotFound`] for an unknown id, [`UserError::Conflict`] when the new
    /// username or e-mail belongs to another account.
    fn modify(&self, id: u64, change: &mut dyn FnMut(&mut User)) -> Result<User, UserError>;

    fn find_by_id(&self, id: u64) -> Option<User>;
    fn find_by_username(&self, username: &str) -> Option<User>;
    fn find_by_email(&self, email: &str) -> Option<User>;
    /// Username match wins over e-mail match.
    fn find_by_username_or_email(&self, identifier: &str) -> Option<User>;

    fn exists_by_id(&self, id: u64) -> bool;
    fn exists_by_username(&self, username: &str) -> bool;
    fn exists_by_email(&self, email: &str) -> bool;

    /// All accounts in id order.
    fn find_all(&self) -> Vec<User>;
    fn find_enabled(&self) -> Vec<User>;
    fn find_by_role(&self, role: Role) -> Vec<User>;
    /// Case-insensitive substring match; accounts without a first name never match.
    fn find_by_first_name_containing(&self, needle: &str) -> Vec<User>;
    fn find_by_last_name_containing(&self, needle: &str) -> Vec<User>;

    fn count_by_role(&self, role: Role) -> u64;
    fn count_enabled(&self) -> u64;

    /// `true` when an account was removed.
    fn delete_by_id(&self, id: u64) -> bool;
}

#[derive(Debug, Default)]
struct Store {
    last_id: u64,
    users: BTreeMap<u64, User>,
    by_username: FxHashMap<String, u64>,
    by_email: FxHashMap<String, u64>,
}

impl Store {
    fn ensure_free(&self, username: &str, email: &str, owner: Option<u64>) -> Result<(), UserError> {
        let taken_by_other = |index: &FxHashMap<String, u64>, key: &str| {
            index.get(key).is_some_and(|id| Some(*id) != owner)
        };

        if taken_by_other(&self.by_username, username) {
            return Err(UserError::conflict(format!("Username already exists: {username}")));
        }
        if taken_by_other(&self.by_email, email) {
            return Err(UserError::conflict(format!("Email already exists: {email}")));
        }
        Ok(())
    }

    fn filtered(&self, predicate: impl Fn(&User) -> bool) -> Vec<User> {
        self.users.values().filter(|user| predicate(user)).cloned().collect()
    }

    fn count(&self, predicate: impl Fn(&User) -> bool) -> u64 {
        self.users.values().filter(|user| predicate(user)).count() as u64
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    store: RwLock<Store>,
}

impl MemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_ignore_case(field: Option<&str>, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    field.is_some_and(|value| value.to_lowercase().contains(&needle))
}

impl UserRepository for MemoryUserRepository {
    fn insert(&self, user: NewUser) -> Result<User, UserError> {
        let mut store = self.store.write();
        store.ensure_free(&user.username, &user.email, None)?;

        store.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: store.last_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            status: user.status,
            created_at: now,
            updated_at: now,
            last_login: None,
        };

        store.by_username.insert(user.username.clone(), user.id);
        store.by_email.insert(user.email.clone(), user.id);
        store.users.insert(user.id, user.clone());

        tracing::debug!(user_id = user.id, username = %user.username, "User stored");
        Ok(user)
    }

    fn modify(&self, id: u64, change: &mut dyn FnMut(&mut User)) -> Result<User, UserError> {
        let mut store = self.store.write();
        let Some(previous) = store.users.get(&id).cloned() else {
            return Err(UserError::not_found(format!("User not found with id: {id}")));
        };

        let mut user = previous.clone();
        change(&mut user);
        user.id = id;
        user.created_at = previous.created_at;
        store.ensure_free(&user.username, &user.email, Some(id))?;

        if previous.username != user.username {
            store.by_username.remove(&previous.username);
            store.by_username.insert(user.username.clone(), user.id);
        }
        if previous.email != user.email {
            store.by_email.remove(&previous.email);
            store.by_email.insert(user.email.clone(), user.id);
        }

        user.updated_at = Utc::now();
        store.users.insert(id, user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: u64) -> Option<User> {
        self.store.read().users.get(&id).cloned()
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        let store = self.store.read();
        store.by_username.get(username).and_then(|id| store.users.get(id)).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let store = self.store.read();
        store.by_email.get(email).and_then(|id| store.users.get(id)).cloned()
    }

    fn find_by_username_or_email(&self, identifier: &str) -> Option<User> {
        let store = self.store.read();
        store
            .by_username
            .get(identifier)
            .or_else(|| store.by_email.get(identifier))
            .and_then(|id| store.users.get(id))
            .cloned()
    }

    fn exists_by_id(&self, id: u64) -> bool {
        self.store.read().users.contains_key(&id)
    }

    fn exists_by_username(&self, username: &str) -> bool {
        self.store.read().by_username.contains_key(username)
    }

    fn exists_by_email(&self, email: &str) -> bool {
        self.store.read().by_email.contains_key(email)
    }

    fn find_all(&self) -> Vec<User> {
        self.store.read().users.values().cloned().collect()
    }

    fn find_enabled(&self) -> Vec<User> {
        self.store.read().filtered(User::is_enabled)
    }

    fn find_by_role(&self, role: Role) -> Vec<User> {
        self.store.read().filtered(|user| user.role == role)
    }

    fn find_by_first_name_containing(&self, needle: &str) -> Vec<User> {
        self.store.read().filtered(|user| contains_ignore_case(user.first_name.as_deref(), needle))
    }

    fn find_by_last_name_containing(&self, needle: &str) -> Vec<User> {
        self.store.read().filtered(|user| contains_ignore_case(user.last_name.as_deref(), needle))
    }

    fn count_by_role(&self, role: Role) -> u64 {
        self.store.read().count(|user| user.role == role)
    }

    fn count_enabled(&self) -> u64 {
        self.store.read().count(|user| user.status.contains(AccountStatus::ENABLED))
    }

    fn delete_by_id(&self, id: u64) -> bool {
        let mut store = self.store.write();
        let Some(user) = store.users.remove(&id) else {
            return false;
        };
        store.by_username.remove(&user.username);
        store.by_email.remove(&user.email);
        true
    }
}
