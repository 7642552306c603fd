use crate::domain::dto::{RegisterUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::{NewUser, User};
use crate::error::UserError;
use crate::repository::{MemoryUserRepository, UserRepository};
use chrono::Utc;
use fxhash::FxHashSet;
use lcomp_kernel::domain::account::{AccountStatus, Role};
use lcomp_kernel::domain::config::AdminAccount;
use lcomp_kernel::security::password::Passwords;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

const DUMMY_PASSWORD: &str = "no-such-account";

/// Account use cases on top of a [`UserRepository`].
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    passwords: Passwords,
    dummy_hash: Arc<OnceLock<String>>,
}

impl UserService {
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository, passwords: Passwords, dummy_hash: Arc::default() }
    }

    /// A service backed by a fresh [`MemoryUserRepository`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryUserRepository::new()))
    }

    /// Creates a `USER` account with every status flag set.
    ///
    /// # Errors
    /// [`UserError::Validation`] for invalid fields, [`UserError::Conflict`] when the
    /// username (checked first) or the e-mail is taken.
    #[instrument(skip_all, fields(username = %request.username))]
    pub fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, UserError> {
        request.validate()?;

        if self.repository.exists_by_username(&request.username) {
            return Err(UserError::conflict(format!(
                "Username already exists: {}",
                request.username
            )));
        }
        if self.repository.exists_by_email(&request.email) {
            return Err(UserError::conflict(format!("Email already exists: {}", request.email)));
        }

        let user = self.repository.insert(NewUser {
            password_hash: self.passwords.hash(&request.password)?,
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            role: Role::User,
            status: AccountStatus::ACTIVE,
        })?;

        info!(user_id = user.id, "User registered");
        Ok(user.into())
    }

    /// # Errors
    /// [`UserError::NotFound`] for an unknown id.
    pub fn get_by_id(&self, id: u64) -> Result<UserResponse, UserError> {
        self.find_user(id).map(UserResponse::from)
    }

    /// # Errors
    /// [`UserError::NotFound`] for an unknown username.
    pub fn get_by_username(&self, username: &str) -> Result<UserResponse, UserError> {
        self.repository
            .find_by_username(username)
            .map(UserResponse::from)
            .ok_or_else(|| UserError::not_found(format!("User not found with username: {username}")))
    }

    #[must_use]
    pub fn get_all(&self) -> Vec<UserResponse> {
        to_responses(self.repository.find_all())
    }

    /// Applies the fields present in `request` to the stored account in one step.
    ///
    /// Empty usernames and e-mails are ignored. A username or e-mail owned by another
    /// account is a conflict; re-submitting the current value is not.
    ///
    /// # Errors
    /// [`UserError::NotFound`], [`UserError::Validation`] or [`UserError::Conflict`].
    #[instrument(skip(self, request))]
    pub fn update(&self, id: u64, request: UpdateUserRequest) -> Result<UserResponse, UserError> {
        request.validate()?;
        let UpdateUserRequest { username, email, first_name, last_name, is_enabled } = request;
        let mut username = username.filter(|u| !u.is_empty());
        let mut email = email.filter(|e| !e.is_empty());
        let mut first_name = first_name;
        let mut last_name = last_name;

        let user = self.repository.modify(id, &mut |user| {
            if let Some(username) = username.take() {
                user.username = username;
            }
            if let Some(email) = email.take() {
                user.email = email;
            }
            if let Some(first_name) = first_name.take() {
                user.first_name = Some(first_name);
            }
            if let Some(last_name) = last_name.take() {
                user.last_name = Some(last_name);
            }
            if let Some(enabled) = is_enabled {
                user.status.set(AccountStatus::ENABLED, enabled);
            }
        })?;

        debug!(user_id = user.id, "User updated");
        Ok(user.into())
    }

    /// # Errors
    /// [`UserError::NotFound`] for an unknown id.
    pub fn delete(&self, id: u64) -> Result<(), UserError> {
        if !self.repository.delete_by_id(id) {
            return Err(not_found_id(id));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Flips the `ENABLED` flag.
    ///
    /// # Errors
    /// [`UserError::NotFound`] for an unknown id.
    pub fn toggle_status(&self, id: u64) -> Result<UserResponse, UserError> {
        let user =
            self.repository.modify(id, &mut |user| user.status.toggle(AccountStatus::ENABLED))?;
        info!(user_id = user.id, enabled = user.is_enabled(), "User status toggled");
        Ok(user.into())
    }

    /// Stamps `last_login`; unknown usernames are ignored.
    pub fn update_last_login(&self, username: &str) {
        let Some(user) = self.repository.find_by_username(username) else {
            return;
        };
        let now = Utc::now();
        if let Err(e) = self.repository.modify(user.id, &mut |user| user.last_login = Some(now)) {
            warn!(username, error = %e, "Failed to record last login");
        }
    }

    #[must_use]
    pub fn username_exists(&self, username: &str) -> bool {
        self.repository.exists_by_username(username)
    }

    #[must_use]
    pub fn email_exists(&self, email: &str) -> bool {
        self.repository.exists_by_email(email)
    }

    #[must_use]
    pub fn get_by_role(&self, role: Role) -> Vec<UserResponse> {
        to_responses(self.repository.find_by_role(role))
    }

    #[must_use]
    pub fn enabled_count(&self) -> u64 {
        self.repository.count_enabled()
    }

    #[must_use]
    pub fn count_by_role(&self, role: Role) -> u64 {
        self.repository.count_by_role(role)
    }

    #[must_use]
    pub fn get_enabled(&self) -> Vec<UserResponse> {
        to_responses(self.repository.find_enabled())
    }

    /// Case-insensitive name search. With both names given an account must match both;
    /// with neither, every account is returned.
    #[must_use]
    pub fn search(&self, first_name: Option<&str>, last_name: Option<&str>) -> Vec<UserResponse> {
        let users = match (first_name, last_name) {
            (None, None) => self.repository.find_all(),
            (Some(first), None) => self.repository.find_by_first_name_containing(first),
            (None, Some(last)) => self.repository.find_by_last_name_containing(last),
            (Some(first), Some(last)) => {
                let by_last: FxHashSet<u64> = self
                    .repository
                    .find_by_last_name_containing(last)
                    .into_iter()
                    .map(|user| user.id)
                    .collect();
                self.repository
                    .find_by_first_name_containing(first)
                    .into_iter()
                    .filter(|user| by_last.contains(&user.id))
                    .collect()
            },
        };
        to_responses(users)
    }

    /// Looks an account up by username, then by e-mail.
    ///
    /// # Errors
    /// [`UserError::NotFound`] with `User not found: <identifier>`.
    pub fn load_by_identifier(&self, identifier: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username_or_email(identifier)
            .ok_or_else(|| UserError::not_found(format!("User not found: {identifier}")))
    }

    /// Verifies credentials and records the login.
    ///
    /// # Errors
    /// [`UserError::InvalidCredentials`] for an unknown identifier or a wrong password,
    /// [`UserError::Inactive`] when any account flag is cleared.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, identifier: &str, password: &str) -> Result<User, UserError> {
        let Ok(user) = self.load_by_identifier(identifier) else {
            debug!("Login for unknown identifier");
            // Unknown identifiers pay the same Argon2 cost as wrong passwords.
            let _ = self.passwords.verify(password, self.dummy_hash()?)?;
            return Err(UserError::InvalidCredentials { context: None });
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            debug!(user_id = user.id, "Login with wrong password");
            return Err(UserError::InvalidCredentials { context: None });
        }

        if !user.can_authenticate() {
            return Err(UserError::Inactive {
                message: format!("{} is disabled, locked or expired", user.username).into(),
                context: None,
            });
        }

        self.update_last_login(&user.username);
        info!(user_id = user.id, "User logged in");
        self.find_user(user.id)
    }

    /// The stored account, including its password hash.
    ///
    /// # Errors
    /// [`UserError::NotFound`] for an unknown id.
    pub fn find_user(&self, id: u64) -> Result<User, UserError> {
        self.repository.find_by_id(id).ok_or_else(|| not_found_id(id))
    }

    /// Creates the configured administrator unless its username is taken.
    /// Returns `None` when nothing was created.
    ///
    /// # Errors
    /// [`UserError::Conflict`] when only the e-mail is taken, or a hashing failure.
    pub fn seed_admin(&self, account: &AdminAccount) -> Result<Option<UserResponse>, UserError> {
        if self.repository.exists_by_username(&account.username) {
            debug!(username = %account.username, "Administrator already present");
            return Ok(None);
        }

        let admin = self.repository.insert(NewUser {
            username: account.username.clone(),
            email: account.email.clone(),
            password_hash: self.passwords.hash(&account.password)?,
            first_name: None,
            last_name: None,
            role: Role::Admin,
            status: AccountStatus::ACTIVE,
        })?;

        info!(user_id = admin.id, username = %admin.username, "Administrator account created");
        Ok(Some(admin.into()))
    }

    /// Hash verified against when the login identifier matches no account.
    fn dummy_hash(&self) -> Result<&str, UserError> {
        if let Some(hash) = self.dummy_hash.get() {
            return Ok(hash);
        }
        let hash = self.passwords.hash(DUMMY_PASSWORD)?;
        Ok(self.dummy_hash.get_or_init(|| hash))
    }
}

fn not_found_id(id: u64) -> UserError {
    UserError::not_found(format!("User not found with id: {id}"))
}

fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.iter().map(UserResponse::from).collect()
}
