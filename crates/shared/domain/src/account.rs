use crate::constants::AUTHORITY_PREFIX;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Role granted to a user account. Serialized as `USER`, `ADMIN`, `MODERATOR`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
    Moderator,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::User, Self::Admin, Self::Moderator];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::Moderator => "MODERATOR",
        }
    }

    /// `ROLE_USER`, `ROLE_ADMIN`, ...
    #[must_use]
    pub fn authority(self) -> String {
        format!("{AUTHORITY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a path or query segment is not an exact role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-sensitive: `ADMIN` parses, `admin` does not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|role| role.as_str() == s).ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

bitflags! {
    /// Account state flags. A user may sign in only when every flag is set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccountStatus: u8 {
        const ENABLED = 1 << 0;
        const NON_LOCKED = 1 << 1;
        const NON_EXPIRED = 1 << 2;
        const CREDENTIALS_NON_EXPIRED = 1 << 3;

        const ACTIVE = Self::ENABLED.bits()
            | Self::NON_LOCKED.bits()
            | Self::NON_EXPIRED.bits()
            | Self::CREDENTIALS_NON_EXPIRED.bits();
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self::ACTIVE
    }
}

impl AccountStatus {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }

    #[must_use]
    pub const fn can_authenticate(self) -> bool {
        self.contains(Self::ACTIVE)
    }
}

impl Serialize for AccountStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for AccountStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
