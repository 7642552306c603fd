use lcomp_kernel::security::SecurityError;
use std::borrow::Cow;

#[lcomp_derive::lcomp_error]
pub enum UserError {
    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Username or e-mail already taken.
    #[error("{message}{}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Unknown identifier or wrong password.
    #[error("Invalid credentials{}", format_context(.context))]
    InvalidCredentials { context: Option<Cow<'static, str>> },

    /// Disabled, locked or expired account.
    #[error("Account is not active{}: {message}", format_context(.context))]
    Inactive { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Security error{}: {source}", format_context(.context))]
    Security { source: SecurityError, context: Option<Cow<'static, str>> },

    #[error("Internal users error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl UserError {
    pub(crate) fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    pub(crate) fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict { message: message.into(), context: None }
    }
}

impl From<validator::ValidationErrors> for UserError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation { message: errors.to_string().into(), context: None }
    }
}
