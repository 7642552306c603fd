//! Credential primitives: Argon2 password hashes and signed bearer tokens.

pub mod password;
pub mod token;

use std::borrow::Cow;

#[lcomp_derive::lcomp_error]
pub enum SecurityError {
    #[error("Password hashing error{}: {message}", format_context(.context))]
    Hashing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Token error{}: {source}", format_context(.context))]
    Token { source: jsonwebtoken::errors::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid security configuration{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal security error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
