use lcomp_derive::lcomp_error;
use std::borrow::Cow;

#[lcomp_error]
pub enum StoreError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_snapshot() -> Result<Vec<u8>, StoreError> {
    std::fs::read("/definitely/missing").context("Reading snapshot")
}

fn main() {
    let _ = read_snapshot();
    let _: StoreError = "boom".into();
}
