use chub_derive::chub_error;
use std::borrow::Cow;

#[chub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing value{}", format_context(.context))]
    Missing { context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("Reading fixture")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.to_string(), "IO error (Reading fixture): disk");

    let err: DemoError = "boom".into();
    assert_eq!(err.kind(), "Internal");

    let missing: Result<(), DemoError> = Err(DemoError::Missing { context: None });
    let err = missing.context("cep").unwrap_err();
    assert_eq!(err.to_string(), "Missing value (cep)");
}
