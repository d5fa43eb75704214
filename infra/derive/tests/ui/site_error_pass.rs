use std::borrow::Cow;
use vapps_derive::site_error;

#[site_error]
pub enum RenderError {
    #[error("Format error{}: {source}", format_context(.context))]
    Format {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn render() -> Result<(), RenderError> {
    Err(std::fmt::Error).context("Writing document head")
}

fn main() {
    let err = render().unwrap_err();
    assert_eq!(err.to_string(), "Format error (Writing document head): an error occurred when formatting an argument");

    let internal: RenderError = "missing template".into();
    assert!(matches!(internal, RenderError::Internal { .. }));
}
