use crate::builder::GravatarUrlBuilder;
use crate::error::Error;

/// One-shot entry point for templating expression contexts.
///
/// Equivalent to configuring and building a [`GravatarUrlBuilder`] with the
/// given email and size, and propagates the same validation errors.
#[tracing::instrument(name = "Rendering gravatar URL expression", skip_all)]
pub fn from(email: &str, size: u32) -> Result<String, Error> {
    GravatarUrlBuilder::with_email(email)?.size(size)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_matches_builder_output() {
        let expected = GravatarUrlBuilder::with_email("test@example.com")
            .unwrap()
            .size(64)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(from("test@example.com", 64).unwrap(), expected);
    }

    #[test]
    fn from_propagates_validation_errors() {
        assert_eq!(from("  ", 80), Err(Error::EmptyEmail));
        assert_eq!(from("test@example.com", 0), Err(Error::SizeOutOfRange(0)));
    }
}
