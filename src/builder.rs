use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::Error;

const GRAVATAR_URL: &str = "http://www.gravatar.com/avatar/";

pub const DEFAULT_SIZE: u32 = 80;
pub const MIN_SIZE: u32 = 1;
pub const MAX_SIZE: u32 = 512;

/// Configuration for a gravatar image URL.
///
/// The record is immutable: `email` and `size` validate their input and
/// return a new record, leaving the receiver untouched. Configuration
/// chains with `?`:
///
/// ```
/// use gravatar_url::GravatarUrlBuilder;
///
/// let url = GravatarUrlBuilder::new()
///     .email("test@example.com")?
///     .size(128)?
///     .build()?;
/// # Ok::<(), gravatar_url::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravatarUrlBuilder {
    email: Option<String>,
    size: u32,
}

impl Default for GravatarUrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GravatarUrlBuilder {
    pub fn new() -> Self {
        GravatarUrlBuilder {
            email: None,
            size: DEFAULT_SIZE,
        }
    }

    /// Create a record pre-seeded with an email.
    pub fn with_email(email: &str) -> Result<Self, Error> {
        Self::new().email(email)
    }

    /// Set the email. Leading and trailing whitespace is trimmed before
    /// storage; a value that trims to nothing is rejected.
    pub fn email(&self, value: &str) -> Result<Self, Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyEmail);
        }

        Ok(GravatarUrlBuilder {
            email: Some(trimmed.to_string()),
            size: self.size,
        })
    }

    /// Set the image size in pixels, within [`MIN_SIZE`]..=[`MAX_SIZE`].
    pub fn size(&self, value: u32) -> Result<Self, Error> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&value) {
            return Err(Error::SizeOutOfRange(value));
        }

        Ok(GravatarUrlBuilder {
            email: self.email.clone(),
            size: value,
        })
    }

    /// Build the URL string. Pure and idempotent; fails if no email has
    /// been set.
    #[tracing::instrument(name = "Building gravatar URL", skip_all, fields(size = self.size))]
    pub fn build(&self) -> Result<String, Error> {
        let email = self.email.as_deref().ok_or(Error::EmptyEmail)?;

        Ok(format!(
            "{}{}.jpg?s={}",
            GRAVATAR_URL,
            email_digest(email),
            self.size
        ))
    }
}

/// Lowercase hex MD5 of the lowercased email, 32 characters.
///
/// Gravatar addresses images by this exact encoding, including the leading
/// zero per byte, so the output must match it byte for byte.
fn email_digest(email: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(email.to_lowercase().as_bytes());
    let digest = hasher.finalize();

    hex::encode(digest)
}
