//! Gravatar avatar URL construction.
//!
//! A gravatar is a dynamic image resource served by gravatar.com, addressed
//! by the MD5 hash of a normalized email address. This crate builds such
//! URLs; it does not fetch the images. See
//! <http://en.gravatar.com/site/implement/url>.

pub mod builder;
pub mod el;
pub mod error;

pub use builder::{GravatarUrlBuilder, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use error::Error;
