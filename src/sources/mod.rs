//! External collaborators the game core calls through narrow traits
//!
//! - [`WordSource`]: where target words come from
//! - [`Authenticator`]: player login

pub mod auth;
pub mod words;

pub use auth::{AccountAuthenticator, Authenticator, OpenAuthenticator, SessionToken};
pub use words::{EmbeddedWords, FileWords, FixedWord, WordSource};
