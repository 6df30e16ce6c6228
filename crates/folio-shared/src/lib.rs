//! Shared types and logic for the Folio terminal portfolio.
//!
//! Everything here is static data plus pure resolvers over it. The only
//! suspension point is the simulated contact submission.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod console;
pub mod contact;
pub mod error;
pub mod skills;
pub mod transcript;
pub mod types;

pub use catalog::Catalog;
pub use error::FolioError;
pub use types::*;
