//! DNS record management for the name.com registrar.
//!
//! The crate exposes a provider-agnostic record model ([`Record`]) and an
//! async CRUD trait ([`RecordProvider`]), plus an implementation for the
//! name.com v4 REST API ([`NameComProvider`]).
//!
//! ```no_run
//! use dns_namedotcom::{NameComProvider, RecordProvider};
//!
//! # async fn run() -> Result<(), dns_namedotcom::Error> {
//! let provider = NameComProvider::new("username", "api-token");
//! let records = provider.get_records("example.com.").await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod providers;

pub use crate::core::provider::RecordProvider;
pub use crate::core::record::Record;
pub use crate::error::Error;
pub use crate::providers::namedotcom::NameComProvider;
