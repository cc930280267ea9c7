//! Company registry collaborator
//!
//! The decision procedure resolves a company number into a profile
//! (accounting reference date and last period end) through the
//! `CompanyRegistry` trait. Everything about where profiles come from
//! is configured at construction time:
//! - `InMemoryRegistry` serves profiles listed in the config file
//! - `FallbackRegistry` absorbs lookup failures by answering with a
//!   placeholder profile
//!
//! Lookups must be idempotent: navigation replays the procedure and
//! repeats the lookup every time the walk re-enters that branch.

mod config;
mod errors;
mod lookup;
mod profile;

pub use config::RegistryConfig;
pub use errors::{RegistryError, RegistryResult};
pub use lookup::{CompanyRegistry, FallbackRegistry, InMemoryRegistry};
pub use profile::{CompanyNumber, CompanyProfile, COMPANY_NUMBER_PATTERN};
