//! Core types and utilities for the spa-oidc workspace.
//!
//! This crate provides the foundational types shared by the orchestrator and
//! the browser adapter: the `Result` alias over rootcause reports, the
//! [`AccessToken`] credential wrapper, and the [`Profile`] claims map.

pub mod error;
pub mod profile;
pub mod token;

pub use error::Result;
pub use profile::Profile;
pub use token::AccessToken;
