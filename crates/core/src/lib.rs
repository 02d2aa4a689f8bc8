//! Core types for the agri advisory backend
//!
//! This crate provides the foundational types used across all other crates:
//! - Language definitions (supported farmer-facing languages)
//! - Intent enumeration for the chat assistant
//! - Season calendar (kharif/rabi/zaid)
//! - Per-request entity map
//! - User profile and collaborator snapshots (weather, market, soil)
//! - Image analysis types
//! - Provider traits for external collaborators
//! - Error types

pub mod entities;
pub mod error;
pub mod intent;
pub mod language;
pub mod profile;
pub mod season;
pub mod snapshot;
pub mod traits;
pub mod vision;

pub use entities::Entities;
pub use error::{Error, Result};
pub use intent::Intent;
pub use language::Language;
pub use profile::UserProfile;
pub use season::Season;
pub use snapshot::{MarketSnapshot, SoilSnapshot, WeatherSnapshot};
pub use traits::{ImageAnalyzer, WeatherProvider};
pub use vision::{DetectionKind, ImageAnalysis};
