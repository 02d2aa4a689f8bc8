//! Provider traits for external collaborators
//!
//! The chat and advisory cores are pure functions over immutable tables;
//! everything that talks to the outside world sits behind one of these
//! traits so real backends can be swapped in without touching the logic.

use async_trait::async_trait;

use crate::error::Result;
use crate::language::Language;
use crate::snapshot::WeatherSnapshot;
use crate::vision::ImageAnalysis;

/// Fetches the current weather for a location
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &str, language: Language) -> Result<WeatherSnapshot>;
}

/// Classifies crop images for pests and diseases
///
/// The production model lives elsewhere; this core only consumes its
/// verdict. Implementations must return `Error::ImageProcessing` for
/// undecodable input rather than panicking.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn analyze(&self, image: &[u8]) -> Result<ImageAnalysis>;
}
