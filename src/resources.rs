// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Holds the loaded configuration and the single engine handle

use chrono::Utc;
use repcount_core::errors::FrameError;
use repcount_core::models::KeypointMap;

use crate::config::ServerConfig;
use crate::engine::{Engine, EngineHandle, FrameInput};
use crate::schedule::Schedule;

/// Dependencies shared by the HTTP and WebSocket handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Configuration the server was started with
    pub config: ServerConfig,
    /// The one engine every transport feeds
    pub engine: EngineHandle,
}

impl ServerResources {
    /// Build resources with the configured default workout starting now
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let schedule = Schedule::new(config.default_workout.clone(), Utc::now());
        Self::with_engine(config, Engine::new(schedule))
    }

    /// Build resources around a preconfigured engine
    #[must_use]
    pub fn with_engine(config: ServerConfig, engine: Engine) -> Self {
        Self {
            config,
            engine: EngineHandle::new(engine),
        }
    }

    /// Resolve a submitted frame using the configured frame size and visibility threshold
    ///
    /// # Errors
    ///
    /// Returns a `FrameError` if the payload is empty, ambiguous, or non-finite
    pub fn decode_frame(&self, input: FrameInput) -> Result<KeypointMap, FrameError> {
        input.into_keypoints(self.config.frame, self.config.min_landmark_visibility)
    }
}
