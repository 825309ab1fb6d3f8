use std::path::PathBuf;
use std::sync::Arc;

use trainer_core::model::{ImageRef, WeightSample, parse_weight_input};
use trainer_core::{Clock, select_reminder};

use super::state::TrackerState;
use crate::error::TrackerError;
use crate::motivation::{MessageSource, ThreadRngSource};

/// Binds the session state to a clock and a message source.
///
/// Bad input never surfaces as an error here: the state comes back unchanged and
/// the reason is logged at `debug`.
#[derive(Clone)]
pub struct TrackerService {
    clock: Clock,
    messages: Arc<dyn MessageSource>,
}

impl TrackerService {
    #[must_use]
    pub fn new(clock: Clock, messages: Arc<dyn MessageSource>) -> Self {
        Self { clock, messages }
    }

    /// Service using uniform random message selection.
    #[must_use]
    pub fn with_thread_rng(clock: Clock) -> Self {
        Self::new(clock, Arc::new(ThreadRngSource))
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start a session. The reminder is taken from the clock once and never refreshed.
    #[must_use]
    pub fn start_session(&self) -> TrackerState {
        let hour = self.clock.hour();
        let reminder = select_reminder(hour);
        tracing::info!(hour, ?reminder, "tracker session started");
        TrackerState::new(reminder)
    }

    /// Build a sample dated today from the weight field.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Domain` if the field is blank or not a number.
    pub fn parse_sample(&self, raw: &str) -> Result<WeightSample, TrackerError> {
        let weight = parse_weight_input(raw)?;
        Ok(WeightSample::new(self.clock.today(), weight))
    }

    /// Append a weigh-in from the weight field; blank or non-numeric input is a no-op.
    #[must_use]
    pub fn add_weight_input(&self, state: TrackerState, raw: &str) -> TrackerState {
        match self.parse_sample(raw) {
            Ok(sample) => {
                tracing::debug!(weight = sample.weight(), "weigh-in recorded");
                state.with_weight(sample, self.messages.as_ref())
            }
            Err(err) => {
                tracing::debug!(%err, "weigh-in ignored");
                state
            }
        }
    }

    /// Append selected photos in selection order, skipping empty paths.
    #[must_use]
    pub fn add_image_paths(
        &self,
        state: TrackerState,
        paths: impl IntoIterator<Item = PathBuf>,
    ) -> TrackerState {
        let images = paths.into_iter().filter_map(|path| {
            ImageRef::from_file(path)
                .map_err(|err| tracing::debug!(err = %TrackerError::from(err), "photo ignored"))
                .ok()
        });
        state.with_images(images)
    }
}
