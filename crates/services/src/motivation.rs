//! Encouragement shown when a new weigh-in comes in lighter than the one before.

use rand::Rng;
use trainer_core::model::WeightLog;

/// The closed set of messages a lighter weigh-in can produce.
pub const MOTIVATORS: [&str; 4] = [
    "Nice! Du bist leichter als letzte Woche! 🔥",
    "Starker Fortschritt – keep it up! 💪",
    "Kilos schmelzen! Weiter so! 🧊",
    "Das Training zahlt sich aus! 🎯",
];

/// Picks which motivator to show. Injected so tests can pin the choice.
pub trait MessageSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl MessageSource for ThreadRngSource {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same slot (wrapped into range).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMessageSource(pub usize);

impl MessageSource for FixedMessageSource {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// What to do with the active message after a weigh-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageDecision {
    /// No earlier sample to compare against; leave the message as it is.
    Keep,
    Show(&'static str),
    Clear,
}

impl MessageDecision {
    /// Apply the decision to the currently active message.
    #[must_use]
    pub fn apply(self, active: Option<&'static str>) -> Option<&'static str> {
        match self {
            Self::Keep => active,
            Self::Show(message) => Some(message),
            Self::Clear => None,
        }
    }
}

/// Decide based on the log *after* the new sample was appended: the latest sample is
/// compared with the one right before it.
#[must_use]
pub fn decide_message(log: &WeightLog, source: &dyn MessageSource) -> MessageDecision {
    let (Some(previous), Some(latest)) = (log.previous(), log.latest()) else {
        return MessageDecision::Keep;
    };

    if latest.weight() < previous.weight() {
        MessageDecision::Show(MOTIVATORS[source.pick(MOTIVATORS.len())])
    } else {
        MessageDecision::Clear
    }
}
