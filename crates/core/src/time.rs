use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Timelike, Utc};

/// A simple clock abstraction so the session start and sample dates are deterministic in tests.
///
/// All readings are wall-clock local time: reminders and sample dates follow what the
/// user sees on their own clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Default,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given local timestamp.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current local time according to the clock.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Default => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Hour of day in `0..24`.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.now().hour()
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Returns true if this clock represents real time.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Clock::Default)
    }

    /// Returns true if this clock is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `NaiveDateTime` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
        .naive_utc()
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

/// Returns a `Clock` fixed on the test date at `hour:00`.
///
/// # Panics
///
/// Panics if `hour` is not in `0..24`.
#[must_use]
pub fn fixed_clock_at_hour(hour: u32) -> Clock {
    let at = fixed_now()
        .date()
        .and_hms_opt(hour, 0, 0)
        .expect("hour should be in 0..24");
    Clock::fixed(at)
}
