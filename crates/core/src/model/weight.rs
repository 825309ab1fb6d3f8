use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeightInputError {
    #[error("weight input is empty")]
    Empty,

    #[error("weight input is not a number: {raw:?}")]
    NotANumber { raw: String },
}

/// Parse user-entered kilograms.
///
/// Surrounding whitespace is ignored. Anything that parses as a finite float is
/// accepted as-is, so `"080.5"` is fine and no plausibility range is enforced.
///
/// # Errors
///
/// Returns `WeightInputError::Empty` for blank input and
/// `WeightInputError::NotANumber` when the text is not a finite number.
pub fn parse_weight_input(raw: &str) -> Result<f64, WeightInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WeightInputError::Empty);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(WeightInputError::NotANumber {
            raw: trimmed.to_string(),
        }),
    }
}

//
// ─── SAMPLE ────────────────────────────────────────────────────────────────────
//

/// One dated body-weight measurement in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    date: NaiveDate,
    weight: f64,
}

impl WeightSample {
    #[must_use]
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Display form of the sample date, e.g. `14.11.2023`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

//
// ─── LOG ───────────────────────────────────────────────────────────────────────
//

/// Append-only sequence of samples in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightLog {
    samples: Vec<WeightSample>,
}

impl WeightLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: WeightSample) {
        self.samples.push(sample);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The first sample ever entered in this session.
    #[must_use]
    pub fn first(&self) -> Option<&WeightSample> {
        self.samples.first()
    }

    /// The most recently appended sample.
    #[must_use]
    pub fn latest(&self) -> Option<&WeightSample> {
        self.samples.last()
    }

    /// The sample appended right before the latest one.
    #[must_use]
    pub fn previous(&self) -> Option<&WeightSample> {
        self.samples.len().checked_sub(2).map(|idx| &self.samples[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightSample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WeightSample] {
        &self.samples
    }

    #[must_use]
    pub fn min_weight(&self) -> Option<f64> {
        self.samples.iter().map(WeightSample::weight).reduce(f64::min)
    }

    #[must_use]
    pub fn max_weight(&self) -> Option<f64> {
        self.samples.iter().map(WeightSample::weight).reduce(f64::max)
    }
}

impl FromIterator<WeightSample> for WeightLog {
    fn from_iter<I: IntoIterator<Item = WeightSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
