use super::weight::parse_weight_input;

/// Target body weight in kilograms; unset until the user enters something numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalWeight(Option<f64>);

impl GoalWeight {
    #[must_use]
    pub fn unset() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn new(kg: f64) -> Self {
        Self(kg.is_finite().then_some(kg))
    }

    /// Interpret the goal input field. Blank or non-numeric text leaves the goal unset.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(parse_weight_input(raw).ok())
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
