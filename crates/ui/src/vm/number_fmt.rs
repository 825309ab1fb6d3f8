#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

#[must_use]
pub fn format_kg(value: f64) -> String {
    format!("{value:.1} kg")
}
