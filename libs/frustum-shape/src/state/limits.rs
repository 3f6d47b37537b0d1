//! Editable ranges the host wires into its dimension fields.

/// Range and increments for one editable dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    /// Smallest value the field accepts.
    pub min: f64,
    /// Largest value the field accepts.
    pub max: f64,
    /// Large increment.
    pub large_step: f64,
    /// Small increment.
    pub small_step: f64,
}

impl FieldRange {
    /// Clamps `value` into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Whether `value` lies within the inclusive range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-field ranges; `None` marks a field the host should hide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    /// Top diameter, hidden in constant mode or with a pinned diameter.
    pub top: Option<FieldRange>,
    /// Bottom diameter, hidden with a pinned diameter.
    pub bottom: Option<FieldRange>,
    /// Length, hidden with a pinned length.
    pub length: Option<FieldRange>,
}
