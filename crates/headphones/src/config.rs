use muffle_mesh::Precision;

/// Settings shared by every part builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildConfig {
    /// Decimal places points are rounded to when a part is welded.
    pub precision: Precision,
}

impl BuildConfig {
    pub fn with_precision(precision: Precision) -> Self {
        Self { precision }
    }
}
