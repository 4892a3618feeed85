//! Placeholder discovery options.

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderOptions {
    /// Also offer slots that need the dragged block transposed.
    pub include_transpose: bool,
    /// Offer slots held by a band; dropping there splices into the band.
    pub include_between_bands: bool,
    /// Offer gaps between two magnetically snapped blocks.
    pub include_between_magnetic: bool,
}

impl PlaceholderOptions {
    pub fn all() -> Self {
        Self {
            include_transpose: true,
            include_between_bands: true,
            include_between_magnetic: true,
        }
    }
}
