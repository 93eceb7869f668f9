use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

/// Whole number with comma-separated thousands: `1,400,000`.
///
/// Ties are rounded to even.
pub struct GroupedThousands(pub f64);

impl Debug for GroupedThousands {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for GroupedThousands {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = self.0.round_ties_even();
        if !rounded.is_finite() {
            return write!(f, "{rounded}");
        }
        let digits = format!("{:.0}", rounded.abs());
        let groups = digits
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| String::from_utf8_lossy(chunk))
            .join(",");
        if rounded < 0.0 { write!(f, "-{groups}") } else { write!(f, "{groups}") }
    }
}
