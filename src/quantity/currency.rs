use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::fmt::GroupedThousands;

/// Russian rubles.
#[repr(transparent)]
#[derive(
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
    Clone,
    Copy,
)]
pub struct Rubles(pub f64);

ordered_float!(Rubles);
derive_neg!(Rubles);

impl Rubles {
    pub const ZERO: Self = Self(0.0);
}

impl Div for Rubles {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Display for Rubles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ₽", GroupedThousands(self.0))
    }
}

impl Debug for Rubles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}₽", self.0)
    }
}
