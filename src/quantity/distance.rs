quantity!(Kilometers, suffix: "km", precision: 0);

impl From<u32> for Kilometers {
    fn from(kilometers: u32) -> Self {
        Self(f64::from(kilometers))
    }
}
