#[macro_use]
mod macros;

pub mod consumption;
pub mod currency;
pub mod distance;
pub mod price;
pub mod time;

#[cfg(test)]
mod tests {
    use super::{currency::Rubles, price::LiterPrice};

    #[test]
    fn test_ordering() {
        assert!(LiterPrice(65.8) < LiterPrice(71.5));
        assert_eq!(Rubles(1.0).max(Rubles(2.0)), Rubles(2.0));
        assert_eq!(-Rubles(5.0), Rubles(-5.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("65.80".parse::<LiterPrice>().ok(), Some(LiterPrice(65.8)));
        assert!("65,80".parse::<LiterPrice>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LiterPrice(65.8).to_string(), "65.80 ₽/l");
    }
}
