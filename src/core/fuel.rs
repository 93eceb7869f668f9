use std::fmt::{Display, Formatter};

use enumset::EnumSet;
use serde::Serialize;

use crate::quantity::price::LiterPrice;

#[derive(Debug, Serialize, clap::ValueEnum, enumset::EnumSetType)]
pub enum Fuel {
    /// 92-octane petrol.
    #[value(name = "ai-92")]
    #[serde(rename = "AI-92")]
    Ai92,

    /// 95-octane petrol.
    #[value(name = "ai-95")]
    #[serde(rename = "AI-95")]
    Ai95,

    /// Diesel fuel.
    #[value(name = "diesel")]
    #[serde(rename = "Diesel")]
    Diesel,
}

impl Fuel {
    /// All the fuels in the order they're displayed.
    pub fn all() -> impl Iterator<Item = Self> {
        EnumSet::<Self>::all().iter()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ai92 => "AI-92",
            Self::Ai95 => "AI-95",
            Self::Diesel => "Diesel",
        }
    }

    /// Fragments that identify the fuel in a scraped row label.
    ///
    /// Matching is case-sensitive.
    pub const fn fragments(self) -> &'static [&'static str] {
        match self {
            Self::Ai92 => &["92"],
            Self::Ai95 => &["95"],
            Self::Diesel => &["Дизель", "Diesel"],
        }
    }

    pub fn matches(self, label: &str) -> bool {
        self.fragments().iter().any(|fragment| label.contains(fragment))
    }

    /// Archived price used whenever the live one is unavailable.
    pub const fn default_price(self) -> LiterPrice {
        match self {
            Self::Ai92 => LiterPrice(65.80),
            Self::Ai95 => LiterPrice(71.50),
            Self::Diesel => LiterPrice(68.20),
        }
    }
}

impl Display for Fuel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Price of every known fuel.
///
/// There is no way to remove an entry, so the table is always complete.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FuelPriceTable {
    #[serde(rename = "AI-92")]
    ai_92: LiterPrice,

    #[serde(rename = "AI-95")]
    ai_95: LiterPrice,

    #[serde(rename = "Diesel")]
    diesel: LiterPrice,
}

impl Default for FuelPriceTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FuelPriceTable {
    /// Archived prices of all the fuels.
    pub const DEFAULT: Self = Self {
        ai_92: Fuel::Ai92.default_price(),
        ai_95: Fuel::Ai95.default_price(),
        diesel: Fuel::Diesel.default_price(),
    };

    pub const fn get(&self, fuel: Fuel) -> LiterPrice {
        match fuel {
            Fuel::Ai92 => self.ai_92,
            Fuel::Ai95 => self.ai_95,
            Fuel::Diesel => self.diesel,
        }
    }

    pub const fn set(&mut self, fuel: Fuel, price: LiterPrice) {
        match fuel {
            Fuel::Ai92 => self.ai_92 = price,
            Fuel::Ai95 => self.ai_95 = price,
            Fuel::Diesel => self.diesel = price,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Fuel, LiterPrice)> + '_ {
        Fuel::all().map(|fuel| (fuel, self.get(fuel)))
    }
}
