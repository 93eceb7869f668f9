pub mod petrol_plus;
mod price_source;

pub use self::{petrol_plus::Api as PetrolPlus, price_source::PriceSource};
