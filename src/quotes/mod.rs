pub mod quotes_constants;
pub mod quotes_errors;
pub mod quotes_model;
pub mod quotes_provider;
pub mod quotes_service;

pub use quotes_constants::*;
pub use quotes_errors::QuoteError;
pub use quotes_model::{PriceObservation, RawPrice, RawPriceTick};
pub use quotes_provider::PriceProvider;
pub use quotes_service::{QuotePoller, QuoteState};
