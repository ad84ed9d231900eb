pub mod trades_errors;
pub mod trades_model;
pub mod trades_repository;
pub mod trades_validator;

pub use trades_errors::TradeError;
pub use trades_model::{Trade, TradeIntent, TradeType};
pub use trades_repository::{TradeRepository, TradeRepositoryTrait};
pub use trades_validator::TradeValidator;
