pub mod backtest_service;
pub mod heal_service;
pub mod script_service;

pub use backtest_service::*;
pub use script_service::*;
