pub mod affiliate;
pub mod audit;
pub mod contact;
pub mod job;
pub mod product;
pub mod role;
pub mod strategy;
pub mod trade;
pub mod user;
pub mod video;

pub use affiliate::*;
pub use audit::*;
pub use contact::*;
pub use job::*;
pub use product::*;
pub use role::*;
pub use strategy::*;
pub use trade::*;
pub use user::*;
pub use video::*;
