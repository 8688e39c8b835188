pub mod contact;
pub mod heal;
pub mod health;
pub mod settings;
pub mod swagger;
pub mod trades;
pub mod users;
pub mod youtube;
