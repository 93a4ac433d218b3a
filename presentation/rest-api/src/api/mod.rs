pub mod cart;
pub mod checkout;
pub mod error;
pub mod health;
pub mod product;
pub mod promotional_video;
pub mod tags;
