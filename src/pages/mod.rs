pub mod about;
pub mod admin;
pub mod contact;
pub mod docs;
pub mod downloads;
pub mod home;
pub mod platform;
pub mod pricing;
pub mod products;
pub mod resources;
pub mod use_cases;
