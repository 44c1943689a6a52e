pub mod availability;
pub mod badge;
pub mod cta;
pub mod footer;
pub mod icons;
pub mod logo;
pub mod navbar;
pub mod steps;
pub mod toaster;
