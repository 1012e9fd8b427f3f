pub mod admin;
pub mod blog;
pub mod booking;
pub mod contacts;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod promotions;
pub mod rooms;
