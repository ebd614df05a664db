pub mod users;
pub mod residences;
pub mod activities;
pub mod amenities;
pub mod reports;
pub mod complaints;
pub mod finance;
pub mod associations;
pub mod admin;
