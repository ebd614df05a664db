pub mod user;
pub mod residence;
pub mod activity;
pub mod amenity;
pub mod report;
pub mod complaint;
pub mod finance;
pub mod associations;
pub mod registry;
