//! initial profiles and large scale forcings of the RICO trade wind cumulus case

pub mod config;
pub mod error;
pub mod grid;
pub mod profile;
pub mod setup;
pub mod table;
pub mod thermo;
pub mod units;
pub mod util;
pub mod vars;
