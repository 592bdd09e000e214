use crate::{
    config::Config,
    error::RicoResult,
    grid::Grid,
    profile::{case::Case, ProfileSet},
    table,
    thermo::Surface,
    units::Kilogram,
};
use log::info;
use std::path::PathBuf;

/// where to read the grid from, where to write the profiles to and which case to set up
#[derive(Clone, Debug)]
pub struct Settings {
    pub ini: PathBuf,
    pub prof: PathBuf,
    pub case: Case,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ini: PathBuf::from("rico.ini"),
            prof: PathBuf::from("rico.prof"),
            case: Case::default(),
        }
    }
}

/// write the initial profiles of a case and return its surface values
pub fn setup(settings: &Settings) -> RicoResult<Surface> {
    info!("reading grid from {}", settings.ini.display());
    let config = Config::load(&settings.ini)?;
    let grid = Grid::try_from(&config)?;

    info!("computing {} profiles on {} levels", settings.case, grid.len());
    let profiles = ProfileSet::<Kilogram>::generate(&grid, settings.case);

    info!("writing profiles to {}", settings.prof.display());
    table::save(&settings.prof, &grid, &profiles)?;

    Ok(Surface::rico())
}
