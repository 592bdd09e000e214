use crate::{
    units::{Pressure, Temperature, Unit},
    util::constants::*,
};
use log::trace;
use std::fmt;

/* # saturation */

/// saturation vapour pressure in Pa, polynomial fit bounded below at -80 degrees Celsius
pub fn esat(temperature: Temperature) -> f64 {
    let x = temperature.celsius().max(T_FLOOR);
    ESAT_COEFFICIENTS
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| coefficient + x * acc)
}

/// saturation specific humidity in kg/kg
pub fn qsat(pressure: Pressure, temperature: Temperature) -> f64 {
    let es = esat(temperature);
    EP * es / (pressure.release() - (1.0 - EP) * es)
}

/* # surface */

/// bottom boundary values of the prognostic scalars
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface {
    pub thl: f64,
    pub qt: f64,
}

impl Surface {
    /// saturated surface over sea at the given pressure and temperature
    pub fn calculate(pressure: Pressure, sst: Temperature) -> Self {
        trace!(
            "calculating surface values for ps = {} Pa, sst = {} K",
            pressure.release(),
            sst.release()
        );
        Self {
            thl: sst.release() / pressure.exner(),
            qt: qsat(pressure, sst),
        }
    }

    /// surface of the RICO case
    pub fn rico() -> Self {
        Self::calculate(Pressure::confine(PS), Temperature::confine(SST))
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sbot[thl]={:.6}, sbot[qt]={:.6}", self.thl, self.qt)
    }
}
