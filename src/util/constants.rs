/* # thermodynamics */

pub const RD: f64 = 287.04; // gas constant of dry air, J/kg/K
pub const RV: f64 = 461.5; // gas constant of water vapour, J/kg/K
pub const CP: f64 = 1005.0; // heat capacity of dry air at constant pressure, J/kg/K
pub const EP: f64 = RD / RV;
pub const P0: f64 = 1.0e5; // reference pressure of the exner function, Pa
pub const T0: f64 = 273.15; // freezing point, K
pub const T_FLOOR: f64 = -80.0; // lower bound of the esat fit, degrees Celsius

/* ## saturation vapour pressure polynomial */

pub const ESAT_COEFFICIENTS: [f64; 9] = [
    0.6105851e+03,
    0.4440316e+02,
    0.1430341e+01,
    0.2641412e-01,
    0.2995057e-03,
    0.2031998e-05,
    0.6936113e-08,
    0.2564861e-11,
    -0.3704404e-13,
];

/* # surface */

pub const PS: f64 = 101540.0; // surface pressure, Pa
pub const SST: f64 = 299.8; // sea surface temperature, K
