/* # profiles */

/* ## liquid water potential temperature */

pub const THL_MIXED: f64 = 297.9; // mixed layer value, K
pub const THL_TOP: f64 = 317.0; // value at the top breakpoint, K

/* ## heights */

pub const Z_INVERSION: f64 = 740.0; // top of the mixed layer, m
pub const Z_MOIST: f64 = 3260.0; // top of the moist layer, m
pub const Z_TOP: f64 = 4000.0; // top breakpoint, m
pub const Z_SUBSIDENCE: f64 = 2260.0; // subsidence reaches its maximum here, m
pub const Z_DRYING: f64 = 2980.0; // moisture tendency ramp ends here, m

/* ## total water, g/kg at 0, 740, 3260 and 4000 m */

pub const QT_GCSS: [f64; 4] = [16.0, 13.8, 2.4, 1.8];
pub const QT_SS08: [f64; 4] = [16.0, 13.8, 4.4, 3.6];
pub const QT_TEST: [f64; 4] = [18.0, 15.8, 2.4, 1.8];

/* ## wind */

pub const U_SURFACE: f64 = -9.9; // zonal wind at the surface, m/s
pub const U_SHEAR: f64 = 2.0e-3; // zonal wind shear, 1/s
pub const V_CONSTANT: f64 = -3.8; // meridional wind, m/s

/* ## large scale forcings */

pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const W_SUBSIDENCE: f64 = -0.005; // maximum subsidence, m/s
pub const THL_TENDENCY: f64 = -2.5 / SECONDS_PER_DAY; // K/s
pub const QT_TENDENCY_SURFACE: f64 = -1.0 / SECONDS_PER_DAY; // g/kg/s
pub const QT_TENDENCY_SPAN: f64 = 1.3456 / SECONDS_PER_DAY; // change across the ramp, g/kg/s
pub const QT_TENDENCY_ALOFT: f64 = 4e-6; // g/kg/s
