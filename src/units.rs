use crate::util::constants::{CP, P0, RD, T0};

pub trait Unit<T> {
    fn confine(value: T) -> Self;
    fn release(self) -> T;
}

macro_rules! impl_unit {
    ($unit:ident) => {
        #[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
        pub struct $unit(f64);

        impl Unit<f64> for $unit {
            fn confine(value: f64) -> Self {
                Self(value)
            }

            fn release(self) -> f64 {
                self.0
            }
        }
    };
}

impl_unit!(Temperature);
impl_unit!(Pressure);

impl Temperature {
    pub fn celsius(self) -> f64 {
        self.0 - T0
    }
}

impl Pressure {
    /// exner function relative to the 1000 hPa reference level
    pub fn exner(self) -> f64 {
        (self.0 / P0).powf(RD / CP)
    }
}

/* # moisture units */

/// marker for moisture quantities in g/kg
#[derive(Debug, Copy, Clone)]
pub struct Gram;

/// marker for moisture quantities in kg/kg
#[derive(Debug, Copy, Clone)]
pub struct Kilogram;
