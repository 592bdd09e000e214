pub mod case;
pub mod ramp;

use crate::{
    grid::Grid,
    units::{Gram, Kilogram},
    vars::*,
};
use case::Case;
use log::trace;
use ramp::{Extent, Ramp};
use std::marker::PhantomData;

/* # ramps */

fn thl_ramp() -> Ramp {
    Ramp::new(&[(Z_INVERSION, THL_MIXED), (Z_TOP, THL_TOP)], Extent::Extrapolate)
}

fn qt_ramp(case: Case) -> Ramp {
    let [q0, q1, q2, q3] = case.moisture();
    Ramp::new(
        &[(0.0, q0), (Z_INVERSION, q1), (Z_MOIST, q2), (Z_TOP, q3)],
        Extent::Extrapolate,
    )
}

fn u_ramp() -> Ramp {
    Ramp::new(
        &[(0.0, U_SURFACE), (Z_TOP, U_SURFACE + U_SHEAR * Z_TOP)],
        Extent::Extrapolate,
    )
}

fn wls_ramp() -> Ramp {
    Ramp::new(&[(0.0, 0.0), (Z_SUBSIDENCE, W_SUBSIDENCE)], Extent::Clamp)
}

fn qtls_ramp() -> Ramp {
    Ramp::new(
        &[
            (0.0, QT_TENDENCY_SURFACE),
            (Z_DRYING, QT_TENDENCY_SURFACE + QT_TENDENCY_SPAN),
        ],
        Extent::Hold(QT_TENDENCY_ALOFT),
    )
}

/* # profile sets */

/// initial and forcing profiles on the cell centres of a grid
///
/// `M` is the unit of the moisture columns `qt` and `qtls`
#[derive(Clone, Debug)]
pub struct ProfileSet<M = Kilogram> {
    pub thl: Vec<f64>,
    pub qt: Vec<f64>,
    pub u: Vec<f64>,
    pub ug: Vec<f64>,
    pub v: Vec<f64>,
    pub vg: Vec<f64>,
    pub wls: Vec<f64>,
    pub thlls: Vec<f64>,
    pub qtls: Vec<f64>,
    moisture: PhantomData<M>,
}

impl<M> ProfileSet<M> {
    /// number of levels
    pub fn len(&self) -> usize {
        self.thl.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thl.is_empty()
    }

    /// named columns in file order
    pub fn columns(&self) -> [(&'static str, &[f64]); 9] {
        [
            ("thl", self.thl.as_slice()),
            ("qt", self.qt.as_slice()),
            ("u", self.u.as_slice()),
            ("ug", self.ug.as_slice()),
            ("v", self.v.as_slice()),
            ("vg", self.vg.as_slice()),
            ("wls", self.wls.as_slice()),
            ("thlls", self.thlls.as_slice()),
            ("qtls", self.qtls.as_slice()),
        ]
    }
}

impl ProfileSet<Gram> {
    /// evaluate every profile at the grid heights, moisture in g/kg
    pub fn calculate(grid: &Grid, case: Case) -> Self {
        trace!("calculating profiles for case {} on {} levels", case, grid.len());
        let z = &grid.z;
        let u = u_ramp().sample_all(z);
        let v = Ramp::constant(V_CONSTANT).sample_all(z);

        Self {
            thl: thl_ramp().sample_all(z),
            qt: qt_ramp(case).sample_all(z),
            ug: u.clone(),
            u,
            vg: v.clone(),
            v,
            wls: wls_ramp().sample_all(z),
            thlls: Ramp::constant(THL_TENDENCY).sample_all(z),
            qtls: qtls_ramp().sample_all(z),
            moisture: PhantomData,
        }
    }

    /// convert moisture and its tendency from g/kg to kg/kg
    pub fn normalise(self) -> ProfileSet<Kilogram> {
        trace!("normalising moisture profiles");
        let scale = |column: Vec<f64>| -> Vec<f64> {
            column.into_iter().map(|q| q / 1000.).collect()
        };
        ProfileSet {
            thl: self.thl,
            qt: scale(self.qt),
            u: self.u,
            ug: self.ug,
            v: self.v,
            vg: self.vg,
            wls: self.wls,
            thlls: self.thlls,
            qtls: scale(self.qtls),
            moisture: PhantomData,
        }
    }
}

impl ProfileSet<Kilogram> {
    /// profiles in SI units, ready to be written
    pub fn generate(grid: &Grid, case: Case) -> Self {
        ProfileSet::<Gram>::calculate(grid, case).normalise()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    fn grid() -> Grid {
        Grid::new(4, 4000.0).unwrap()
    }

    #[test]
    fn thl_values() {
        let profiles = ProfileSet::<Gram>::calculate(&grid(), Case::Gcss);
        assert_eq!(profiles.thl[0], 297.9);
        assert_float_eq!(profiles.thl[1], 302.352761, abs <= EPSILON);
        assert_float_eq!(profiles.thl[2], 308.211656, abs <= EPSILON);
        assert_float_eq!(profiles.thl[3], 314.070552, abs <= EPSILON);
    }

    #[test]
    fn thl_independent_of_case() {
        let gcss = ProfileSet::<Gram>::calculate(&grid(), Case::Gcss);
        for case in [Case::Ss08, Case::Test] {
            assert_eq!(ProfileSet::<Gram>::calculate(&grid(), case).thl, gcss.thl);
        }
    }

    #[test]
    fn qt_gcss_values() {
        let profiles = ProfileSet::<Gram>::calculate(&grid(), Case::Gcss);
        assert_float_eq!(
            profiles.qt,
            vec![14.513514, 10.361905, 5.838095, 2.205405],
            abs <= vec![EPSILON; 4]
        );
    }

    #[test]
    fn qt_breakpoints() {
        let h = 1e-7;
        for case in Case::ALL {
            let [q0, q1, q2, q3] = case.moisture();
            let ramp = qt_ramp(case);
            assert_float_eq!(ramp.sample(0.0), q0, abs <= EPSILON);
            for (height, value) in [(Z_INVERSION, q1), (Z_MOIST, q2)] {
                assert_float_eq!(ramp.sample(height - h), value, abs <= EPSILON);
                assert_float_eq!(ramp.sample(height), value, abs <= EPSILON);
                assert_float_eq!(ramp.sample(height + h), value, abs <= EPSILON);
            }
            assert_float_eq!(ramp.sample(Z_TOP), q3, abs <= EPSILON);
        }
    }

    #[test]
    fn qt_above_top() {
        // last segment of gcss falls 0.6 g/kg over 740 m
        let ramp = qt_ramp(Case::Gcss);
        assert_float_eq!(ramp.sample(4740.0), 1.2, abs <= EPSILON);
    }

    #[test]
    fn subsidence() {
        let ramp = wls_ramp();
        assert_eq!(ramp.sample(0.0), 0.0);
        assert_eq!(ramp.sample(Z_SUBSIDENCE), -0.005);
        assert_eq!(ramp.sample(3000.0), -0.005);
        assert_eq!(ramp.sample(10000.0), -0.005);
        assert_float_eq!(ramp.sample(565.0), -0.00125, abs <= 1e-12);
        assert_float_eq!(ramp.sample(1130.0), -0.0025, abs <= 1e-12);
        assert_float_eq!(ramp.sample(1695.0), -0.00375, abs <= 1e-12);
    }

    #[test]
    fn winds() {
        let profiles = ProfileSet::<Gram>::calculate(&grid(), Case::Gcss);
        assert_float_eq!(
            profiles.u,
            vec![-8.9, -6.9, -4.9, -2.9],
            abs <= vec![EPSILON; 4]
        );
        assert_eq!(profiles.ug, profiles.u);
        assert_eq!(profiles.v, vec![-3.8; 4]);
        assert_eq!(profiles.vg, profiles.v);
    }

    #[test]
    fn tendencies() {
        let profiles = ProfileSet::<Gram>::calculate(&grid(), Case::Gcss);
        assert_eq!(profiles.thlls, vec![-2.5 / 86400.; 4]);
        assert_float_eq!(profiles.qtls[0], -8.960974e-6, abs <= 1e-12);
        assert_float_eq!(profiles.qtls[2], 1.491424e-6, abs <= 1e-12);
        assert_eq!(profiles.qtls[3], 4e-6);

        let ramp = qtls_ramp();
        assert_float_eq!(ramp.sample(Z_DRYING), 0.3456 / 86400., abs <= 1e-15);
    }

    #[test]
    fn normalise_moisture() {
        let raw = ProfileSet::<Gram>::calculate(&grid(), Case::Ss08);
        let si = raw.clone().normalise();
        for k in 0..raw.len() {
            assert_eq!(si.qt[k], raw.qt[k] / 1000.);
            assert_eq!(si.qtls[k], raw.qtls[k] / 1000.);
        }
        assert_eq!(si.thl, raw.thl);
        assert_eq!(si.wls, raw.wls);
    }

    #[test]
    fn generate_matches_calculate() {
        let profiles = ProfileSet::<Kilogram>::generate(&grid(), Case::Test);
        assert_float_eq!(profiles.qt[0], 0.016513514, abs <= 1e-9);
    }

    #[test]
    fn columns_aligned() {
        let grid = Grid::new(37, 5000.0).unwrap();
        let profiles = ProfileSet::<Kilogram>::generate(&grid, Case::Gcss);
        assert_eq!(profiles.len(), 37);
        for (_, column) in profiles.columns() {
            assert_eq!(column.len(), grid.len());
        }
    }
}
