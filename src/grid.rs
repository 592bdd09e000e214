use crate::{
    config::Config,
    error::{RicoError, RicoResult},
};
use log::trace;

/// evenly spaced vertical grid
#[derive(Clone, Debug)]
pub struct Grid {
    /// cell centre heights, m
    pub z: Vec<f64>,
    /// cell face heights, one more than there are cells, m
    pub zh: Vec<f64>,
    pub dz: f64,
}

impl Grid {
    pub fn new(ktot: i64, zsize: f64) -> RicoResult<Self> {
        if ktot <= 0 {
            return Err(RicoError::LevelCount(ktot));
        }
        if !(zsize.is_finite() && zsize > 0.0) {
            return Err(RicoError::DomainHeight(zsize));
        }
        let kmax = ktot as usize;
        let dz = zsize / kmax as f64;
        trace!("building grid of {} levels, dz = {} m", kmax, dz);

        // the top centre is pinned so it lands at zsize - dz/2 without accumulated error
        let z = (0..kmax)
            .map(|k| {
                if k + 1 == kmax {
                    zsize - 0.5 * dz
                } else {
                    (k as f64 + 0.5) * dz
                }
            })
            .collect();
        let zh = (0..=kmax)
            .map(|k| if k == kmax { zsize } else { k as f64 * dz })
            .collect();

        Ok(Self { z, zh, dz })
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    pub fn top(&self) -> f64 {
        self.zh[self.zh.len() - 1]
    }
}

impl<'a> TryFrom<&'a Config> for Grid {
    type Error = RicoError;

    fn try_from(config: &'a Config) -> RicoResult<Self> {
        Self::new(config.ktot, config.zsize)
    }
}
