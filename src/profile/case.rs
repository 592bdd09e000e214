use crate::{
    error::RicoError,
    vars::{QT_GCSS, QT_SS08, QT_TEST},
};
use std::{fmt, str::FromStr};

/// setup of the RICO moisture profile
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Case {
    /// original GCSS intercomparison
    #[default]
    Gcss,
    /// moist RICO of Stevens and Seifert
    Ss08,
    /// moister mixed layer for testing
    Test,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Gcss, Case::Ss08, Case::Test];

    pub fn name(self) -> &'static str {
        match self {
            Case::Gcss => "gcss",
            Case::Ss08 => "ss08",
            Case::Test => "test",
        }
    }

    /// total water in g/kg at the 0, 740, 3260 and 4000 m breakpoints
    pub fn moisture(self) -> [f64; 4] {
        match self {
            Case::Gcss => QT_GCSS,
            Case::Ss08 => QT_SS08,
            Case::Test => QT_TEST,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = RicoError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|case| case.name() == name)
            .ok_or_else(|| RicoError::UnknownCase(name.to_string()))
    }
}
