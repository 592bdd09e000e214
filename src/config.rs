use crate::error::{RicoError, RicoResult};
use log::trace;
use std::{fs, path::Path, str::FromStr};

pub const KEY_LEVELS: &str = "ktot";
pub const KEY_HEIGHT: &str = "zsize";

/// the two grid settings read from the case ini file
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    pub ktot: i64,
    pub zsize: f64,
}

/// last value assigned to `key`, if any
///
/// the line is split on its first `=` and the left hand side has to match the key
/// verbatim, so `ktot = 64` does not set `ktot`
fn lookup<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .filter(|(name, _)| *name == key)
        .map(|(_, value)| value)
        .last()
}

fn extract<T: FromStr>(text: &str, key: &str) -> RicoResult<T> {
    let value = lookup(text, key).ok_or_else(|| RicoError::MissingKey(key.to_string()))?;
    value
        .trim()
        .parse::<T>()
        .map_err(|_| RicoError::InvalidValue {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
}

impl Config {
    pub fn parse(text: &str) -> RicoResult<Self> {
        Ok(Self {
            ktot: extract(text, KEY_LEVELS)?,
            zsize: extract(text, KEY_HEIGHT)?,
        })
    }

    pub fn load(path: &Path) -> RicoResult<Self> {
        trace!("reading configuration from {}", path.display());
        Self::parse(&fs::read_to_string(path)?)
    }
}
