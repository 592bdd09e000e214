use crate::{
    error::{RicoError, RicoResult},
    grid::Grid,
    profile::ProfileSet,
    units::Kilogram,
};
use itertools::Itertools;
use log::trace;
use std::{
    fs,
    io::{self, BufWriter, Write},
    iter,
    path::Path,
};

/// header of the profile file, in column order
pub const COLUMNS: [&str; 10] = ["z", "thl", "qt", "u", "ug", "v", "vg", "wls", "thlls", "qtls"];

const HEADER_WIDTH: usize = 20;
const PRECISION: usize = 14;

/// scientific notation with a signed exponent of at least two digits, e.g. `-9.90000000000000E+00`
pub fn scientific(value: f64) -> String {
    let formatted = format!("{:.*E}", PRECISION, value);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!(
                "{}E{}{:02}",
                mantissa,
                if exponent < 0 { '-' } else { '+' },
                exponent.abs()
            ),
            Err(_) => formatted,
        },
        None => formatted.to_uppercase(),
    }
}

fn header() -> String {
    COLUMNS
        .iter()
        .map(|name| format!("{:^width$}", name, width = HEADER_WIDTH))
        .join(" ")
}

/* # writing */

/// write the height and profile columns as a fixed width table
pub fn render<W: Write>(
    writer: &mut W,
    grid: &Grid,
    profiles: &ProfileSet<Kilogram>,
) -> io::Result<()> {
    writeln!(writer, "{}", header())?;
    let columns = profiles.columns();
    for (k, &height) in grid.z.iter().enumerate() {
        let row = iter::once(height)
            .chain(columns.iter().map(|(_, column)| column[k]))
            .map(scientific)
            .join(" ");
        writeln!(writer, "{}", row)?;
    }
    Ok(())
}

/// save profiles to a file, replacing whatever was there
pub fn save(path: &Path, grid: &Grid, profiles: &ProfileSet<Kilogram>) -> RicoResult<()> {
    trace!("saving {} levels to {}", grid.len(), path.display());
    let mut writer = BufWriter::new(fs::File::create(path)?);
    render(&mut writer, grid, profiles)?;
    writer.flush()?;
    Ok(())
}

/* # reading */

/// profile file read back into named columns
#[derive(Clone, Debug)]
pub struct ProfileTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ProfileTable {
    pub fn parse(text: &str) -> RicoResult<Self> {
        let mut lines = text.lines().enumerate();
        let names = lines
            .next()
            .map(|(_, header)| {
                header
                    .split_whitespace()
                    .map(String::from)
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default();
        if names.is_empty() {
            return Err(RicoError::Table {
                line: 1,
                reason: "missing header".to_string(),
            });
        }

        let mut columns = vec![Vec::new(); names.len()];
        for (j, line) in lines.filter(|(_, line)| !line.trim().is_empty()) {
            let values = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| RicoError::Table {
                        line: j + 1,
                        reason: format!("unparsable value `{}`", token),
                    })
                })
                .collect::<RicoResult<Vec<f64>>>()?;
            if values.len() != names.len() {
                return Err(RicoError::Table {
                    line: j + 1,
                    reason: format!("expected {} values, found {}", names.len(), values.len()),
                });
            }
            for (column, value) in columns.iter_mut().zip(values) {
                column.push(value);
            }
        }

        Ok(Self { names, columns })
    }

    pub fn load(path: &Path) -> RicoResult<Self> {
        trace!("loading profiles from {}", path.display());
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// number of levels
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// column with the given header name
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|column| column == name)
            .map(|j| self.columns[j].as_slice())
    }
}
