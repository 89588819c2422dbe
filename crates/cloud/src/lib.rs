//! Reads point clouds stored as delimited text tables.
//!
//! Fields may be separated by commas, semicolons, tabs or runs of spaces.
//! When the first row holds column names, the `x`, `y` and `z` columns are
//! located by name (case-insensitive) along with an optional `elevation`
//! column; any other column is ignored. Without a header the columns are
//! read by position as `x y z [elevation]`. Blank lines and lines starting
//! with `#` are skipped.

mod error;

use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use tinvol_mesh::{CartesianCoordinate, PointCloud};

pub use error::*;

/// Where each field lives within a row.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Columns {
    x: usize,
    y: usize,
    z: usize,
    elevation: Option<usize>,
}

impl Columns {
    const POSITIONAL: Columns = Columns {
        x: 0,
        y: 1,
        z: 2,
        elevation: None,
    };

    fn from_header(names: &[&str]) -> Result<Self> {
        let find = |name: &str| {
            names
                .iter()
                .position(|n| n.trim_matches('"').eq_ignore_ascii_case(name))
        };
        Ok(Columns {
            x: find("x").ok_or(CloudError::MissingColumn("x"))?,
            y: find("y").ok_or(CloudError::MissingColumn("y"))?,
            z: find("z").ok_or(CloudError::MissingColumn("z"))?,
            elevation: find("elevation"),
        })
    }

    fn width(&self) -> usize {
        [self.x, self.y, self.z, self.elevation.unwrap_or(0)]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    let fields: Vec<&str> = if line.contains(',') {
        line.split(',').collect()
    } else if line.contains(';') {
        line.split(';').collect()
    } else {
        line.split_whitespace().collect()
    };
    fields.into_iter().map(str::trim).collect()
}

fn parse_field(fields: &[&str], index: usize, column: &'static str, line: usize) -> Result<f64> {
    let value = fields[index];
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CloudError::InvalidNumber {
            line,
            column,
            value: value.to_string(),
        }),
    }
}

fn read_table<R: BufRead>(r: &mut R) -> Result<PointCloud> {
    let mut columns: Option<Columns> = None;
    let mut points = Vec::new();
    let mut elevation = Vec::new();

    for (n, line) in r.lines().enumerate() {
        let line = line?;
        let line_number = n + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields = split_fields(trimmed);

        let layout = match columns {
            Some(layout) => layout,
            None => {
                // The first row is a header unless every field is a number.
                if fields.iter().any(|f| f.parse::<f64>().is_err()) {
                    let layout = Columns::from_header(&fields)?;
                    debug!("point cloud header maps columns to {:?}", layout);
                    columns = Some(layout);
                    continue;
                }
                let mut layout = Columns::POSITIONAL;
                if fields.len() > 3 {
                    layout.elevation = Some(3);
                }
                if fields.len() > 4 {
                    warn!(
                        "point cloud has no header, ignoring {} columns after the fourth",
                        fields.len() - 4
                    );
                }
                columns = Some(layout);
                layout
            }
        };

        if fields.len() < layout.width() {
            return Err(CloudError::ShortRow {
                line: line_number,
                expected: layout.width(),
                found: fields.len(),
            });
        }
        points.push(CartesianCoordinate::new(
            parse_field(&fields, layout.x, "x", line_number)?,
            parse_field(&fields, layout.y, "y", line_number)?,
            parse_field(&fields, layout.z, "z", line_number)?,
        ));
        if let Some(index) = layout.elevation {
            elevation.push(parse_field(&fields, index, "elevation", line_number)?);
        }
    }

    if points.is_empty() {
        return Err(CloudError::Empty);
    }
    debug!("read {} points", points.len());
    Ok(if elevation.is_empty() {
        PointCloud::new(points)
    } else {
        PointCloud::with_elevation(points.into_iter().zip(elevation))
    })
}

pub fn read_cloud<P: AsRef<Path>>(p: P) -> Result<PointCloud> {
    let f = std::fs::File::open(p)?;
    read_table(&mut BufReader::new(f))
}

pub fn parse_cloud(data: &[u8]) -> Result<PointCloud> {
    let mut c = std::io::Cursor::new(data);
    read_table(&mut c)
}

pub trait CloudReader: BufRead {
    fn read_cloud(&mut self) -> Result<PointCloud>;
}

impl<T: BufRead> CloudReader for T {
    fn read_cloud(&mut self) -> Result<PointCloud> {
        read_table(self)
    }
}
