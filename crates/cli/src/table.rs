//! Tabular point IO (CSV / Parquet via polars).
//!
//! Output frames always carry `x, y, theta, rho` from fully synced points.
//! Input frames carry either `x, y` or `theta, rho`, selected by `Frame`.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use dualpoint::{Point, PointCfg};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Which view an input table provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Frame {
    Rectangular,
    Polar,
}

impl Frame {
    fn columns(self) -> (&'static str, &'static str) {
        match self {
            Frame::Rectangular => ("x", "y"),
            Frame::Polar => ("theta", "rho"),
        }
    }
}

fn is_parquet(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("parquet")
}

/// Read a CSV or Parquet table (by extension).
pub fn read_frame(path: &Path) -> Result<DataFrame> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {}", path.display()))?
    };
    Ok(lf.collect()?)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    let mut out = Vec::with_capacity(values.len());
    for (row, v) in values.into_iter().enumerate() {
        match v {
            Some(v) => out.push(v),
            None => bail!("null in column `{name}` at row {row}"),
        }
    }
    Ok(out)
}

/// Build points from a table; the named view becomes authoritative.
pub fn points_from_frame(df: &DataFrame, frame: Frame, cfg: PointCfg) -> Result<Vec<Point>> {
    let (a_name, b_name) = frame.columns();
    let a = f64_column(df, a_name)?;
    let b = f64_column(df, b_name)?;
    Ok(a
        .into_iter()
        .zip(b)
        .map(|(a, b)| {
            let mut p = Point::with_cfg(cfg);
            match frame {
                Frame::Rectangular => p.set_rectangular(a, b),
                Frame::Polar => p.set_polar(a, b),
            }
            p
        })
        .collect())
}

/// Sync every point and collect all four columns.
pub fn frame_from_points(points: &mut [Point]) -> Result<DataFrame> {
    let n = points.len();
    let (mut xs, mut ys, mut ths, mut rhos) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for p in points.iter_mut() {
        xs.push(p.x());
        ys.push(p.y());
        ths.push(p.theta());
        rhos.push(p.rho());
    }
    Ok(df!("x" => xs, "y" => ys, "theta" => ths, "rho" => rhos)?)
}

/// Write a CSV or Parquet table (by extension), creating parent dirs.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_rectangular_to_full_frame() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "x,y\n5.0,2.0\n0.0,3.0\n").unwrap();
        let df = read_frame(&input).unwrap();
        let mut pts = points_from_frame(&df, Frame::Rectangular, PointCfg::default()).unwrap();
        let mut out = frame_from_points(&mut pts).unwrap();
        assert_eq!(out.height(), 2);
        let rho = f64_column(&out, "rho").unwrap();
        assert!((rho[0] - 29.0f64.sqrt()).abs() < 1e-12);
        assert!((rho[1] - 3.0).abs() < 1e-12);

        let written = dir.path().join("nested/out.csv");
        write_frame(&mut out, &written).unwrap();
        let back = read_frame(&written).unwrap();
        assert_eq!(back.width(), 4);
        assert_eq!(f64_column(&back, "x").unwrap(), vec![5.0, 0.0]);
    }

    #[test]
    fn polar_input_and_parquet_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "theta,rho\n0.0,2.0\n").unwrap();
        let df = read_frame(&input).unwrap();
        let mut pts = points_from_frame(&df, Frame::Polar, PointCfg::default()).unwrap();
        assert!(pts[0].is_polar_valid() && !pts[0].is_rectangular_valid());
        let mut out = frame_from_points(&mut pts).unwrap();
        let written = dir.path().join("out.parquet");
        write_frame(&mut out, &written).unwrap();
        let back = read_frame(&written).unwrap();
        assert_eq!(f64_column(&back, "x").unwrap(), vec![2.0]);
        assert_eq!(f64_column(&back, "rho").unwrap(), vec![2.0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "x,z\n1.0,2.0\n").unwrap();
        let df = read_frame(&input).unwrap();
        let err = points_from_frame(&df, Frame::Rectangular, PointCfg::default()).unwrap_err();
        assert!(err.to_string().contains("missing column `y`"));
    }
}
