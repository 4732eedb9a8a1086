use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dualpoint::api::{draw_points, draw_polar_points, PointReplay, SampleCfg, SampleRegion};
use dualpoint::{Point, PointCfg};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};
use table::Frame;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Dual-representation point demos and batch conversion")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the canonical set_rectangular / set_polar walkthrough
    Demo,
    /// Build one point, apply optional rotate/offset, print it
    Point {
        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        y: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        theta: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        rho: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        rotate: Option<f64>,
        /// Translation as `dx,dy`
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
        /// Recover rho with hypot(x, y) instead of y / sin(theta)
        #[arg(long)]
        hardened: bool,
        #[arg(long)]
        json: bool,
    },
    /// Convert a CSV/Parquet table of points into all four columns
    Convert {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Frame::Rectangular)]
        from: Frame,
        #[arg(long)]
        hardened: bool,
    },
    /// Draw replayable random points and write them as a table
    Sample {
        #[arg(long, default_value_t = 16)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = RegionArg::Disk)]
        region: RegionArg,
        /// Disk radius or box half-width
        #[arg(long, default_value_t = 1.0)]
        size: f64,
        /// Store points polar-authoritative before syncing
        #[arg(long)]
        polar: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RegionArg {
    Disk,
    #[value(name = "box")]
    Square,
}

#[derive(Serialize)]
struct PointRow {
    x: f64,
    y: f64,
    theta: f64,
    rho: f64,
    rendered: String,
}

impl PointRow {
    fn from_point(p: &mut Point) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            theta: p.theta(),
            rho: p.rho(),
            rendered: p.render(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Point {
            x,
            y,
            theta,
            rho,
            rotate,
            offset,
            hardened,
            json,
        } => point(
            PointArgs {
                x,
                y,
                theta,
                rho,
                rotate,
                offset,
                hardened,
            },
            json,
        ),
        Action::Convert {
            input,
            out,
            from,
            hardened,
        } => convert(input, out, from, hardened, cmd.tag),
        Action::Sample {
            count,
            seed,
            index,
            region,
            size,
            polar,
            out,
        } => sample(
            SampleArgs {
                count,
                seed,
                index,
                region,
                size,
                polar,
            },
            out,
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn demo() -> Result<()> {
    tracing::info!("demo");
    for line in demo_lines() {
        println!("{line}");
    }
    Ok(())
}

fn demo_lines() -> Vec<String> {
    let mut p1 = Point::new();
    let mut lines = vec![format!("p1 ={}", p1.render())];
    p1.set_rectangular(5.0, 2.0);
    lines.push(format!("p1 ={}", p1.render()));
    p1.set_polar(std::f64::consts::PI / 4.0, 1.0);
    lines.push(format!("p1 ={}", p1.render()));
    p1.set_polar(0.3805, 5.385);
    lines.push(format!("p1 ={}", p1.render()));
    lines
}

struct PointArgs {
    x: Option<f64>,
    y: Option<f64>,
    theta: Option<f64>,
    rho: Option<f64>,
    rotate: Option<f64>,
    offset: Option<String>,
    hardened: bool,
}

fn point_cfg(hardened: bool) -> PointCfg {
    if hardened {
        PointCfg::hardened()
    } else {
        PointCfg::default()
    }
}

fn parse_offset(s: &str) -> Result<(f64, f64)> {
    let Some((a, b)) = s.split_once(',') else {
        bail!("offset must be `dx,dy`, got `{s}`");
    };
    let dx = a.trim().parse().with_context(|| format!("parsing dx `{a}`"))?;
    let dy = b.trim().parse().with_context(|| format!("parsing dy `{b}`"))?;
    Ok((dx, dy))
}

fn build_point(args: &PointArgs) -> Result<Point> {
    let mut p = Point::with_cfg(point_cfg(args.hardened));
    let rect = args.x.is_some() || args.y.is_some();
    let pol = args.theta.is_some() || args.rho.is_some();
    match (rect, pol) {
        (true, true) => bail!("pass either --x/--y or --theta/--rho, not both"),
        (true, false) => p.set_rectangular(args.x.unwrap_or(0.0), args.y.unwrap_or(0.0)),
        (false, true) => p.set_polar(args.theta.unwrap_or(0.0), args.rho.unwrap_or(0.0)),
        (false, false) => {}
    }
    if let Some(angle) = args.rotate {
        p.rotate(angle);
    }
    if let Some(off) = &args.offset {
        let (dx, dy) = parse_offset(off)?;
        p.offset(dx, dy);
    }
    Ok(p)
}

fn point(args: PointArgs, json: bool) -> Result<()> {
    let mut p = build_point(&args)?;
    let row = PointRow::from_point(&mut p);
    tracing::info!(
        x = row.x,
        y = row.y,
        theta = row.theta,
        rho = row.rho,
        hardened = args.hardened,
        "point"
    );
    if row.rho.is_nan() {
        tracing::warn!("rho is NaN (point on the non-negative x-axis); see --hardened");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        println!("{}", row.rendered);
    }
    Ok(())
}

fn convert(
    input: PathBuf,
    out: PathBuf,
    from: Frame,
    hardened: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?from, hardened, tag = ?tag, "convert");
    let df = table::read_frame(&input)?;
    let mut points = table::points_from_frame(&df, from, point_cfg(hardened))?;
    let mut frame = table::frame_from_points(&mut points)?;
    let nan_rho = points.iter_mut().map(|p| p.rho()).filter(|r| r.is_nan()).count();
    tracing::info!(rows = frame.height(), nan_rho, "converted");
    table::write_frame(&mut frame, &out)?;

    let payload = Payload::new(serde_json::json!({
        "command": "convert",
        "input": input.to_string_lossy(),
        "from": format!("{from:?}"),
        "hardened": hardened,
        "rows": frame.height(),
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

struct SampleArgs {
    count: usize,
    seed: u64,
    index: u64,
    region: RegionArg,
    size: f64,
    polar: bool,
}

fn sample(args: SampleArgs, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(
        count = args.count,
        seed = args.seed,
        index = args.index,
        region = ?args.region,
        size = args.size,
        polar = args.polar,
        out = %out.display(),
        "sample"
    );
    if !(args.size.is_finite() && args.size > 0.0) {
        bail!("--size must be a positive finite number, got {}", args.size);
    }
    let region = match args.region {
        RegionArg::Disk => SampleRegion::Disk { radius: args.size },
        RegionArg::Square => SampleRegion::Box {
            half_width: args.size,
        },
    };
    let cfg = SampleCfg {
        region,
        count: args.count,
        point_cfg: PointCfg::default(),
    };
    let tok = PointReplay::new(args.seed, args.index);
    let mut points = if args.polar {
        draw_polar_points(cfg, tok)
    } else {
        draw_points(cfg, tok)
    };
    let mut frame = table::frame_from_points(&mut points)?;
    table::write_frame(&mut frame, &out)?;

    let payload = Payload::new(serde_json::json!({
        "command": "sample",
        "count": args.count,
        "seed": args.seed,
        "index": args.index,
        "region": format!("{:?}", args.region),
        "size": args.size,
        "polar": args.polar,
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::report_block(tag);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
