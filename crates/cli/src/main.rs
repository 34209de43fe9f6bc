use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use science::{Angle, AngleUnit, Orientation, Vector, VectorOptions};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "science")]
#[command(about = "Plane angles and 2D vectors from the command line")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Normalize an angle and print it in both units
    Angle {
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// degrees, deg, radians or rad
        #[arg(long, default_value = "rad")]
        unit: String,
    },
    /// Build a vector from polar (--norm, --orientation) or Cartesian (--x, --y) input
    Vector {
        #[arg(long, allow_negative_numbers = true)]
        norm: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        orientation: Option<f64>,
        /// Unit of --orientation
        #[arg(long, default_value = "rad")]
        orientation_unit: String,
        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        y: Option<f64>,
        /// Unit used to print the orientation
        #[arg(long, default_value = "deg")]
        unit: String,
    },
    /// Add two vectors given by components
    Add {
        #[arg(long, allow_negative_numbers = true)]
        x1: f64,
        #[arg(long, allow_negative_numbers = true)]
        y1: f64,
        #[arg(long, allow_negative_numbers = true)]
        x2: f64,
        #[arg(long, allow_negative_numbers = true)]
        y2: f64,
    },
    /// Solve w = k1 u + k2 v
    Combine {
        #[arg(long, allow_negative_numbers = true)]
        wx: f64,
        #[arg(long, allow_negative_numbers = true)]
        wy: f64,
        #[arg(long, allow_negative_numbers = true)]
        ux: f64,
        #[arg(long, allow_negative_numbers = true)]
        uy: f64,
        #[arg(long, allow_negative_numbers = true)]
        vx: f64,
        #[arg(long, allow_negative_numbers = true)]
        vy: f64,
    },
    /// Print version metadata as JSON
    Report {
        /// Also write the JSON to this path
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Serialize)]
struct Report {
    name: &'static str,
    version: &'static str,
    code_rev: &'static str,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let text = match cmd.action {
        Action::Angle { value, unit } => angle(value, &unit),
        Action::Vector {
            norm,
            orientation,
            orientation_unit,
            x,
            y,
            unit,
        } => vector(norm, orientation, &orientation_unit, x, y, &unit),
        Action::Add { x1, y1, x2, y2 } => add(x1, y1, x2, y2),
        Action::Combine {
            wx,
            wy,
            ux,
            uy,
            vx,
            vy,
        } => combine([wx, wy], [ux, uy], [vx, vy]),
        Action::Report { out } => report(out.as_deref()),
    }
    .inspect_err(|e| tracing::warn!(error = %e, "rejected"))?;
    print!("{text}");
    Ok(())
}

fn angle(value: f64, unit: &str) -> Result<String> {
    tracing::info!(value, unit, "angle");
    let a = Angle::with_unit_tag(value, unit)?;
    Ok(format!(
        "{}\n{}\n",
        a.as_string(AngleUnit::Degrees),
        a.as_string(AngleUnit::Radians)
    ))
}

fn vector(
    norm: Option<f64>,
    orientation: Option<f64>,
    orientation_unit: &str,
    x: Option<f64>,
    y: Option<f64>,
    unit: &str,
) -> Result<String> {
    tracing::info!(?norm, ?orientation, orientation_unit, ?x, ?y, unit, "vector");
    let orientation = orientation
        .map(|o| Angle::with_unit_tag(o, orientation_unit).map(Orientation::Angle))
        .transpose()?;
    let options = VectorOptions {
        norm,
        orientation,
        x,
        y,
    };
    let v = Vector::from_options(options)?;
    Ok(v.as_string(unit.parse()?))
}

fn add(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<String> {
    tracing::info!(x1, y1, x2, y2, "add");
    let a = Vector::cartesian(x1, y1).context("first vector")?;
    let b = Vector::cartesian(x2, y2).context("second vector")?;
    Ok(a.add(&b).context("sum")?.to_string())
}

fn combine(w: [f64; 2], u: [f64; 2], v: [f64; 2]) -> Result<String> {
    tracing::info!(?w, ?u, ?v, "combine");
    let w = Vector::cartesian(w[0], w[1]).context("w")?;
    let u = Vector::cartesian(u[0], u[1]).context("u")?;
    let v = Vector::cartesian(v[0], v[1]).context("v")?;
    let r = w.linear_combination(&u, &v)?;
    Ok(format!("k1 = {}\nk2 = {}\n", r.k1, r.k2))
}

fn report(out: Option<&str>) -> Result<String> {
    let obj = Report {
        name: "science",
        version: science::VERSION,
        code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown"),
    };
    let text = format!("{}\n", serde_json::to_string_pretty(&obj)?);
    if let Some(out) = out {
        tracing::info!(out, "report");
        let out_path = Path::new(out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating report dir {}", parent.display()))?;
            }
        }
        std::fs::write(out_path, &text)
            .with_context(|| format!("writing report {}", out_path.display()))?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_negative_values() {
        let args = [
            "science", "add", "--x1", "10", "--y1", "5", "--x2", "-7", "--y2", "-3",
        ];
        let cmd = Cmd::try_parse_from(args).unwrap();
        match cmd.action {
            Action::Add { x2, y2, .. } => assert_eq!((x2, y2), (-7.0, -3.0)),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn angle_prints_both_units() {
        let text = angle(-370.0, "deg").unwrap();
        assert_eq!(text, "350°\n6.108652381980153 rad\n");
        assert!(angle(1.0, "angle").is_err());
    }

    #[test]
    fn vector_from_components() {
        let text = vector(None, None, "rad", Some(16.0), Some(26.0), "deg").unwrap();
        assert!(text.starts_with("Vector :\n- x = 16\n- y = 26\n"));
    }

    #[test]
    fn vector_from_polar_degrees() {
        let text = vector(Some(2.0), Some(90.0), "deg", None, None, "deg").unwrap();
        assert!(text.ends_with("- norm = 2\n- orientation = 90°\n"), "{text}");
    }

    #[test]
    fn vector_missing_keys_is_an_error() {
        let err = vector(Some(45.0), None, "rad", Some(5.0), None, "deg").unwrap_err();
        assert!(err.to_string().contains("norm and orientation or x and y"));
    }

    #[test]
    fn add_and_combine() {
        let sum = add(10.0, 5.0, -7.0, -3.0).unwrap();
        assert!(sum.starts_with("Vector :\n- x = 3\n- y = 2\n"));
        assert_eq!(
            combine([16.0, 26.0], [2.0, 5.0], [3.0, 4.0]).unwrap(),
            "k1 = 2\nk2 = 4\n"
        );
        assert!(add(1.0, 1.0, -1.0, -1.0).is_err());
    }

    #[test]
    fn report_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("report.json");
        let text = report(Some(out.to_str().unwrap())).unwrap();
        let on_disk = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, on_disk);
        let v: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(v["name"], "science");
        assert_eq!(v["version"], science::VERSION);
    }
}
