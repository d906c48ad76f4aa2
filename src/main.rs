//! # pathtwick CLI
//!
//! Usage:
//!   pathtwick drawings/                      # writes drawings/export_svg.csv
//!   pathtwick drawings/ -o paths.json --format json
//!   pathtwick --path "M 10,10 L 20,10 z" --offset 5,5

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use pathtwick::{normalize, Point, ReportFormat, ScanConfig};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Rewrites SVG path data into relative form and reports bounding boxes")]
struct Args {
    /// Directory holding the SVG drawings
    #[arg(default_value = ".")]
    dir: PathBuf,
    /// Report file (defaults to export_svg.csv or export_svg.json inside DIR)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum, default_value_t)]
    format: Format,
    /// Normalize a single path string and print the result instead of scanning
    #[arg(long, value_name = "D")]
    path: Option<String>,
    /// Initial translate for --path, as `x,y`
    #[arg(long, value_name = "X,Y", value_parser = parse_offset, allow_hyphen_values = true, requires = "path")]
    offset: Option<Point>,
}

#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum Format {
    /// Semicolon-separated table
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => ReportFormat::Csv,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn parse_offset(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, found `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    use clap::Parser as _;
    let args = Args::parse();

    if let Some(d) = args.path {
        return match normalize(&d, args.offset.unwrap_or_default()) {
            Ok(parsed) => {
                println!("{}", parsed.normalized);
                println!(
                    "origin {} label {} box {} size {}x{}",
                    parsed.origin, parsed.midpoint, parsed.bounds.min, parsed.width, parsed.height
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let format = ReportFormat::from(args.format);
    let output = args
        .output
        .unwrap_or_else(|| args.dir.join(format.file_name()));
    let config = ScanConfig::new(args.dir);

    match pathtwick::export(&config, &output, format) {
        Ok(rows) => {
            info!("wrote {rows} row(s) to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
