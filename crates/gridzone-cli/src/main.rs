// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gridzone CLI - Classify building elements into structural grid zones
//!
//! Provides subcommands for:
//! - `locate`: Print the zone of every element in an input document
//! - `zones`: List the zones derived from one building's grid

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gridzone_geometry::{ZoneLocator, ZoneSet};
use gridzone_model::{DocumentParser, InputDocument, LocatorConfig, ZoneKind};
use gridzone_parser::JsonDocumentParser;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridzone")]
#[command(about = "Locate building elements on a structural grid", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every element of a document
    Locate(LocateArgs),
    /// List the zones of one building
    Zones(ZonesArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON file with locator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Zone size cap in unit distances
    #[arg(long)]
    max_size: Option<f64>,

    /// Search every building instead of stopping after the first
    #[arg(long)]
    all_buildings: bool,
}

#[derive(Args, Debug)]
struct LocateArgs {
    /// Input document (`-` reads stdin)
    input: PathBuf,

    #[command(flatten)]
    settings: ConfigArgs,

    /// Skip elements that have neither `size` nor `boundary`
    #[arg(long)]
    skip_incomplete: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ZonesArgs {
    /// Input document (`-` reads stdin)
    input: PathBuf,

    /// Building to inspect
    #[arg(short, long)]
    building: String,

    /// Only list zones of this kind
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,

    #[command(flatten)]
    settings: ConfigArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Point,
    Line,
    Area,
}

impl From<KindArg> for ZoneKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Point => ZoneKind::Point,
            KindArg::Line => ZoneKind::Line,
            KindArg::Area => ZoneKind::Area,
        }
    }
}

#[derive(Serialize)]
struct ZoneRow {
    label: String,
    kind: ZoneKind,
    vertices: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Locate(args) => run_locate(args),
        Commands::Zones(args) => run_zones(args),
    }
}

fn run_locate(args: LocateArgs) -> Result<()> {
    let config = resolve_config(&args.settings)?;
    let parser = JsonDocumentParser::new().with_skip_incomplete(args.skip_incomplete);
    let document = load_document(&parser, &args.input)?;

    let assignments = ZoneLocator::new(config)
        .locate(&document)
        .context("Failed to locate elements")?;

    let output = serde_json::json!({ "elements": assignments });
    let text = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{text}");
    Ok(())
}

fn run_zones(args: ZonesArgs) -> Result<()> {
    let config = resolve_config(&args.settings)?;
    let document = load_document(&JsonDocumentParser::new(), &args.input)?;

    let Some(zones) = ZoneLocator::new(config)
        .zones_for(&document, &args.building)
        .context("Failed to build zones")?
    else {
        bail!("Building {:?} not found in {:?}", args.building, args.input);
    };

    let rows = zone_rows(&zones, args.kind.map(ZoneKind::from));
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn zone_rows(zones: &ZoneSet, kind: Option<ZoneKind>) -> Vec<ZoneRow> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => vec![ZoneKind::Point, ZoneKind::Line, ZoneKind::Area],
    };
    kinds
        .into_iter()
        .flat_map(|kind| zones.of_kind(kind).iter())
        .map(|zone| ZoneRow {
            label: zone.label.to_string(),
            kind: zone.label.kind,
            vertices: zone
                .geometry
                .vertices()
                .iter()
                .map(|c| [c.x, c.y])
                .collect(),
        })
        .collect()
}

/// Merge the optional config file with command-line overrides
fn resolve_config(settings: &ConfigArgs) -> Result<LocatorConfig> {
    let mut config = match &settings.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config {:?}", path))?
        }
        None => LocatorConfig::default(),
    };

    if let Some(max_size) = settings.max_size {
        config = config.with_max_size(max_size);
    }
    if settings.all_buildings {
        config = config.with_all_buildings(true);
    }
    config.validate().context("Invalid locator configuration")?;
    Ok(config)
}

fn load_document(parser: &dyn DocumentParser, path: &Path) -> Result<InputDocument> {
    if path == Path::new("-") {
        return parser
            .parse_reader(&mut std::io::stdin().lock())
            .context("Failed to read document from stdin");
    }

    log::debug!("Loading document from {:?}", path);
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open document {:?}", path))?;
    parser
        .parse_reader(&mut file)
        .with_context(|| format!("Failed to load document {:?}", path))
}
