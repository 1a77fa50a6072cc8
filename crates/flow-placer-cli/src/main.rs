use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use flow_placer_core::config::{Align, GrowDirection, PlacerConfig};
use flow_placer_core::{ItemSpec, Layout, LayoutItem, Size, build_from_config, place_layout};
use serde::Deserialize;
use tracing::{debug, info};

mod preview;

#[derive(Parser, Debug)]
#[command(
    name = "flow-placer",
    about = "Place widgets into wrapping rows or columns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a placement and export it (json | ascii | stats)
    Place(PlaceArgs),
    /// Shortcut for `place --format ascii`
    Preview(PlaceArgs),
    /// Time repeated placements of random items
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PlaceArgs {
    // Input/Output
    /// Item list (JSON or YAML): [{key, w, h, align?, grow?}, ...]
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML config file path (overrides placer options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Placer
    /// Grow direction: horizontal | vertical
    #[arg(long, default_value = "horizontal", help_heading = "Placer")]
    direction: String,
    /// Items per row/column before a forced wrap (0 = by available space)
    #[arg(long, default_value_t = 0, help_heading = "Placer")]
    parallel_items: u32,
    /// Pixels between items of one line
    #[arg(long, default_value_t = 0, help_heading = "Placer")]
    item_spacing: u32,
    /// Pixels between lines
    #[arg(long, default_value_t = 0, help_heading = "Placer")]
    line_spacing: u32,

    // Container
    /// Available width
    #[arg(long, default_value_t = 640, help_heading = "Container")]
    width: u32,
    /// Available height
    #[arg(long, default_value_t = 480, help_heading = "Container")]
    height: u32,

    // Export
    /// Output format
    #[arg(long, default_value = "json", value_parser = ["json", "ascii", "stats"], help_heading = "Export")]
    format: String,
    /// Pixels per character column in ascii output (rows use twice this)
    #[arg(long, default_value_t = 8, help_heading = "Export")]
    cell: u32,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random items
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// Grow direction: horizontal | vertical
    #[arg(long, default_value = "horizontal")]
    direction: String,
    /// Items per line before a forced wrap
    #[arg(long, default_value_t = 0)]
    parallel_items: u32,
    /// Available width
    #[arg(long, default_value_t = 1024)]
    width: u32,
    /// Available height
    #[arg(long, default_value_t = 1024)]
    height: u32,
    /// Placement passes to time
    #[arg(long, default_value_t = 1000)]
    iterations: u32,
    /// RNG seed for item sizes
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Place(args) => run_place(args),
        Commands::Preview(args) => {
            let mut a = args.clone();
            a.format = "ascii".into();
            run_place(&a)
        }
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_place(cli: &PlaceArgs) -> anyhow::Result<()> {
    let base = PlacerConfig {
        direction: parse_direction(&cli.direction)?,
        parallel_items: cli.parallel_items,
        item_spacing: cli.item_spacing,
        line_spacing: cli.line_spacing,
    };
    let cfg = if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        y.into_placer_config(base)?
    } else {
        base
    };
    cfg.validate()?;

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let items = load_items(&cli.input)?;
    info!(count = items.len(), direction = ?cfg.direction, "loaded items");

    let placer = build_from_config(&cfg);
    let available = Size::new(cli.width, cli.height);
    let layout = place_layout(placer.as_ref(), available, &items);
    let overflow = layout.overflow();
    if overflow != Size::ZERO {
        info!(
            overflow_w = overflow.w,
            overflow_h = overflow.h,
            "content exceeds the available size"
        );
    }

    let text = match cli.format.as_str() {
        "ascii" => preview::render_ascii(&layout, cli.cell),
        "stats" => render_stats(&layout)?,
        _ => format!(
            "{}\n",
            serde_json::to_string_pretty(&flow_placer_core::to_json(&layout))?
        ),
    };
    write_output(cli.out.as_deref(), &text)?;
    info!(
        lines = layout.lines.len(),
        width = layout.size.w,
        height = layout.size.h,
        "placement done"
    );
    Ok(())
}

fn render_stats(layout: &Layout<String>) -> anyhow::Result<String> {
    let stats = layout.stats();
    Ok(format!(
        "{}\n{}\n",
        stats.summary(),
        serde_json::to_string_pretty(&stats)?
    ))
}

fn write_output(path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            fs::write(p, text).with_context(|| format!("write {}", p.display()))?;
            info!(path = ?p, "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(b.seed);
    let items: Vec<ItemSpec> = (0..b.count)
        .map(|_| ItemSpec::new(rng.gen_range(8..=96), rng.gen_range(8..=48)))
        .collect();
    let cfg = PlacerConfig {
        direction: parse_direction(&b.direction)?,
        parallel_items: b.parallel_items,
        ..Default::default()
    };
    let placer = build_from_config(&cfg);
    let available = Size::new(b.width, b.height);
    let iterations = b.iterations.max(1);

    let start = Instant::now();
    let mut last = placer.compute_placement(available, &items);
    for _ in 1..iterations {
        last = placer.compute_placement(available, &items);
    }
    let dur = start.elapsed();
    debug!(iterations, ?dur, "bench finished");
    println!(
        "items={} lines={} size={}x{} total={} per_pass={}",
        items.len(),
        last.lines.len(),
        last.size.w,
        last.size.h,
        fmt_dur(dur),
        fmt_dur(dur / iterations)
    );
    Ok(())
}

fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us >= 1_000_000 {
        format!("{:.3}s", d.as_secs_f64())
    } else if us >= 1000 {
        format!("{:.3}ms", us as f64 / 1000.0)
    } else {
        format!("{}us", us)
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_direction(s: &str) -> anyhow::Result<GrowDirection> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown direction: {} (expected horizontal|vertical)", s))
}

fn parse_align(s: &str) -> anyhow::Result<Align> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown align: {} (expected start|center|end|stretch)", s))
}

/// One entry of the item list file.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    key: String,
    w: u32,
    h: u32,
    align: Option<String>,
    grow: Option<u32>,
}

impl ItemRecord {
    fn into_layout_item(self) -> anyhow::Result<LayoutItem<String>> {
        let mut item = LayoutItem::new(self.key, self.w, self.h);
        if let Some(a) = self.align.as_deref() {
            item = item.with_align(parse_align(a)?);
        }
        if let Some(g) = self.grow {
            item = item.with_grow(g);
        }
        Ok(item)
    }
}

fn load_items(path: &Path) -> anyhow::Result<Vec<LayoutItem<String>>> {
    let text = fs::read_to_string(path).with_context(|| format!("read items {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()),
        Some(ref e) if e == "yaml" || e == "yml"
    );
    let records: Vec<ItemRecord> = if is_yaml {
        serde_yaml::from_str(&text).with_context(|| format!("parse YAML {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parse JSON {}", path.display()))?
    };
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_layout_item().with_context(|| format!("item #{}", i)))
        .collect()
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    direction: Option<String>,
    parallel_items: Option<u32>,
    item_spacing: Option<u32>,
    line_spacing: Option<u32>,
}

impl YamlConfig {
    fn into_placer_config(self, mut base: PlacerConfig) -> anyhow::Result<PlacerConfig> {
        if let Some(d) = self.direction.as_deref() {
            base.direction = parse_direction(d)?;
        }
        if let Some(v) = self.parallel_items {
            base.parallel_items = v;
        }
        if let Some(v) = self.item_spacing {
            base.item_spacing = v;
        }
        if let Some(v) = self.line_spacing {
            base.line_spacing = v;
        }
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_overrides_only_given_fields() {
        let y: YamlConfig = serde_yaml::from_str("direction: vertical\nline_spacing: 3\n").unwrap();
        let cfg = y
            .into_placer_config(PlacerConfig {
                parallel_items: 2,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(cfg.direction, GrowDirection::Vertical);
        assert_eq!(cfg.parallel_items, 2);
        assert_eq!(cfg.line_spacing, 3);
    }

    #[test]
    fn item_records_parse_align() {
        let r: ItemRecord =
            serde_json::from_str(r#"{"key":"ok","w":80,"h":24,"align":"center","grow":1}"#).unwrap();
        let item = r.into_layout_item().unwrap();
        assert_eq!(item.spec.align, Align::Center);
        assert_eq!(item.spec.grow, 1);

        let bad: ItemRecord = serde_json::from_str(r#"{"key":"x","w":1,"h":1,"align":"diag"}"#).unwrap();
        assert!(bad.into_layout_item().is_err());
    }

    #[test]
    fn demo_dialog_loads_and_places() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/dialog.yaml"));
        let items = load_items(path).unwrap();
        assert_eq!(items.len(), 16);
        assert_eq!(items[2].spec.grow, 1);
        let placer = build_from_config(&PlacerConfig::default());
        let layout = place_layout(placer.as_ref(), Size::new(320, 240), &items);
        assert_eq!(layout.items.len(), 16);
        assert!(layout.size.w <= 320);
    }

    #[test]
    fn fmt_dur_units() {
        assert_eq!(fmt_dur(Duration::from_micros(12)), "12us");
        assert_eq!(fmt_dur(Duration::from_micros(1500)), "1.500ms");
    }
}
