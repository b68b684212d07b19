use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use decoder::{decode_file, ColorOrder, Palette};
use dsb_tools::{decode_json, format_decode_pretty, inspect_bytes, trace_lines, InspectReport};
use glob::Pattern;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dsb-tools",
    version,
    about = "DSB stitch file inspection and decoding tools"
)]
struct Cli {
    /// Log decoder activity to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize header metadata and decode statistics.
    Inspect {
        /// Stitch file, or a directory of stitch files.
        path: PathBuf,
        /// Palette indices walked by color changes, comma separated.
        #[arg(long, default_value = "2,3,4,5,6,7,8,9,10,11,2,3,4")]
        order: ColorOrder,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode a stitch file into polylines and playback actions.
    Decode {
        /// Path to the stitch file.
        file: PathBuf,
        /// Palette indices walked by color changes, comma separated.
        #[arg(long, default_value = "2,3,4,5,6,7,8,9,10,11,2,3,4")]
        order: ColorOrder,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Negate Y for screen coordinates.
        #[arg(long)]
        flip_y: bool,
    },
    /// Print every record with its signed deltas and needle position.
    Trace {
        /// Path to the stitch file.
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let palette = Palette::default();

    match cli.command {
        Command::Inspect {
            path,
            order,
            glob,
            sort,
            limit,
        } => {
            order.validate(&palette).context("invalid color order")?;
            if path.is_dir() {
                let entries = collect_entries(&path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                debug!(count = entries.len(), dir = %path.display(), "inspecting directory");
                for entry in entries {
                    let report = inspect_file(&entry.path, &order)?;
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    print_inspect_report(&report, &palette);
                }
            } else {
                let report = inspect_file(&path, &order)?;
                print_inspect_report(&report, &palette);
            }
        }
        Command::Decode {
            file,
            order,
            format,
            flip_y,
        } => {
            order.validate(&palette).context("invalid color order")?;
            let (_, decoded) = decode_file(&file, &order)
                .with_context(|| format!("decode {}", file.display()))?;
            let output = decode_json(&decoded, &palette, flip_y);
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&output));
                }
            }
        }
        Command::Trace { file } => {
            let bytes =
                fs::read(&file).with_context(|| format!("read stitch file {}", file.display()))?;
            let lines = trace_lines(&bytes, &ColorOrder::default())
                .with_context(|| format!("trace {}", file.display()))?;
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

// Logs go to stderr so JSON on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn inspect_file(path: &Path, order: &ColorOrder) -> Result<InspectReport> {
    let bytes = fs::read(path).with_context(|| format!("read stitch file {}", path.display()))?;
    inspect_bytes(&bytes, order).with_context(|| format!("inspect {}", path.display()))
}

struct FileEntry {
    path: PathBuf,
    size: u64,
}

fn collect_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(FileEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn maybe_sort_entries(mut entries: Vec<FileEntry>, sort: Option<InspectSort>) -> Vec<FileEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_inspect_report(report: &InspectReport, palette: &Palette) {
    match &report.header {
        Some(header) => {
            let label = header.label.as_deref().unwrap_or("(none)");
            println!("label: {label}");
            let field = |value: Option<u32>| {
                value.map_or_else(|| "n/a".to_string(), |value| value.to_string())
            };
            println!(
                "header: stitches {} color changes {} extents +x {} -x {} +y {} -y {}",
                field(header.stitch_count),
                field(header.color_changes),
                field(header.max_x),
                field(header.min_x),
                field(header.max_y),
                field(header.min_y),
            );
        }
        None => println!("header: missing (file shorter than header)"),
    }
    let stats = &report.stats;
    println!(
        "records: {} stitches: {} jumps: {} color changes: {}",
        stats.records, stats.stitches, stats.jumps, stats.color_changes
    );
    if stats.trailing_bytes > 0 {
        println!("trailing bytes: {}", stats.trailing_bytes);
    }
    if let Some(bounds) = stats.bounds {
        println!(
            "bounds: x {}..{} y {}..{}",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
        );
    }
    println!(
        "polylines: {} actions: {}",
        report.polylines, report.actions
    );
    let colors: Vec<&str> = report
        .colors_used
        .iter()
        .map(|id| palette.name(*id).unwrap_or("?"))
        .collect();
    if !colors.is_empty() {
        println!("colors: {}", colors.join(", "));
    }
}
