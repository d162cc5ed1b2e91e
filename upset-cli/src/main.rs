use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::{error, info};
use upset_data::{
    connector_spans, melt, Intersections, MembershipTable, SetLookup, SortBy, SortOrder,
};
use upset_vega::{UpSetChart, UpSetOptions};

/// UpSet plots from CSV membership tables
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the Vega-Lite specification (or an HTML page) of an UpSet plot
    Render {
        /// CSV file with one row per element and one 0/1 column per set
        csv: PathBuf,

        /// Set columns to plot, every column of the file when omitted
        #[arg(long, value_delimiter = ',')]
        sets: Vec<String>,

        /// Display labels, one per set
        #[arg(long, value_delimiter = ',')]
        abbre: Vec<String>,

        #[arg(long, default_value = "frequency", value_parser = SortBy::parse)]
        sort_by: SortBy,

        #[arg(long, default_value = "ascending", value_parser = SortOrder::parse)]
        sort_order: SortOrder,

        #[arg(long, default_value_t = 1200.0)]
        width: f64,

        #[arg(long, default_value_t = 700.0)]
        height: f64,

        #[arg(long, default_value_t = 0.6)]
        height_ratio: f64,

        #[arg(long)]
        title: Option<String>,

        /// Subtitle line, repeat for several lines
        #[arg(long)]
        subtitle: Vec<String>,

        /// One CSS color per set
        #[arg(long, value_delimiter = ',')]
        colors: Vec<String>,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format, inferred from the output extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the intersections of a CSV membership table
    Summary {
        csv: PathBuf,

        #[arg(long, value_delimiter = ',')]
        sets: Vec<String>,

        #[arg(long, default_value = "frequency", value_parser = SortBy::parse)]
        sort_by: SortBy,

        #[arg(long, default_value = "ascending", value_parser = SortOrder::parse)]
        sort_order: SortOrder,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Html,
}

impl OutputFormat {
    fn resolve(format: Option<OutputFormat>, output: Option<&Path>) -> Self {
        match (format, output.and_then(|path| path.extension())) {
            (Some(format), _) => format,
            (None, Some(ext)) if ext.eq_ignore_ascii_case("html") => OutputFormat::Html,
            _ => OutputFormat::Json,
        }
    }
}

fn load_table(csv: &Path) -> anyhow::Result<MembershipTable> {
    let table = MembershipTable::from_csv_path(csv)
        .with_context(|| format!("Failed to read membership table from {}", csv.display()))?;
    info!("Loaded {} rows from {}", table.num_rows(), csv.display());
    Ok(table)
}

fn resolve_sets(table: &MembershipTable, sets: Vec<String>) -> Vec<String> {
    if sets.is_empty() {
        table.column_names()
    } else {
        sets
    }
}

/// One tab-separated line per intersection: id, count, degree, member sets
/// and the first and last set order the connecting line spans
fn summary_lines(intersections: &Intersections) -> Vec<String> {
    let lookup = SetLookup::new(intersections.sets(), None);
    let spans = connector_spans(&melt(intersections), &lookup);

    intersections
        .combinations()
        .iter()
        .map(|combination| {
            let members = intersections.member_sets(combination).join("&");
            let span = spans
                .get(&combination.id)
                .map(|(lo, hi)| format!("{lo}-{hi}"))
                .unwrap_or_default();
            [
                combination.id.to_string(),
                combination.count.to_string(),
                combination.degree.to_string(),
                members,
                span,
            ]
            .iter()
            .join("\t")
        })
        .collect()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Render {
            csv,
            sets,
            abbre,
            sort_by,
            sort_order,
            width,
            height,
            height_ratio,
            title,
            subtitle,
            colors,
            output,
            format,
        } => {
            let table = load_table(&csv)?;
            let sets = resolve_sets(&table, sets);

            let mut options = UpSetOptions::new()
                .sort_by(sort_by)
                .sort_order(sort_order)
                .size(width, height)
                .height_ratio(height_ratio);
            if !abbre.is_empty() {
                options = options.abbreviations(abbre);
            }
            if !colors.is_empty() {
                options = options.color_range(colors);
            }
            if let Some(title) = title {
                options = options.title(title);
            }
            if !subtitle.is_empty() {
                options = options.subtitle(subtitle);
            }

            let chart = UpSetChart::build(&table, &sets, options)
                .context("Failed to build UpSet chart")?;
            info!(
                "Built UpSet chart with {} intersections over {} sets",
                chart.intersections().len(),
                sets.len()
            );

            let content = match OutputFormat::resolve(format, output.as_deref()) {
                OutputFormat::Json => chart.to_json_pretty()?,
                OutputFormat::Html => chart.to_html()?,
            };

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() && !parent.exists() {
                            fs::create_dir_all(parent).with_context(|| {
                                format!("Failed to create output directory {}", parent.display())
                            })?;
                        }
                    }
                    fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Saved UpSet chart to {}", path.display());
                }
                None => println!("{content}"),
            }
        }
        Commands::Summary {
            csv,
            sets,
            sort_by,
            sort_order,
        } => {
            let table = load_table(&csv)?;
            let sets = resolve_sets(&table, sets);
            if sets.is_empty() {
                bail!("{} has no set columns", csv.display());
            }

            let intersections = Intersections::compute(&table, &sets, sort_by, sort_order)?;
            println!("id\tcount\tdegree\tsets\tspan");
            for line in summary_lines(&intersections) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    run(cli).inspect_err(|err| error!("{err:#}"))
}
