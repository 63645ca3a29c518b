mod config;
mod logging;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use mbg_core::{RECIPE_SUFFIX, RecipeDocument, RecipeError, load_recipe, validate_recipe};
use mbg_generate::budget::estimate_budget;
use mbg_generate::{
    CsvOptions, GenerateOptions, GenerationEngine, GenerationError, JsonOptions, OutputFormat,
    OutputOptions, SqlOptions, WriteOptions, parse_count, serializer_for,
};

use config::{CliConfig, ConfigError, load_config, parse_delimiter};
use logging::{LoggingError, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Recipe(#[from] RecipeError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("recipe has {0} error(s)")]
    InvalidRecipe(usize),
}

#[derive(Parser, Debug)]
#[command(name = "mbg", version, about = "Schema-driven synthetic data generator")]
struct Cli {
    /// Configuration file (defaults to ./mbg.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Debug-level logging.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate records from a recipe and write them out.
    Masak(MasakArgs),
    /// Validate a recipe without generating anything.
    Gizi(GiziArgs),
    /// List available recipes.
    Menu,
    /// Print the recipe JSON Schema.
    Skema,
}

#[derive(Args, Debug)]
struct MasakArgs {
    /// Recipe file (`.resep.json`).
    #[arg(short = 'r', long = "resep", value_name = "PATH")]
    recipe: PathBuf,
    /// Number of records to generate.
    #[arg(short = 'p', long = "porsi", value_name = "COUNT")]
    count: Option<String>,
    /// Output file (defaults to `output.<format>`).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Output format: json, csv, or sql.
    #[arg(long)]
    format: Option<String>,
    /// Economy mode: skip recipe validation and record checks.
    #[arg(long = "hemat", default_value_t = false)]
    economy: bool,
    /// Dry run: generate and report without writing.
    #[arg(long = "kering", default_value_t = false)]
    dry_run: bool,
    /// Overwrite the output file if it exists.
    #[arg(long = "timpa", default_value_t = false)]
    overwrite: bool,
    /// CSV delimiter (single ASCII character, or `tab`).
    #[arg(long)]
    delimiter: Option<String>,
    /// Omit the CSV header row.
    #[arg(long, default_value_t = false)]
    no_header: bool,
    /// Single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
    /// Maximum rows per SQL INSERT statement.
    #[arg(long, value_name = "ROWS")]
    batch_size: Option<usize>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the itemized cost estimate.
    #[arg(long, default_value_t = false)]
    audit: bool,
}

#[derive(Args, Debug)]
struct GiziArgs {
    /// Recipe file (`.resep.json`).
    #[arg(short = 'r', long = "resep", value_name = "PATH")]
    recipe: PathBuf,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    init_logging(cli.verbose, config.logging.level.as_deref(), log_file.as_deref())?;

    match cli.command {
        Command::Masak(args) => run_masak(args, &config),
        Command::Gizi(args) => run_gizi(&args.recipe),
        Command::Menu => run_menu(&config),
        Command::Skema => run_skema(),
    }
}

fn run_masak(args: MasakArgs, config: &CliConfig) -> Result<(), CliError> {
    let defaults = &config.defaults;
    let format: OutputFormat = args.format.as_deref().unwrap_or(&defaults.format).parse()?;
    let raw_count = args
        .count
        .clone()
        .unwrap_or_else(|| defaults.porsi.to_string());
    let count = parse_count(&raw_count)?;
    let count = i64::try_from(count).map_err(|_| GenerationError::InvalidCount(raw_count))?;

    let delimiter = parse_delimiter(args.delimiter.as_deref().unwrap_or(&defaults.delimiter))?;
    let output_options = OutputOptions {
        json: JsonOptions {
            pretty: defaults.pretty && !args.compact,
        },
        csv: CsvOptions {
            delimiter,
            header: defaults.header && !args.no_header,
        },
        sql: SqlOptions {
            batch_size: args.batch_size.or(defaults.batch_size),
        },
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("output.{}", format.extension())));

    if args.economy {
        println!("Economy mode: validation skipped.");
    }

    let engine = GenerationEngine::new(GenerateOptions {
        economy: args.economy,
        seed: args.seed,
    });
    let result = engine.run_file(&args.recipe, count)?;

    let written = if args.dry_run {
        None
    } else {
        let serializer = serializer_for(format, &output_options);
        let outcome = serializer.write(
            &result.records,
            &result.target,
            &output,
            &WriteOptions {
                overwrite: args.overwrite,
            },
        )?;
        info!(
            batch_id = %result.batch_id,
            path = %outcome.path.display(),
            bytes = outcome.byte_size,
            format = %format,
            "batch written"
        );
        Some(outcome)
    };

    let budget = estimate_budget(result.records.len() as u64, &mut rand::rng());
    print!(
        "{}",
        report::render_run_summary(&args.recipe, &result, written.as_ref(), &budget)
    );
    if args.audit {
        println!();
        print!("{}", report::render_budget(&result.batch_id, &budget));
    }
    Ok(())
}

fn run_gizi(recipe: &Path) -> Result<(), CliError> {
    let document = load_recipe(recipe)?;
    let validation = validate_recipe(&document);
    print!("{}", report::render_validation(recipe, &validation));
    if validation.is_valid() {
        Ok(())
    } else {
        Err(CliError::InvalidRecipe(validation.errors.len()))
    }
}

fn run_menu(config: &CliConfig) -> Result<(), CliError> {
    let bundled = list_recipes(&config.defaults.recipes_dir)?;
    let local = list_recipes(Path::new("."))?;

    if bundled.is_empty() && local.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }
    if !bundled.is_empty() {
        println!("Recipes in {}:", config.defaults.recipes_dir.display());
        for name in &bundled {
            println!("  - {}", name.trim_end_matches(RECIPE_SUFFIX));
        }
    }
    if !local.is_empty() {
        println!("Local recipes:");
        for name in &local {
            println!("  - {name}");
        }
    }
    Ok(())
}

/// Recipe file names in `dir`, sorted. A missing directory has none.
fn list_recipes(dir: &Path) -> Result<Vec<String>, CliError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(RECIPE_SUFFIX) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn run_skema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(RecipeDocument);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
