//! trigrid CLI - design glyphs on a triangular grid
//!
//! This binary provides commands for creating, editing, validating and
//! rendering triangular-grid fonts.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use trigrid_cli::commands;
use trigrid_cli::commands::edit::EditOps;
use trigrid_cli::commands::render::RenderOptions;
use trigrid_cli::commands::stylize::StylizeArgs;
use trigrid_cli::config::AppConfig;

/// trigrid - Triangular Grid Glyph Designer
#[derive(Parser)]
#[command(name = "trigrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: <config dir>/trigrid/config.json if present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty font document
    New {
        /// Path of the font document to create
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Edit one glyph of a font document
    Edit {
        /// Path to the font document
        font: String,

        /// Character to edit
        #[arg(short, long)]
        glyph: char,

        /// Clear every cell first
        #[arg(long)]
        clear: bool,

        /// Activate every cell
        #[arg(long)]
        fill: bool,

        /// Activate cells ("row-col", repeatable)
        #[arg(long, value_name = "CELL")]
        paint: Vec<String>,

        /// Deactivate cells
        #[arg(long, value_name = "CELL")]
        erase: Vec<String>,

        /// Flip cells
        #[arg(long, value_name = "CELL")]
        toggle: Vec<String>,

        /// Drag stroke over cells, in order; paints or erases by the first cell
        #[arg(long, value_name = "CELL", num_args = 1..)]
        stroke: Vec<String>,

        /// Shift the glyph by rows (row + col shift must be even)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        shift_rows: i64,

        /// Shift the glyph by columns
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        shift_cols: i64,

        /// Output file path (default: overwrite input file)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a font document without importing it
    Validate {
        /// Path to the font document
        font: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Import glyphs from other documents into a font
    Merge {
        /// Font document to merge into
        base: String,

        /// Documents to import, in order
        #[arg(required = true)]
        overlays: Vec<String>,

        /// Output file path (default: overwrite base)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show glyph statistics
    Inspect {
        /// Path to the font document
        font: String,

        /// Only show this character
        #[arg(short, long)]
        glyph: Option<char>,

        /// Also list undefined characters
        #[arg(long)]
        all: bool,

        /// Report full-canvas viewports instead of cropped ones
        #[arg(long)]
        no_crop: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render one glyph to SVG or PNG
    Render {
        /// Path to the font document
        font: String,

        /// Character to render
        #[arg(short, long)]
        glyph: char,

        /// Output path (.svg or .png)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        style: RenderArgs,
    },

    /// Render a text sample (type tester)
    Tester {
        /// Path to the font document
        font: String,

        /// Sample text ("\n" starts a new line)
        #[arg(short, long)]
        text: String,

        /// Output path (.svg or .png)
        #[arg(short, long)]
        output: String,

        /// Repeat the text this many times, one repetition per line
        #[arg(long)]
        repeat: Option<u32>,

        #[command(flatten)]
        style: RenderArgs,
    },

    /// Apply a material to a text sample via the styling service
    Stylize {
        /// Path to the font document
        font: String,

        /// Sample text
        #[arg(short, long)]
        text: String,

        /// Output image path
        #[arg(short, long)]
        output: String,

        /// Material preset (chrome, gold, wood, marble, neon, glass, stone, ice)
        #[arg(short, long)]
        material: Option<String>,

        /// Free-form prompt
        #[arg(short, long)]
        prompt: Option<String>,

        /// Mask pixels per canvas unit
        #[arg(long, default_value_t = 2.0)]
        scale: f64,

        /// Also write the mask sent to the service
        #[arg(long)]
        mask_out: Option<String>,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Output pixels per canvas unit
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Use the full canvas instead of cropping to the active cells
    #[arg(long)]
    no_crop: bool,

    /// Outline inactive cells (SVG only)
    #[arg(long)]
    show_grid: bool,

    /// Fill color (#rgb, #rrggbb, #rrggbbaa)
    #[arg(long)]
    fill: Option<String>,

    /// Background color (default: transparent)
    #[arg(long)]
    background: Option<String>,
}

impl RenderArgs {
    fn into_options(self) -> RenderOptions {
        RenderOptions {
            scale: self.scale,
            auto_crop: self.no_crop.then_some(false),
            show_grid: self.show_grid,
            fill: self.fill,
            background: self.background,
        }
    }
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the per-user config file path
    Path,
    /// Write a default configuration file
    Init {
        /// Output path (default: per-user config path)
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // `config path` and `config init` must work even with a broken config file
    match &cli.command {
        Commands::Config {
            command: ConfigCommands::Path,
        } => return commands::config::path(),
        Commands::Config {
            command: ConfigCommands::Init { output, force },
        } => return commands::config::init(output.as_deref(), *force),
        _ => {}
    }

    let (config, source) = AppConfig::load(cli.config.as_deref())?;
    let grid = &config.grid;

    match cli.command {
        Commands::New { output, force } => commands::new::run(&output, force, grid),
        Commands::Edit {
            font,
            glyph,
            clear,
            fill,
            paint,
            erase,
            toggle,
            stroke,
            shift_rows,
            shift_cols,
            output,
        } => {
            let ops = EditOps {
                clear,
                fill,
                paint,
                erase,
                toggle,
                stroke,
                shift: (shift_rows, shift_cols),
            };
            if ops.is_empty() {
                anyhow::bail!("no edit operation given");
            }
            commands::edit::run(&font, glyph, &ops, output.as_deref(), grid)
        }
        Commands::Validate { font, json } => commands::validate::run(&font, grid, json),
        Commands::Merge {
            base,
            overlays,
            output,
        } => commands::merge::run(&base, &overlays, output.as_deref(), grid),
        Commands::Inspect {
            font,
            glyph,
            all,
            no_crop,
            json,
        } => commands::inspect::run(&font, glyph, all, !no_crop && config.layout.auto_crop, grid, json),
        Commands::Render {
            font,
            glyph,
            output,
            style,
        } => commands::render::run(
            &font,
            glyph,
            &output,
            &style.into_options(),
            grid,
            config.layout.auto_crop,
        ),
        Commands::Tester {
            font,
            text,
            output,
            repeat,
            style,
        } => commands::tester::run(
            &font,
            &text,
            &output,
            repeat,
            &style.into_options(),
            grid,
            &config.layout,
        ),
        Commands::Stylize {
            font,
            text,
            output,
            material,
            prompt,
            scale,
            mask_out,
        } => {
            let args = StylizeArgs {
                font,
                text,
                output,
                material,
                prompt,
                scale,
                mask_out,
            };
            commands::stylize::run(&args, grid, &config.layout, &config.style)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show(&config, &source),
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init { output, force } => commands::config::init(output.as_deref(), force),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
