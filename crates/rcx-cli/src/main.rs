//! rcx - sprite team-color recoloring CLI
//!
//! Recolors sprites drawn with a key palette, either across color ranges or
//! by swapping one palette for another.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rcx_core::Color;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rcx")]
#[command(author, version, about = "Sprite team-color recoloring tool")]
#[command(long_about = "
Recolors sprites whose team-color areas are painted with a key palette.

Examples:
  rcx ranges                               # List color ranges
  rcx recolor knight.png -o out            # One output per color range
  rcx recolor 'units/*.png' -o out --range blue --range gold
  rcx swap knight.png -o out --to flag_green
  rcx preview knight.png -o blue.png --range blue
  rcx range add ocean --mid 2E419B --max FFFFFF --min 0F0F0F --rep 0000FF
  rcx palette add mine --colors '#FF00FF, #AA00AA'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// User definitions file (default: <config dir>/rcx/definitions.yaml)
    #[arg(long, global = true, env = "RCX_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List color ranges
    #[command(visible_alias = "lr")]
    Ranges,

    /// List palettes
    #[command(visible_alias = "lp")]
    Palettes,

    /// Export one recolored copy per color range
    #[command(visible_alias = "rc")]
    Recolor(RecolorArgs),

    /// Export a palette swap
    Swap(SwapArgs),

    /// Apply a single transform to one image
    Preview(PreviewArgs),

    /// Add or remove user color ranges
    #[command(subcommand)]
    Range(RangeCommand),

    /// Add or remove user palettes
    #[command(subcommand)]
    Palette(PaletteCommand),
}

#[derive(Args)]
struct RecolorArgs {
    /// Input image or glob pattern
    input: String,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Key palette the sprite is drawn with (luminance keyed on black/red/white)
    #[arg(short, long, default_value = rcx_core::builtin::DEFAULT_KEY_PALETTE_ID)]
    palette: String,

    /// Color range to export (repeatable, default: all)
    #[arg(short, long = "range")]
    ranges: Vec<String>,

    /// Output file extension
    #[arg(long, default_value = "png")]
    ext: String,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,
}

#[derive(Args)]
struct SwapArgs {
    /// Input image or glob pattern
    input: String,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Palette the sprite is drawn with
    #[arg(long, default_value = rcx_core::builtin::DEFAULT_SWAP_SOURCE_ID)]
    from: String,

    /// Palette to swap in
    #[arg(long)]
    to: String,

    /// Output file extension
    #[arg(long, default_value = "png")]
    ext: String,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["range", "to"])))]
struct PreviewArgs {
    /// Input image
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Target color range
    #[arg(long)]
    range: Option<String>,

    /// Target palette (palette swap)
    #[arg(long)]
    to: Option<String>,

    /// Key palette the sprite is drawn with (luminance keyed on black/red/white)
    #[arg(short, long, default_value = rcx_core::builtin::DEFAULT_KEY_PALETTE_ID)]
    palette: String,

    /// Overwrite an existing output file
    #[arg(short, long)]
    force: bool,
}

#[derive(Subcommand)]
enum RangeCommand {
    /// Define a range (replaces a user range with the same id)
    Add(RangeAddArgs),
    /// Delete a user range
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),
}

#[derive(Subcommand)]
enum PaletteCommand {
    /// Define a palette (replaces a user palette with the same id)
    Add(PaletteAddArgs),
    /// Delete a user palette
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),
}

#[derive(Args)]
struct RangeAddArgs {
    /// Range id
    id: String,

    /// Display name (default: capitalized id)
    #[arg(long)]
    name: Option<String>,

    /// Base color
    #[arg(long, value_parser = parse_color)]
    mid: Color,

    /// Highlight color
    #[arg(long, value_parser = parse_color)]
    max: Color,

    /// Shadow color
    #[arg(long, value_parser = parse_color)]
    min: Color,

    /// Swatch color (default: mid)
    #[arg(long, value_parser = parse_color)]
    rep: Option<Color>,
}

#[derive(Args)]
struct PaletteAddArgs {
    /// Palette id
    id: String,

    /// Display name (default: capitalized id)
    #[arg(long)]
    name: Option<String>,

    /// Comma-separated hex colors, e.g. "#FF00FF, AA00AA"
    #[arg(long)]
    colors: String,
}

#[derive(Args)]
struct RemoveArgs {
    /// Id to remove
    id: String,
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    Color::from_hex(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Ranges => commands::list::run_ranges(config),
        Commands::Palettes => commands::list::run_palettes(config, cli.verbose),
        Commands::Recolor(args) => commands::recolor::run(args, config),
        Commands::Swap(args) => commands::swap::run(args, config),
        Commands::Preview(args) => commands::preview::run(args, config),
        Commands::Range(RangeCommand::Add(args)) => commands::define::run_range_add(args, config),
        Commands::Range(RangeCommand::Remove(args)) => {
            commands::define::run_range_remove(args, config)
        }
        Commands::Palette(PaletteCommand::Add(args)) => {
            commands::define::run_palette_add(args, config)
        }
        Commands::Palette(PaletteCommand::Remove(args)) => {
            commands::define::run_palette_remove(args, config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recolor() {
        let cli = Cli::try_parse_from([
            "rcx", "-vv", "recolor", "a.png", "-o", "out", "--range", "blue", "-r", "gold",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Recolor(args) = cli.command else {
            panic!("expected recolor");
        };
        assert_eq!(args.ranges, ["blue", "gold"]);
        assert_eq!(args.palette, "red");
        assert!(!args.force);
    }

    #[test]
    fn test_parse_swap_defaults() {
        let cli = Cli::try_parse_from([
            "rcx", "swap", "a.png", "-o", "out", "--to", "flag_green", "--ext", "PNG",
        ])
        .unwrap();
        let Commands::Swap(args) = cli.command else {
            panic!("expected swap");
        };
        assert_eq!(args.from, "magenta");
        assert_eq!(args.ext, "PNG");
    }

    #[test]
    fn test_preview_needs_target() {
        assert!(Cli::try_parse_from(["rcx", "preview", "a.png", "-o", "b.png"]).is_err());
        assert!(
            Cli::try_parse_from(["rcx", "preview", "a.png", "-o", "b.png", "--range", "x", "--to", "y"])
                .is_err()
        );
    }

    #[test]
    fn test_range_add_parses_colors() {
        let cli = Cli::try_parse_from([
            "rcx", "range", "add", "ocean", "--mid", "#2E419B", "--max", "FFF", "--min", "0F0F0F",
        ])
        .unwrap();
        let Commands::Range(RangeCommand::Add(args)) = cli.command else {
            panic!("expected range add");
        };
        assert_eq!(args.mid, Color::from_u32(0x2E419B));
        assert_eq!(args.max, Color::WHITE);
        assert_eq!(args.rep, None);

        assert!(Cli::try_parse_from([
            "rcx", "range", "add", "x", "--mid", "nope", "--max", "FFF", "--min", "000",
        ])
        .is_err());
    }
}
