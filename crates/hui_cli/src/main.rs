//! hui CLI
//!
//! - `hui check <theme.toml>`: load and validate a theme file
//! - `hui export`: print the stylesheet of every built-in component
//! - `hui palette <base> <surface>`: show the readable palette for a pair
//! - `hui theme`: print a preset as TOML, or write it to a file

mod export;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hui_core::Color;
use hui_theme::{ReadablePalette, Theme, ThemePreset, MIN_READABLE_CONTRAST};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hui")]
#[command(about = "Themes and stylesheets for the hui component library")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a theme file
    Check {
        /// Theme file (TOML)
        path: PathBuf,
    },

    /// Print the CSS of every built-in component
    Export {
        /// Theme file to use instead of a preset
        #[arg(long, conflicts_with = "preset")]
        theme: Option<PathBuf>,

        /// Built-in theme (light, dark)
        #[arg(long, default_value = "light")]
        preset: ThemePreset,

        /// Base color override, e.g. "#2962ff"
        #[arg(long)]
        color: Option<Color>,

        /// Surface override
        #[arg(long)]
        surface: Option<Color>,
    },

    /// Show the readable palette of a base color on a surface
    Palette { base: Color, surface: Color },

    /// Print a preset as TOML
    Theme {
        #[arg(long, default_value = "light")]
        preset: ThemePreset,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { path } => cmd_check(&path),
        Command::Export {
            theme,
            preset,
            color,
            surface,
        } => {
            let theme = match theme {
                Some(path) => load_theme(&path)?,
                None => preset.theme(),
            };
            let css = export::stylesheet(theme, color, surface)?;
            print!("{css}");
            Ok(())
        }
        Command::Palette { base, surface } => {
            cmd_palette(base, surface);
            Ok(())
        }
        Command::Theme { preset, out } => cmd_theme(preset, out),
    }
}

fn load_theme(path: &Path) -> Result<Theme> {
    Theme::load(path).with_context(|| format!("Failed to load theme {}", path.display()))
}

fn cmd_check(path: &Path) -> Result<()> {
    let theme = load_theme(path)?;
    info!(name = %theme.name, "theme loaded");
    println!("{}: ok (theme \"{}\")", path.display(), theme.name);
    Ok(())
}

fn cmd_palette(base: Color, surface: Color) {
    let palette = ReadablePalette::derive(base, surface);
    let contrast = palette.contrast_on(surface);
    println!("decorative  {}", palette.decorative);
    println!("readable    {}", palette.readable);
    println!(
        "contrast    {contrast:.2}:1 ({})",
        if contrast >= MIN_READABLE_CONTRAST {
            "pass"
        } else {
            "below minimum"
        }
    );
}

fn cmd_theme(preset: ThemePreset, out: Option<PathBuf>) -> Result<()> {
    let theme = preset.theme();
    match out {
        Some(path) => {
            theme
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("wrote {} theme to {}", preset.id(), path.display());
        }
        None => print!("{}", theme.to_toml().context("Failed to serialize theme")?),
    }
    Ok(())
}
