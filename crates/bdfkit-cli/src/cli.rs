//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use bdfkit::Codepoint;
use clap::{Args, Parser, Subcommand};

/// bdfkit - build composite glyphs for BDF bitmap fonts
#[derive(Parser, Debug)]
#[command(name = "bdfkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add every glyph that can be built from glyphs the font already has
    Fill(FillArgs),

    /// Thicken every glyph by one pixel
    Embolden(EmboldenArgs),

    /// Combine two fonts, preferring the glyphs of the second
    Merge(MergeArgs),

    /// Display information about a font
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Draw one glyph as text
    Show(ShowArgs),
}

/// Where a command writes its font
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output BDF file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FillArgs {
    /// BDF font to fill
    pub font: PathBuf,

    /// UnicodeData.txt from the Unicode Character Database
    #[arg(short = 'u', long, env = "BDFKIT_UNICODE_DATA")]
    pub unicode_data: PathBuf,

    /// Cap height for placing accents (defaults to the CAP_HEIGHT property)
    #[arg(long)]
    pub cap_height: Option<i32>,

    /// Print what was built and why the rest failed to stderr
    #[arg(long)]
    pub report: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct EmboldenArgs {
    /// BDF font to embolden
    pub font: PathBuf,

    /// Keep advance widths as they are
    #[arg(long)]
    pub no_maintain_spacing: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Font supplying glyphs the custom font lacks
    pub base: PathBuf,

    /// Font whose glyphs win
    pub custom: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// BDF font to describe
    pub font: PathBuf,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// BDF font to read
    pub font: PathBuf,

    /// Code point: U+00E1, 0xE1, 225 or the character itself
    #[arg(value_parser = parse_codepoint)]
    pub codepoint: Codepoint,
}

/// Parses a code point in any of the usual spellings
///
/// All-digit input is decimal, so the digit characters themselves need the
/// `U+` form.
pub fn parse_codepoint(s: &str) -> Result<Codepoint, String> {
    let hex = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("u+"))
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"));
    if let Some(hex) = hex {
        return Codepoint::from_str_radix(hex, 16)
            .map_err(|_| format!("invalid hex code point {s:?}"));
    }
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        return s.parse().map_err(|_| format!("code point {s} is too large"));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Codepoint::from(c)),
        _ => Err(format!(
            "expected a code point or a single character, got {s:?}"
        )),
    }
}
