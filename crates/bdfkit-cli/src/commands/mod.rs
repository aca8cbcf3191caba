//! One module per subcommand

pub mod embolden;
pub mod fill;
pub mod info;
pub mod merge;
pub mod show;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bdfkit::bdf;
use bdfkit::Font;

pub(crate) fn read_font(path: &Path) -> Result<Font> {
    bdf::read_bdf_file(path).with_context(|| format!("Failed to read font {}", path.display()))
}

/// Writes `font` to `output`, or to stdout without one
pub(crate) fn write_font(font: &Font, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => bdf::write_bdf_file(font, path)
            .with_context(|| format!("Failed to write font {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            bdf::write_bdf(font, &mut stdout).context("Failed to write font to stdout")?;
            stdout.flush().context("Failed to write font to stdout")
        }
    }
}
