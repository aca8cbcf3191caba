//! Fill command implementation

use anyhow::{Context, Result};
use bdfkit::prelude::*;

use super::{read_font, write_font};
use crate::cli::FillArgs;

pub fn run(args: &FillArgs) -> Result<()> {
    let mut font = read_font(&args.font)?;
    if let Some(cap_height) = args.cap_height {
        font.set_property("CAP_HEIGHT", cap_height);
    }

    let db = UnicodeData::from_path(&args.unicode_data).with_context(|| {
        format!(
            "Failed to load Unicode data from {}",
            args.unicode_data.display()
        )
    })?;
    let table = build_decomposition_table(&db);

    let report = Synthesizer::new(&table)
        .fill(&mut font)
        .context("Failed to add synthesized glyphs")?;
    log::info!(
        "Added {} glyphs to {}",
        report.built_count(),
        args.font.display()
    );

    write_font(&font, args.output.output.as_deref())?;

    if args.report {
        eprint!("{report}");
    }
    Ok(())
}
