//! Embolden command implementation

use anyhow::Result;
use bdfkit::prelude::embolden;

use super::{read_font, write_font};
use crate::cli::EmboldenArgs;

pub fn run(args: &EmboldenArgs) -> Result<()> {
    let font = read_font(&args.font)?;
    let bold = embolden(&font, !args.no_maintain_spacing);
    write_font(&bold, args.output.output.as_deref())
}
