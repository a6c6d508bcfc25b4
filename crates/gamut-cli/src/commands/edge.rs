//! Edge-seeker table query command.

use anyhow::{ensure, Result};

use gamut_map::MethodContext;

use crate::EdgeArgs;

/// Builds the table for one gamut and prints the maximum chroma at the
/// requested lightness and hue.
pub fn run(args: EdgeArgs) -> Result<()> {
    let gamut = super::parse_gamut(&args.gamut)?;
    ensure!(args.lightness.is_finite(), "Lightness must be a finite number");
    ensure!(args.hue.is_finite(), "Hue must be a finite number");

    let table = MethodContext::new().edge_table(gamut);
    let chroma = table.max_chroma(args.lightness, args.hue);
    println!(
        "{}: max chroma at L={} h={} is {:.6}",
        gamut, args.lightness, args.hue, chroma
    );
    Ok(())
}
