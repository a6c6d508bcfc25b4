//! Single color mapping command.

use anyhow::{Context, Result};
use tracing::debug;

use gamut_color::{Color, Space, DEFAULT_GAMUT_EPSILON};
use gamut_map::Registry;

use crate::MapArgs;

/// Maps one color and prints the result in the display gamut.
pub fn run(args: MapArgs) -> Result<()> {
    let space: Space = args.space.parse().context("Invalid --space")?;
    let display_gamut = super::parse_gamut(&args.display)?;
    let coords: [f64; 3] = args
        .coords
        .as_slice()
        .try_into()
        .context("Expected exactly three coordinates")?;
    let color = Color::try_new(space, coords)?;

    let registry = Registry::new(display_gamut);
    let entry = registry.get(&args.method)?;
    debug!(method = entry.key, color = %color, display = %display_gamut, "mapping");
    let mapped = registry.compute(entry, &color);

    let in_gamut = color.in_gamut(display_gamut, DEFAULT_GAMUT_EPSILON);
    let oklch = mapped.to(Space::Oklch);
    let de = color.delta_e_2000(&mapped);

    if args.json {
        let value = serde_json::json!({
            "method": entry.key,
            "input": { "space": space.id(), "coords": color.coords() },
            "inGamut": in_gamut,
            "output": { "space": mapped.space().id(), "coords": mapped.coords() },
            "oklch": oklch.coords(),
            "deltaE2000": de,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} ({})", entry.label, entry.key);
        println!("  Input:    {}{}", color, if in_gamut { "" } else { "  [out of gamut]" });
        println!("  Output:   {}", mapped);
        println!("  Oklch:    {}", oklch);
        println!("  dE2000:   {:.4}", de);
    }
    Ok(())
}
