//! Subcommand implementations.

pub mod edge;
pub mod map;
pub mod methods;
pub mod sweep;

use anyhow::{Context, Result};
use gamut_color::Gamut;

/// Parses a gamut name from the command line.
pub fn parse_gamut(name: &str) -> Result<Gamut> {
    name.parse::<Gamut>().with_context(|| format!("Invalid gamut '{name}'"))
}
