//! Method listing command.

use anyhow::Result;

use gamut_map::Registry;

use crate::MethodsArgs;

/// Prints every registered method with its result prefix.
pub fn run(args: MethodsArgs) -> Result<()> {
    let display = super::parse_gamut(&args.display)?;
    let registry = Registry::new(display);

    println!("Methods for {}:", display);
    for entry in registry.entries() {
        let gamut = entry.kind.mapping_gamut(display);
        println!("  {:<22} {:<24} prefix {:<12} maps into {}", entry.key, entry.label, entry.result_prefix, gamut);
        println!("  {:<22} {}", "", entry.description);
    }
    Ok(())
}
