use std::path::Path;

use crate::campaign::Campaign;

pub fn run(name: &str, file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("campaign file '{}' already exists", file.display()));
    }

    Campaign::new(name).save(file)?;

    println!("Created campaign '{name}' in {}", file.display());
    println!();
    println!("Get started:");
    println!("  dad add <name>            # Put a dad in the roster");
    println!("  dad move <name> law 3     # Resolve a move");
    println!("  dad play                  # Run an interactive session");

    Ok(())
}
