use std::path::Path;

use crate::campaign::Campaign;

pub fn run(format: &str, output: Option<&Path>, file: &Path) -> Result<(), String> {
    let campaign = Campaign::load(file)?;

    let content = match format {
        "json" => campaign.log.export_json().map_err(|e| e.to_string())?,
        "markdown" | "md" => campaign.log.export_markdown(),
        "text" | "txt" => campaign.log.export_text(),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown, text"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
