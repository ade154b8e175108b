use anyhow::Context;
use skillboard_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let board_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "skillboard".to_string());

    println!("Initializing skills board in: {}", root.display());

    let board_dir = paths::board_dir(root);
    io::ensure_dir(&board_dir)
        .with_context(|| format!("failed to create {}", board_dir.display()))?;

    let config_path = paths::config_path(root);
    if !config_path.exists() {
        Config::new(&board_name)
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    let written = io::write_if_missing(&paths::consultants_path(root), b"[]\n")
        .context("failed to write consultants.json")?;
    if written {
        println!("  created: {}", paths::CONSULTANTS_FILE);
    } else {
        println!("  exists:  {}", paths::CONSULTANTS_FILE);
    }

    println!("\nNext: skillboard consultant add --name \"...\" --email ...");
    Ok(())
}
