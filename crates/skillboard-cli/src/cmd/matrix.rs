use crate::output::{print_json, print_table};
use anyhow::Context;
use skillboard_core::{
    matrix::skills_matrix,
    store::{ConsultantStore, FileStore},
};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let consultants = FileStore::open(root)
        .read()
        .context("failed to read consultants")?;
    let matrix = skills_matrix(&consultants);

    if json {
        return print_json(&matrix);
    }

    if matrix.is_empty() {
        println!("No consultants yet.");
        return Ok(());
    }

    // Text view lists started cells only; --json carries the full grid.
    let rows: Vec<Vec<String>> = matrix
        .iter()
        .flat_map(|row| {
            let started: Vec<_> = row.cells.iter().filter(|c| c.tier.is_started()).collect();
            if started.is_empty() {
                return vec![vec![
                    row.name.clone(),
                    "-".to_string(),
                    "0".to_string(),
                    "0".to_string(),
                    "Not Started".to_string(),
                ]];
            }
            started
                .into_iter()
                .map(|cell| {
                    vec![
                        row.name.clone(),
                        cell.play.to_string(),
                        cell.hours.to_string(),
                        cell.training.to_string(),
                        cell.tier.to_string(),
                    ]
                })
                .collect()
        })
        .collect();
    print_table(&["CONSULTANT", "PLAY", "HOURS", "TRAINING", "TIER"], rows);
    Ok(())
}
