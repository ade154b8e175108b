use crate::output::print_json;
use anyhow::Context;
use skillboard_core::{
    aggregate,
    store::{ConsultantStore, FileStore},
};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let consultants = FileStore::open(root)
        .read()
        .context("failed to read consultants")?;
    let overview = aggregate::overview(&consultants);

    if json {
        return print_json(&overview);
    }

    println!("Consultants:       {}", overview.total_consultants);
    println!("Hours delivered:   {}", overview.total_hours);
    println!("Training:          {}", overview.total_training);
    println!("Pre-sales hours:   {}", overview.total_pre_sales);
    println!("Articles:          {}", overview.total_articles);
    println!("Certifications:    {}", overview.total_certifications);
    println!("Leaders:           {}", overview.leader_count);
    Ok(())
}
