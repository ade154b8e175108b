use crate::output::{percent, print_json, print_table};
use anyhow::Context;
use skillboard_core::{
    catalog::SolutionPlay,
    consultant::Consultant,
    coverage::{assess, deep_dive, CoverageStatus},
    store::{ConsultantStore, FileStore},
};
use std::path::Path;

pub fn run(root: &Path, play: Option<&str>, json: bool) -> anyhow::Result<()> {
    let consultants = FileStore::open(root)
        .read()
        .context("failed to read consultants")?;
    match play {
        Some(p) => drill_into(&consultants, p.parse::<SolutionPlay>()?, json),
        None => summary(&consultants, json),
    }
}

// ---------------------------------------------------------------------------
// Coverage summary
// ---------------------------------------------------------------------------

fn summary(consultants: &[Consultant], json: bool) -> anyhow::Result<()> {
    let assessment = assess(consultants);

    if json {
        return print_json(&assessment);
    }

    println!(
        "{} consultants: {} strong, {} growing, {} missing plays",
        assessment.consultant_count,
        assessment.strong().len(),
        assessment.growing().len(),
        assessment.missing().len()
    );
    println!();

    let rows: Vec<Vec<String>> = assessment
        .plays
        .iter()
        .map(|p| {
            vec![
                p.play.to_string(),
                p.area.to_string(),
                p.total.to_string(),
                p.tiers.leader.to_string(),
                p.tiers.contributor.to_string(),
                p.tiers.apprentice.to_string(),
                percent(p.coverage),
                p.status.to_string(),
            ]
        })
        .collect();
    print_table(
        &["PLAY", "AREA", "TOTAL", "LEADER", "CONTRIB", "APPRENTICE", "COVERAGE", "STATUS"],
        rows,
    );

    println!();
    let rows: Vec<Vec<String>> = assessment
        .areas
        .iter()
        .map(|a| {
            vec![
                a.area.to_string(),
                a.active_consultants.to_string(),
                percent(a.coverage),
                a.strong.to_string(),
                a.growing.to_string(),
                a.missing.to_string(),
            ]
        })
        .collect();
    print_table(
        &["AREA", "ACTIVE", "COVERAGE", "STRONG", "GROWING", "MISSING"],
        rows,
    );

    let gaps: Vec<String> = assessment
        .with_status(CoverageStatus::Missing)
        .map(|p| p.play.to_string())
        .collect();
    if !gaps.is_empty() {
        println!("\nGaps: {}", gaps.join(", "));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Deep dive
// ---------------------------------------------------------------------------

fn drill_into(consultants: &[Consultant], play: SolutionPlay, json: bool) -> anyhow::Result<()> {
    let dive = deep_dive(consultants, play);

    if json {
        let groups: Vec<_> = dive
            .groups
            .iter()
            .map(|g| {
                let members: Vec<_> = g
                    .members
                    .iter()
                    .map(|q| {
                        serde_json::json!({
                            "id": q.consultant.id,
                            "name": q.consultant.name,
                            "email": q.consultant.email,
                            "hours": q.metrics.hours_delivered,
                            "training": q.metrics.training_completed,
                        })
                    })
                    .collect();
                serde_json::json!({ "tier": g.tier, "members": members })
            })
            .collect();
        return print_json(&serde_json::json!({
            "coverage": dive.coverage,
            "groups": groups,
        }));
    }

    let c = &dive.coverage;
    println!("Play:     {} ({})", c.play, c.area);
    println!("Coverage: {} ({} consultants, {})", percent(c.coverage), c.total, c.status);

    if dive.groups.is_empty() {
        println!("\nNo consultants have started this play.");
        return Ok(());
    }

    for group in &dive.groups {
        println!("\n{} ({}):", group.tier, group.members.len());
        for q in &group.members {
            println!(
                "  {:<28} {:>6} hours  {:>3} training",
                q.consultant.name, q.metrics.hours_delivered, q.metrics.training_completed
            );
        }
    }
    Ok(())
}
