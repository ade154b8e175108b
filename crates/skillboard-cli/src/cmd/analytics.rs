use crate::output::{print_json, print_table};
use anyhow::Context;
use skillboard_core::{
    aggregate::analyze_play,
    store::{ConsultantStore, FileStore},
    tier::SkillTier,
};
use std::path::Path;

pub fn run(root: &Path, play: Option<&str>, json: bool) -> anyhow::Result<()> {
    let play = super::resolve_play(root, play)?;
    let consultants = FileStore::open(root)
        .read()
        .context("failed to read consultants")?;
    let analytics = analyze_play(&consultants, play);

    if json {
        let qualified: Vec<_> = analytics
            .qualified
            .iter()
            .map(|q| {
                serde_json::json!({
                    "id": q.consultant.id,
                    "name": q.consultant.name,
                    "email": q.consultant.email,
                    "hours": q.metrics.hours_delivered,
                    "training": q.metrics.training_completed,
                    "tier": q.tier,
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "play": analytics.play,
            "qualified_count": analytics.qualified_count(),
            "distribution": analytics.distribution,
            "total_hours": analytics.total_hours,
            "total_training": analytics.total_training,
            "qualified": qualified,
        }));
    }

    println!("Play:      {} ({})", analytics.play, analytics.play.area());
    println!("Qualified: {}", analytics.qualified_count());
    for &tier in SkillTier::qualified() {
        println!(
            "  {:<12} {}  ({})",
            tier.as_str(),
            analytics.distribution.get(tier),
            tier.hours_band()
        );
    }
    println!(
        "Hours: {}  Training: {}",
        analytics.total_hours, analytics.total_training
    );

    if analytics.qualified.is_empty() {
        println!("\nNo consultants have started this play.");
        return Ok(());
    }

    println!();
    let rows: Vec<Vec<String>> = analytics
        .qualified
        .iter()
        .enumerate()
        .map(|(i, q)| {
            vec![
                (i + 1).to_string(),
                q.consultant.name.clone(),
                q.metrics.hours_delivered.to_string(),
                q.metrics.training_completed.to_string(),
                q.tier.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "NAME", "HOURS", "TRAINING", "TIER"], rows);
    Ok(())
}
