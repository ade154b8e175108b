use crate::output::print_json;
use skillboard_core::{
    catalog::{Industry, Region, SolutionArea},
    tier::SkillTier,
};

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let areas: Vec<_> = SolutionArea::all()
            .iter()
            .map(|&area| {
                let plays: Vec<_> = area
                    .plays()
                    .iter()
                    .map(|&p| serde_json::json!({ "name": p, "slug": p.slug() }))
                    .collect();
                serde_json::json!({ "name": area, "slug": area.slug(), "plays": plays })
            })
            .collect();
        let tiers: Vec<_> = SkillTier::qualified()
            .iter()
            .map(|&t| serde_json::json!({ "name": t, "hours": t.hours_band() }))
            .collect();
        return print_json(&serde_json::json!({
            "areas": areas,
            "industries": Industry::all(),
            "regions": Region::all(),
            "tiers": tiers,
        }));
    }

    for &area in SolutionArea::all() {
        println!("{area}");
        for play in area.plays() {
            println!("  {:<40} {}", play.as_str(), play.slug());
        }
        println!();
    }

    let industries: Vec<&str> = Industry::all().iter().map(|i| i.as_str()).collect();
    println!("Industries: {}", industries.join(", "));
    let regions: Vec<&str> = Region::all().iter().map(|r| r.as_str()).collect();
    println!("Regions:    {}", regions.join(", "));
    println!("\nTiers:");
    for &tier in SkillTier::qualified() {
        println!("  {:<12} {}", tier.as_str(), tier.hours_band());
    }
    Ok(())
}
