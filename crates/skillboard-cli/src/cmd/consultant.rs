use crate::output::{or_dash, print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use skillboard_core::{
    aggregate::{self, CardSummary},
    catalog::{Industry, Region, SolutionArea, SolutionPlay},
    config::Config,
    consultant::{validate_contact, Consultant, SolutionPlayData},
    filter::ConsultantFilter,
    store::{ConsultantStore, FileStore},
    tier::classify,
};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConsultantSubcommand {
    /// Add a consultant
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Avatar image URL
        #[arg(long)]
        avatar: Option<String>,
        /// Industry tag (repeatable)
        #[arg(long = "industry", value_name = "INDUSTRY")]
        industries: Vec<Industry>,
        #[arg(long)]
        primary_industry: Option<Industry>,
        #[arg(long)]
        region: Option<Region>,
    },
    /// Edit contact details and tags
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        /// Replace industry tags (repeatable)
        #[arg(long = "industry", value_name = "INDUSTRY")]
        industries: Vec<Industry>,
        /// Remove all industry tags
        #[arg(long, conflicts_with = "industries")]
        clear_industries: bool,
        #[arg(long)]
        primary_industry: Option<Industry>,
        /// Remove the primary industry
        #[arg(long, conflicts_with = "primary_industry")]
        clear_primary_industry: bool,
        #[arg(long)]
        region: Option<Region>,
        /// Remove the region
        #[arg(long, conflicts_with = "region")]
        clear_region: bool,
    },
    /// Record metrics for one solution play
    SetPlay {
        id: String,
        /// Solution play name or slug
        play: SolutionPlay,
        #[arg(long)]
        hours: Option<u32>,
        #[arg(long)]
        training: Option<u32>,
        #[arg(long)]
        pre_sales: Option<u32>,
        #[arg(long)]
        articles: Option<u32>,
        #[arg(long)]
        certifications: Option<u32>,
        /// Remove the play entry entirely
        #[arg(long)]
        clear: bool,
    },
    /// Delete a consultant
    Delete { id: String },
    /// Show one consultant with per-play metrics
    Show { id: String },
    /// List consultants, optionally searched and filtered
    List {
        /// Case-insensitive match on name or email
        #[arg(long, short = 'q')]
        query: Option<String>,
        #[arg(long = "industry", value_name = "INDUSTRY")]
        industries: Vec<Industry>,
        #[arg(long = "region", value_name = "REGION")]
        regions: Vec<Region>,
        /// Consultants with hours in this play (repeatable)
        #[arg(long = "play", value_name = "PLAY")]
        plays: Vec<SolutionPlay>,
        /// Consultants with hours in any play of this area (repeatable)
        #[arg(long = "area", value_name = "AREA")]
        areas: Vec<SolutionArea>,
    },
}

pub fn run(root: &Path, subcmd: ConsultantSubcommand, json: bool) -> anyhow::Result<()> {
    let store = FileStore::open(root);
    match subcmd {
        ConsultantSubcommand::Add {
            name,
            email,
            avatar,
            industries,
            primary_industry,
            region,
        } => {
            Config::load(root)?;
            let mut consultant = Consultant::new(name.trim(), email.trim());
            consultant.avatar = avatar;
            consultant.industries = (!industries.is_empty()).then_some(industries);
            consultant.primary_industry = primary_industry;
            consultant.region = region;
            add(&store, consultant, json)
        }
        ConsultantSubcommand::Edit {
            id,
            name,
            email,
            avatar,
            industries,
            clear_industries,
            primary_industry,
            clear_primary_industry,
            region,
            clear_region,
        } => {
            let edit = Edit {
                name,
                email,
                avatar,
                industries: if clear_industries {
                    Some(Vec::new())
                } else {
                    (!industries.is_empty()).then_some(industries)
                },
                primary_industry: if clear_primary_industry {
                    Some(None)
                } else {
                    primary_industry.map(Some)
                },
                region: if clear_region { Some(None) } else { region.map(Some) },
            };
            edit_contact(&store, &id, edit, json)
        }
        ConsultantSubcommand::SetPlay {
            id,
            play,
            hours,
            training,
            pre_sales,
            articles,
            certifications,
            clear,
        } => {
            let change = if clear {
                None
            } else {
                Some(SolutionPlayData {
                    hours_delivered: hours.map(i64::from),
                    training_completed: training.map(i64::from),
                    pre_sales_hours: pre_sales.map(i64::from),
                    articles_posted: articles.map(i64::from),
                    certifications: certifications.map(i64::from),
                })
            };
            set_play(&store, &id, play, change, json)
        }
        ConsultantSubcommand::Delete { id } => delete(&store, &id, json),
        ConsultantSubcommand::Show { id } => show(root, &store, &id, json),
        ConsultantSubcommand::List {
            query,
            industries,
            regions,
            plays,
            areas,
        } => {
            let filter = ConsultantFilter::new()
                .query(query.unwrap_or_default())
                .industries(industries)
                .regions(regions)
                .plays(plays)
                .areas(areas);
            list(root, &store, &filter, json)
        }
    }
}

// ---------------------------------------------------------------------------
// add / edit
// ---------------------------------------------------------------------------

/// Emails are unique across the board, compared trimmed and case-insensitively.
fn ensure_unique_email(
    store: &impl ConsultantStore,
    email: &str,
    except_id: Option<&str>,
) -> anyhow::Result<()> {
    let email = email.trim();
    let taken = store.read()?.iter().any(|c| {
        Some(c.id.as_str()) != except_id && c.email.trim().eq_ignore_ascii_case(email)
    });
    if taken {
        anyhow::bail!("a consultant with email '{email}' already exists");
    }
    Ok(())
}

fn add(store: &impl ConsultantStore, consultant: Consultant, json: bool) -> anyhow::Result<()> {
    validate_contact(&consultant.name, &consultant.email)?;
    ensure_unique_email(store, &consultant.email, None)?;
    store
        .save(consultant.clone())
        .context("failed to save consultant")?;

    if json {
        print_json(&consultant)?;
    } else {
        println!("Added consultant: {} <{}>", consultant.name, consultant.email);
        println!("ID: {}", consultant.id);
    }
    Ok(())
}

/// Field changes for `consultant edit`. `None` leaves a field as it is.
struct Edit {
    name: Option<String>,
    email: Option<String>,
    avatar: Option<String>,
    industries: Option<Vec<Industry>>,
    primary_industry: Option<Option<Industry>>,
    region: Option<Option<Region>>,
}

fn edit_contact(
    store: &impl ConsultantStore,
    id: &str,
    edit: Edit,
    json: bool,
) -> anyhow::Result<()> {
    let current = store.get(id)?;
    let name = edit.name.as_deref().unwrap_or(&current.name).trim().to_string();
    let email = edit.email.as_deref().unwrap_or(&current.email).trim().to_string();
    validate_contact(&name, &email)?;
    ensure_unique_email(store, &email, Some(id))?;

    let updated = store
        .update(id, |c| {
            c.name = name;
            c.email = email;
            if let Some(avatar) = edit.avatar {
                c.avatar = Some(avatar).filter(|a| !a.trim().is_empty());
            }
            if let Some(industries) = edit.industries {
                c.industries = (!industries.is_empty()).then_some(industries);
            }
            if let Some(primary) = edit.primary_industry {
                c.primary_industry = primary;
            }
            if let Some(region) = edit.region {
                c.region = region;
            }
        })
        .with_context(|| format!("failed to update consultant '{id}'"))?;

    if json {
        print_json(&updated)?;
    } else {
        println!("Updated consultant: {} <{}>", updated.name, updated.email);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// set-play
// ---------------------------------------------------------------------------

fn set_play(
    store: &impl ConsultantStore,
    id: &str,
    play: SolutionPlay,
    change: Option<SolutionPlayData>,
    json: bool,
) -> anyhow::Result<()> {
    let key = play.as_str().to_string();
    let updated = store
        .update(id, |c| match change {
            None => {
                c.solution_plays.remove(&key);
            }
            Some(change) => {
                let entry = c.solution_plays.entry(key).or_default();
                merge(entry, change);
            }
        })
        .with_context(|| format!("failed to update consultant '{id}'"))?;

    if json {
        print_json(&updated)?;
        return Ok(());
    }

    let metrics = updated.metrics(play);
    if updated.solution_plays.contains_key(play.as_str()) {
        println!(
            "{}: {} hours in {} ({})",
            updated.name,
            metrics.hours_delivered,
            play,
            classify(metrics.hours_delivered)
        );
    } else {
        println!("{}: cleared {}", updated.name, play);
    }
    Ok(())
}

fn merge(entry: &mut SolutionPlayData, change: SolutionPlayData) {
    if change.hours_delivered.is_some() {
        entry.hours_delivered = change.hours_delivered;
    }
    if change.training_completed.is_some() {
        entry.training_completed = change.training_completed;
    }
    if change.pre_sales_hours.is_some() {
        entry.pre_sales_hours = change.pre_sales_hours;
    }
    if change.articles_posted.is_some() {
        entry.articles_posted = change.articles_posted;
    }
    if change.certifications.is_some() {
        entry.certifications = change.certifications;
    }
}

// ---------------------------------------------------------------------------
// delete / show / list
// ---------------------------------------------------------------------------

fn delete(store: &impl ConsultantStore, id: &str, json: bool) -> anyhow::Result<()> {
    let consultant = store.get(id)?;
    store.remove(id).context("failed to delete consultant")?;

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("Deleted consultant: {}", consultant.name);
    }
    Ok(())
}

fn show(root: &Path, store: &impl ConsultantStore, id: &str, json: bool) -> anyhow::Result<()> {
    let consultant = store.get(id)?;
    let config = Config::load_or_default(root).context("failed to load config")?;
    let summary = aggregate::card_summary(&consultant, config.card_preview_limit);
    let totals = aggregate::totals(&consultant);

    if json {
        print_json(&serde_json::json!({
            "consultant": consultant,
            "summary": summary,
            "totals": totals,
        }))?;
        return Ok(());
    }

    println!("Consultant: {} ({})", consultant.name, summary.initials);
    println!("Email:      {}", consultant.email);
    println!("ID:         {}", consultant.id);
    println!("Region:     {}", or_dash(consultant.region));
    let industries: Vec<&str> = consultant.industry_tags().iter().map(|i| i.as_str()).collect();
    if !industries.is_empty() {
        println!("Industries: {}", industries.join(", "));
    }
    if let Some(primary) = consultant.primary_industry {
        println!("Primary:    {primary}");
    }
    println!(
        "\nTotals: {} hours, {} training, {} pre-sales hours, {} articles, {} certifications",
        totals.hours, totals.training, totals.pre_sales, totals.articles, totals.certifications
    );
    println!("Active plays: {}", summary.active_play_count);

    if consultant.solution_plays.is_empty() {
        println!("\nNo solution play entries yet.");
        return Ok(());
    }

    println!();
    let rows: Vec<Vec<String>> = consultant
        .entries()
        .map(|(play, m)| {
            vec![
                play.to_string(),
                m.tier().to_string(),
                m.hours_delivered.to_string(),
                m.training_completed.to_string(),
                m.pre_sales_hours.to_string(),
                m.articles_posted.to_string(),
                m.certifications.to_string(),
            ]
        })
        .collect();
    print_table(
        &["PLAY", "TIER", "HOURS", "TRAINING", "PRE-SALES", "ARTICLES", "CERTS"],
        rows,
    );
    Ok(())
}

fn list(
    root: &Path,
    store: &impl ConsultantStore,
    filter: &ConsultantFilter,
    json: bool,
) -> anyhow::Result<()> {
    let consultants = store.read().context("failed to read consultants")?;
    let matched = filter.apply(&consultants);

    if json {
        print_json(&matched)?;
        return Ok(());
    }

    if matched.is_empty() {
        if consultants.is_empty() {
            println!("No consultants yet.");
        } else {
            println!("No consultants match the current filters.");
        }
        return Ok(());
    }

    let limit = Config::load_or_default(root)
        .context("failed to load config")?
        .card_preview_limit;
    let rows: Vec<Vec<String>> = matched
        .iter()
        .map(|c| {
            let summary = aggregate::card_summary(c, limit);
            vec![
                c.id.clone(),
                c.name.clone(),
                c.email.clone(),
                or_dash(c.region),
                summary.total_hours.to_string(),
                badges(&summary),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "EMAIL", "REGION", "HOURS", "PLAYS"], rows);
    if !filter.is_empty() {
        println!("\n{} of {} consultants", matched.len(), consultants.len());
    }
    Ok(())
}

fn badges(summary: &CardSummary) -> String {
    let mut parts: Vec<String> = summary
        .badges
        .iter()
        .map(|b| format!("{} ({})", b.play, b.tier))
        .collect();
    if summary.more > 0 {
        parts.push(format!("+{} more", summary.more));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillboard_core::store::MemoryStore;

    #[test]
    fn merge_only_overwrites_given_fields() {
        let mut entry = SolutionPlayData {
            hours_delivered: Some(100),
            training_completed: Some(2),
            ..Default::default()
        };
        merge(
            &mut entry,
            SolutionPlayData {
                hours_delivered: Some(250),
                ..Default::default()
            },
        );
        assert_eq!(entry.hours_delivered, Some(250));
        assert_eq!(entry.training_completed, Some(2));
    }

    #[test]
    fn set_play_then_clear() {
        let c = Consultant::new("Ada", "ada@example.com");
        let id = c.id.clone();
        let store = MemoryStore::new(vec![c]);
        let data = SolutionPlayData {
            hours_delivered: Some(600),
            ..Default::default()
        };
        set_play(&store, &id, SolutionPlay::DataSecurity, Some(data), true).unwrap();
        assert_eq!(store.get(&id).unwrap().hours(SolutionPlay::DataSecurity), 600);

        set_play(&store, &id, SolutionPlay::DataSecurity, None, true).unwrap();
        assert!(store.get(&id).unwrap().solution_plays.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_email() {
        let store = MemoryStore::new(vec![Consultant::new("Ada", "ada@example.com")]);
        let err = add(&store, Consultant::new("Other", "ADA@example.com "), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(store.read().unwrap().len(), 1);
    }

    fn no_change() -> Edit {
        Edit {
            name: None,
            email: None,
            avatar: None,
            industries: None,
            primary_industry: None,
            region: None,
        }
    }

    #[test]
    fn edit_can_clear_primary_industry() {
        let mut c = Consultant::new("Ada", "ada@example.com");
        c.primary_industry = Some(Industry::Banking);
        c.region = Some(Region::Emea);
        let id = c.id.clone();
        let store = MemoryStore::new(vec![c]);
        let edit = Edit {
            primary_industry: Some(None),
            ..no_change()
        };
        edit_contact(&store, &id, edit, true).unwrap();
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.primary_industry, None);
        assert_eq!(stored.region, Some(Region::Emea));
    }

    #[test]
    fn edit_rejects_email_of_another_consultant() {
        let ada = Consultant::new("Ada", "ada@example.com");
        let grace = Consultant::new("Grace", "grace@example.com");
        let id = grace.id.clone();
        let store = MemoryStore::new(vec![ada, grace]);
        let edit = Edit {
            email: Some(" ADA@example.com".into()),
            ..no_change()
        };
        let err = edit_contact(&store, &id, edit, true).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(store.get(&id).unwrap().email, "grace@example.com");
    }

    #[test]
    fn edit_keeps_own_email() {
        let c = Consultant::new("Ada", "ada@example.com");
        let id = c.id.clone();
        let store = MemoryStore::new(vec![c]);
        let edit = Edit {
            name: Some("Ada King".into()),
            email: Some("ADA@example.com".into()),
            ..no_change()
        };
        edit_contact(&store, &id, edit, true).unwrap();
        assert_eq!(store.get(&id).unwrap().name, "Ada King");
    }

    #[test]
    fn edit_rejects_invalid_email() {
        let c = Consultant::new("Ada", "ada@example.com");
        let id = c.id.clone();
        let store = MemoryStore::new(vec![c]);
        let edit = Edit {
            name: None,
            email: Some("not-an-email".into()),
            avatar: None,
            industries: None,
            primary_industry: None,
            region: None,
        };
        assert!(edit_contact(&store, &id, edit, true).is_err());
        assert_eq!(store.get(&id).unwrap().email, "ada@example.com");
    }

    #[test]
    fn edit_can_clear_region() {
        let mut c = Consultant::new("Ada", "ada@example.com");
        c.region = Some(Region::Asia);
        let id = c.id.clone();
        let store = MemoryStore::new(vec![c]);
        let edit = Edit {
            name: None,
            email: None,
            avatar: None,
            industries: None,
            primary_industry: None,
            region: Some(None),
        };
        edit_contact(&store, &id, edit, true).unwrap();
        assert!(store.get(&id).unwrap().region.is_none());
    }
}
