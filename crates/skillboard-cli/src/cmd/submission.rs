use crate::output::{or_dash, print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use skillboard_core::{
    catalog::{SolutionArea, SolutionPlay},
    config::Config,
    submission::{HoursRange, NewSubmission, SubmissionLog},
    BoardError,
};
use std::path::Path;

#[derive(Subcommand)]
pub enum SubmissionSubcommand {
    /// Record self-reported hours for one solution play
    Add {
        /// Team member name
        #[arg(long)]
        member: String,
        /// Solution area name or slug
        #[arg(long)]
        area: SolutionArea,
        /// Solution play name or slug (must belong to --area)
        #[arg(long)]
        play: SolutionPlay,
        /// Hours band: 0-100, 101-500 or 501+
        #[arg(long)]
        range: HoursRange,
        /// Exact hours, when known (must fall inside --range)
        #[arg(long)]
        hours: Option<u64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List submissions, oldest first
    List,
    /// Delete one submission
    Delete { id: String },
    /// Delete every submission
    Clear,
}

pub fn run(root: &Path, subcmd: SubmissionSubcommand, json: bool) -> anyhow::Result<()> {
    let log = SubmissionLog::open(root);
    match subcmd {
        SubmissionSubcommand::Add {
            member,
            area,
            play,
            range,
            hours,
            notes,
        } => {
            let new = NewSubmission {
                team_member: member,
                area,
                play,
                range,
                actual_hours: hours,
                notes,
            };
            Config::load(root)?;
            add(&log, new, json)
        }
        SubmissionSubcommand::List => list(&log, json),
        SubmissionSubcommand::Delete { id } => delete(&log, &id, json),
        SubmissionSubcommand::Clear => clear(&log, json),
    }
}

fn add(log: &SubmissionLog, new: NewSubmission, json: bool) -> anyhow::Result<()> {
    let s = log.add(new).context("failed to record submission")?;

    if json {
        print_json(&s)?;
    } else {
        println!(
            "Recorded {}: {}, {} hours in {} ({} band)",
            s.id,
            s.team_member,
            s.actual_hours
                .map(|h| h.to_string())
                .unwrap_or_else(|| s.range.to_string()),
            s.play,
            s.range.label_tier()
        );
    }
    Ok(())
}

fn list(log: &SubmissionLog, json: bool) -> anyhow::Result<()> {
    let submissions = log.list().context("failed to load submissions")?;

    if json {
        return print_json(&submissions);
    }

    if submissions.is_empty() {
        println!("No submissions yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = submissions
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.team_member.clone(),
                s.play.to_string(),
                s.range.to_string(),
                or_dash(s.actual_hours),
                s.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
                s.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(
        &["ID", "MEMBER", "PLAY", "RANGE", "HOURS", "SUBMITTED", "NOTES"],
        rows,
    );
    Ok(())
}

fn delete(log: &SubmissionLog, id: &str, json: bool) -> anyhow::Result<()> {
    if !log.delete(id).context("failed to update submissions")? {
        return Err(BoardError::SubmissionNotFound(id.to_string()).into());
    }

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("Deleted submission {id}");
    }
    Ok(())
}

fn clear(log: &SubmissionLog, json: bool) -> anyhow::Result<()> {
    let count = log.list()
        .context("failed to load submissions")?
        .len();
    log.clear().context("failed to clear submissions")?;

    if json {
        print_json(&serde_json::json!({ "cleared": count }))?;
    } else {
        println!("Cleared {count} submission(s)");
    }
    Ok(())
}
