use crate::catalog::SolutionPlay;
use crate::consultant::Consultant;
use crate::tier::SkillTier;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub play: SolutionPlay,
    pub hours: u64,
    pub training: u64,
    pub tier: SkillTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub id: String,
    pub name: String,
    pub email: String,
    /// One cell per catalog play, in catalog order.
    pub cells: Vec<MatrixCell>,
}

/// Consultants × plays grid. Rows follow input order.
pub fn skills_matrix(consultants: &[Consultant]) -> Vec<MatrixRow> {
    consultants
        .iter()
        .map(|c| MatrixRow {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            cells: SolutionPlay::all()
                .iter()
                .map(|&play| {
                    let m = c.metrics(play);
                    MatrixCell {
                        play,
                        hours: m.hours_delivered,
                        training: m.training_completed,
                        tier: m.tier(),
                    }
                })
                .collect(),
        })
        .collect()
}
