//! Scorecard
//!
//! A read-only summary of a course: one row per hole with par, length and
//! strokes, plus running totals against par.

use serde::{Deserialize, Serialize};

use crate::sim::course::{Course, HoleStatus};

/// One row of the scorecard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardEntry {
    pub hole: u32,
    pub par: u32,
    /// Hole length in feet
    pub distance_feet: f32,
    /// Strokes taken, `None` until holed out
    pub strokes: Option<u32>,
    pub current: bool,
}

impl ScorecardEntry {
    /// Strokes minus par for a finished hole
    pub fn relative_to_par(&self) -> Option<i32> {
        self.strokes.map(|s| s as i32 - self.par as i32)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scorecard {
    pub entries: Vec<ScorecardEntry>,
}

impl Scorecard {
    pub fn from_course(course: &Course) -> Self {
        let entries = course
            .holes
            .iter()
            .map(|hole| ScorecardEntry {
                hole: hole.number,
                par: hole.par(),
                distance_feet: hole.distance_feet(),
                strokes: hole.score,
                current: hole.status == HoleStatus::Current,
            })
            .collect();
        Self { entries }
    }

    /// Every hole has a score
    pub fn is_complete(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.strokes.is_some())
    }

    /// Strokes over finished holes
    pub fn total_strokes(&self) -> u32 {
        self.entries.iter().filter_map(|e| e.strokes).sum()
    }

    /// Par over finished holes
    pub fn played_par(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.strokes.is_some())
            .map(|e| e.par)
            .sum()
    }

    pub fn course_par(&self) -> u32 {
        self.entries.iter().map(|e| e.par).sum()
    }

    /// Running score against par: negative is under
    pub fn relative_to_par(&self) -> i32 {
        self.total_strokes() as i32 - self.played_par() as i32
    }

    /// Text rows for the HUD
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        for e in &self.entries {
            let marker = if e.current { ">" } else { " " };
            let score = match e.strokes {
                Some(s) => format!("{:>2} ({})", s, format_relative(e.relative_to_par().unwrap_or(0))),
                None => " -".to_string(),
            };
            lines.push(format!(
                "{}{:>2}  {:>4} ft  par {}  {}",
                marker,
                e.hole,
                e.distance_feet.round() as u32,
                e.par,
                score
            ));
        }
        lines.push(format!(
            "Total {} / par {} ({})",
            self.total_strokes(),
            self.played_par(),
            format_relative(self.relative_to_par())
        ));
        lines
    }
}

/// Golf-style relative score: "E", "+2", "-1"
pub fn format_relative(relative: i32) -> String {
    match relative {
        0 => "E".to_string(),
        r if r > 0 => format!("+{}", r),
        r => r.to_string(),
    }
}
