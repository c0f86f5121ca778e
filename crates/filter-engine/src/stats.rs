//! Aggregate statistics over the filtered list.
//!
//! Everything here is derived read-only from the current view list.
//! `StatsDisplay` carries the header strings, including the placeholders
//! shown when nothing matches.

use catalog::Artist;
use std::fmt;

/// Placeholder for an aggregate that has no value (empty list)
pub const EMPTY_STAT: &str = "–";

/// Aggregates over a list of artists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStats {
    pub count: usize,
    /// Mean creation year, rounded to the nearest year
    pub avg_creation_year: Option<i32>,
    pub avg_members: Option<f64>,
    pub oldest_creation_year: Option<i32>,
}

impl ListStats {
    /// Compute stats for the given artists.
    pub fn from_artists(artists: &[&Artist]) -> Self {
        if artists.is_empty() {
            return Self {
                count: 0,
                avg_creation_year: None,
                avg_members: None,
                oldest_creation_year: None,
            };
        }

        let count = artists.len();
        let total_years: i64 = artists.iter().map(|a| a.creation_date as i64).sum();
        let total_members: usize = artists.iter().map(|a| a.member_count()).sum();
        let oldest = artists.iter().map(|a| a.creation_date).min();

        Self {
            count,
            avg_creation_year: Some((total_years as f64 / count as f64).round() as i32),
            avg_members: Some(total_members as f64 / count as f64),
            oldest_creation_year: oldest,
        }
    }

    pub fn display(&self) -> StatsDisplay {
        StatsDisplay::from(self)
    }
}

/// Display strings for the stats header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub count: String,
    pub avg_creation_year: String,
    pub avg_members: String,
    pub oldest: String,
}

impl From<&ListStats> for StatsDisplay {
    fn from(stats: &ListStats) -> Self {
        Self {
            count: stats.count.to_string(),
            avg_creation_year: stats
                .avg_creation_year
                .map(|y| format!("~{}", y))
                .unwrap_or_else(|| EMPTY_STAT.to_string()),
            avg_members: stats
                .avg_members
                .map(|m| format!("{:.1}", m))
                .unwrap_or_else(|| EMPTY_STAT.to_string()),
            oldest: stats
                .oldest_creation_year
                .map(|y| format!("Since {}", y))
                .unwrap_or_else(|| EMPTY_STAT.to_string()),
        }
    }
}

impl fmt::Display for StatsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} artists | avg year {} | avg members {} | {}",
            self.count, self.avg_creation_year, self.avg_members, self.oldest
        )
    }
}
