use serde::{Deserialize, Serialize};

use crate::domain::types::{TeamId, TeamName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: TeamName,
}

impl NewTeam {
    pub fn new(name: TeamName) -> Self {
        Self { name }
    }
}

/// Aggregated member statistics for a single team.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub team_name: TeamName,
    pub member_count: u64,
    pub age_sum: i64,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

impl TeamStats {
    /// Mean age of the members counted, `None` for an empty team.
    pub fn average_age(&self) -> Option<f64> {
        if self.member_count == 0 {
            None
        } else {
            Some(self.age_sum as f64 / self.member_count as f64)
        }
    }
}
