//! Diesel models for teams.

use diesel::prelude::*;

use crate::domain::team::{
    NewTeam as DomainNewTeam, Team as DomainTeam, TeamStats as DomainTeamStats,
};
use crate::domain::types::{TeamId, TeamName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::teams)]
/// Diesel model for [`crate::domain::team::Team`].
pub struct Team {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::teams)]
/// Insertable form of [`Team`].
pub struct NewTeam<'a> {
    pub name: &'a str,
}

/// Row of the member aggregate query grouped by `members.team_id`.
#[derive(Debug, Clone, Queryable)]
pub struct TeamAggregateRow {
    pub team_id: Option<i32>,
    pub member_count: i64,
    pub age_sum: Option<i64>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

impl TryFrom<Team> for DomainTeam {
    type Error = TypeConstraintError;

    fn try_from(team: Team) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TeamId::try_from(team.id)?,
            name: TeamName::new(team.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewTeam> for NewTeam<'a> {
    fn from(team: &'a DomainNewTeam) -> Self {
        Self {
            name: team.name.as_str(),
        }
    }
}

impl TryFrom<(Team, TeamAggregateRow)> for DomainTeamStats {
    type Error = TypeConstraintError;

    fn try_from((team, row): (Team, TeamAggregateRow)) -> Result<Self, Self::Error> {
        let member_count = u64::try_from(row.member_count).map_err(|_| {
            TypeConstraintError::InvalidValue(format!("member count {}", row.member_count))
        })?;
        Ok(Self {
            team_id: TeamId::try_from(team.id)?,
            team_name: TeamName::new(team.name)?,
            member_count,
            age_sum: row.age_sum.unwrap_or(0),
            min_age: row.min_age,
            max_age: row.max_age,
        })
    }
}
