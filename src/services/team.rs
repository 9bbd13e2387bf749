use crate::domain::team::{NewTeam, Team};
use crate::domain::types::TeamName;
use crate::repository::{TeamReader, TeamWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates a team, or returns the existing one with the same name.
pub fn create_team<R>(repo: &R, name: &str) -> ServiceResult<Team>
where
    R: TeamReader + TeamWriter + ?Sized,
{
    let name = TeamName::new(name)?;

    if let Some(team) = repo.get_team_by_name(&name)? {
        return Ok(team);
    }

    repo.create_team(&NewTeam::new(name))
        .map_err(ServiceError::from)
}

/// Lists every team ordered by name.
pub fn list_teams<R>(repo: &R) -> ServiceResult<Vec<Team>>
where
    R: TeamReader + ?Sized,
{
    repo.list_teams().map_err(ServiceError::from)
}
