use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::{Member, MemberBulkUpdate, MemberTeamDto, NewMember},
        search::{MemberListQuery, MemberSearchCondition},
        team::{NewTeam, Team, TeamStats},
        types::{MemberId, TeamName},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod filters;
pub mod member;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod team;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    /// Members matching `query.condition`, left-joined to their team, ordered
    /// by member id and windowed by `query.page` when present.
    fn list_members(&self, query: MemberListQuery) -> RepositoryResult<Vec<MemberTeamDto>>;
    /// Number of members matching `condition`, ignoring any window.
    fn count_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<u64>;
    /// Per-team aggregates over the members matching `condition`.
    fn list_team_stats(&self, condition: &MemberSearchCondition)
    -> RepositoryResult<Vec<TeamStats>>;
}

pub trait MemberWriter {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
    fn bulk_update_members(
        &self,
        condition: &MemberSearchCondition,
        update: &MemberBulkUpdate,
    ) -> RepositoryResult<usize>;
    fn bulk_delete_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}
