//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{Member, MemberBulkUpdate, MemberTeamDto, NewMember};
use crate::domain::search::{MemberListQuery, MemberSearchCondition};
use crate::domain::team::{NewTeam, Team, TeamStats};
use crate::domain::types::{MemberId, TeamName};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberWriter, TeamReader, TeamWriter};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self, query: MemberListQuery) -> RepositoryResult<Vec<MemberTeamDto>>;
        fn count_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<u64>;
        fn list_team_stats(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<TeamStats>>;
    }

    impl MemberWriter for Repository {
        fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
        fn bulk_update_members(
            &self,
            condition: &MemberSearchCondition,
            update: &MemberBulkUpdate,
        ) -> RepositoryResult<usize>;
        fn bulk_delete_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
