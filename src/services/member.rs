//! Member search call contract: plain search, paged search and paged search
//! with count skipping, plus bulk operations.

use crate::domain::member::{MemberBulkUpdate, MemberTeamDto};
use crate::domain::page::{CountMode, Page, PageRequest};
use crate::domain::search::{MemberListQuery, MemberSearchCondition};
use crate::domain::team::TeamStats;
use crate::repository::{MemberReader, MemberWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every member matching `condition`, members without a team
/// included. The result is unbounded.
pub fn search_members<R>(
    repo: &R,
    condition: &MemberSearchCondition,
) -> ServiceResult<Vec<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    condition.validate()?;
    repo.list_members(MemberListQuery::new(condition.clone()))
        .map_err(ServiceError::from)
}

/// Returns one window of matches and the exact total from a separate count
/// query.
///
/// The two queries are not atomic; a concurrent write between them can make
/// `total` disagree with `content`.
pub fn search_members_page<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    request: PageRequest,
) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    fetch_page(repo, condition, request, CountMode::Always)
}

/// Like [`search_members_page`], but the count query is only issued when the
/// window itself cannot tell the total.
pub fn search_members_page_optimized<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    request: PageRequest,
) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    fetch_page(repo, condition, request, CountMode::SkipWhenComplete)
}

fn fetch_page<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    request: PageRequest,
    mode: CountMode,
) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    condition.validate()?;

    let content = repo.list_members(MemberListQuery::new(condition.clone()).paginate(request))?;

    Page::assemble(content, request, mode, || {
        repo.count_members(condition).map_err(ServiceError::from)
    })
}

/// Per-team member statistics for the members matching `condition`.
pub fn team_stats<R>(repo: &R, condition: &MemberSearchCondition) -> ServiceResult<Vec<TeamStats>>
where
    R: MemberReader + ?Sized,
{
    condition.validate()?;
    repo.list_team_stats(condition).map_err(ServiceError::from)
}

/// Applies `update` to every member matching `condition` in one statement.
pub fn bulk_update_members<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    update: &MemberBulkUpdate,
) -> ServiceResult<usize>
where
    R: MemberWriter + ?Sized,
{
    condition.validate()?;
    repo.bulk_update_members(condition, update)
        .map_err(ServiceError::from)
}

/// Deletes every member matching `condition`. An empty condition is refused.
pub fn bulk_delete_members<R>(repo: &R, condition: &MemberSearchCondition) -> ServiceResult<usize>
where
    R: MemberWriter + ?Sized,
{
    condition.validate()?;
    if condition.is_unfiltered() {
        return Err(ServiceError::InvalidCondition(
            "refusing to delete without a filter".to_string(),
        ));
    }
    repo.bulk_delete_members(condition)
        .map_err(ServiceError::from)
}
