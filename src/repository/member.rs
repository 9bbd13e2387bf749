//! Repository implementation for member searches and bulk operations.

use std::collections::HashMap;

use diesel::dsl::{count, max, min, sum};
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        member::{Member, MemberBulkUpdate, MemberTeamDto, NewMember},
        search::{MemberListQuery, MemberSearchCondition},
        team::TeamStats,
        types::MemberId,
    },
    models::{
        member::{Member as DbMember, MemberTeamRow, NewMember as DbNewMember},
        team::{Team as DbTeam, TeamAggregateRow},
    },
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
        filters::{MemberPredicate, member_filter, member_team_filter},
    },
    schema::{members, teams},
};

fn sql_int(value: usize) -> RepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::ValidationError(format!("{value} is out of range")))
}

/// Filter for statements on `members` alone; matches every row when the
/// condition is empty.
fn member_filter_or_all(condition: &MemberSearchCondition) -> MemberPredicate {
    member_filter(condition).unwrap_or_else(|| Box::new(true.into_sql::<Bool>().nullable()))
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        db_member
            .map(|member| Member::try_from(member).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_members(&self, query: MemberListQuery) -> RepositoryResult<Vec<MemberTeamDto>> {
        let mut conn = self.conn()?;

        let mut items = members::table
            .left_join(teams::table)
            .select((
                members::id,
                members::username,
                members::age,
                teams::id.nullable(),
                teams::name.nullable(),
            ))
            .order(members::id.asc())
            .into_boxed::<Sqlite>();

        if let Some(predicate) = member_team_filter(&query.condition) {
            items = items.filter(predicate);
        }

        if let Some(page) = &query.page {
            items = items
                .offset(sql_int(page.offset)?)
                .limit(sql_int(page.limit)?);
        }

        log::debug!("{}", diesel::debug_query::<Sqlite, _>(&items));

        items
            .load::<MemberTeamRow>(&mut conn)?
            .into_iter()
            .map(|row| MemberTeamDto::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn count_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<u64> {
        let mut conn = self.conn()?;

        // Same source and predicate as `list_members`; only the id is read.
        let mut total = members::table
            .left_join(teams::table)
            .select(count(members::id))
            .into_boxed::<Sqlite>();

        if let Some(predicate) = member_team_filter(condition) {
            total = total.filter(predicate);
        }

        let total = total.get_result::<i64>(&mut conn)?;
        u64::try_from(total)
            .map_err(|_| RepositoryError::Unexpected(format!("negative member count {total}")))
    }

    fn list_team_stats(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<TeamStats>> {
        let mut conn = self.conn()?;

        // Members without a team have no group to be counted in.
        let mut predicate: MemberPredicate = Box::new(members::team_id.is_not_null().nullable());
        if let Some(filter) = member_filter(condition) {
            predicate = Box::new(predicate.and(filter));
        }

        let aggregates = members::table
            .filter(predicate)
            .group_by(members::team_id)
            .select((
                members::team_id,
                count(members::id),
                sum(members::age),
                min(members::age),
                max(members::age),
            ))
            .load::<TeamAggregateRow>(&mut conn)?;

        let team_ids: Vec<i32> = aggregates.iter().filter_map(|row| row.team_id).collect();

        let mut team_map: HashMap<i32, DbTeam> = teams::table
            .filter(teams::id.eq_any(team_ids))
            .load::<DbTeam>(&mut conn)?
            .into_iter()
            .map(|team| (team.id, team))
            .collect();

        let mut stats = aggregates
            .into_iter()
            .filter_map(|row| {
                let team = team_map.remove(&row.team_id?)?;
                Some(TeamStats::try_from((team, row)).map_err(RepositoryError::from))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        stats.sort_by(|a, b| a.team_name.as_str().cmp(b.team_name.as_str()));
        Ok(stats)
    }
}

impl MemberWriter for DieselRepository {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewMember> = new_members.iter().map(Into::into).collect();

        let affected = diesel::insert_into(members::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn bulk_update_members(
        &self,
        condition: &MemberSearchCondition,
        update: &MemberBulkUpdate,
    ) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let target = diesel::update(members::table).filter(member_filter_or_all(condition));

        let affected = match update {
            MemberBulkUpdate::Rename(name) => target
                .set(members::username.eq(name.as_str()))
                .execute(&mut conn)?,
            MemberBulkUpdate::AddAge(delta) => target
                .set(members::age.eq(members::age + *delta))
                .execute(&mut conn)?,
            MemberBulkUpdate::MultiplyAge(factor) => target
                .set(members::age.eq(members::age * *factor))
                .execute(&mut conn)?,
        };

        log::info!("Bulk update {update:?} affected {affected} members");
        Ok(affected)
    }

    fn bulk_delete_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let affected = diesel::delete(members::table)
            .filter(member_filter_or_all(condition))
            .execute(&mut conn)?;

        log::info!("Bulk delete removed {affected} members");
        Ok(affected)
    }
}
