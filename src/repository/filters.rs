//! Translation of a [`MemberSearchCondition`] into Diesel predicates.
//!
//! Every factory returns `Option<Predicate<_>>`, `None` meaning "no
//! constraint". [`all_of`] drops the absent entries and ANDs the rest, so a
//! condition with nothing set filters nothing.

use diesel::dsl;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;

use crate::domain::search::MemberSearchCondition;
use crate::schema::{members, teams};

/// Boxed boolean filter over the query source `QS`.
///
/// Nullable because team columns are nullable under the left join.
pub type Predicate<QS> = Box<dyn BoxableExpression<QS, Sqlite, SqlType = Nullable<Bool>>>;

/// `members LEFT JOIN teams ON members.team_id = teams.id`
pub type MemberTeamSource = dsl::LeftJoinQuerySource<members::table, teams::table>;

pub type MemberTeamPredicate = Predicate<MemberTeamSource>;
pub type MemberPredicate = Predicate<members::table>;

/// AND of every present predicate, `None` when all are absent.
pub fn all_of<QS, I>(predicates: I) -> Option<Predicate<QS>>
where
    QS: 'static,
    I: IntoIterator<Item = Option<Predicate<QS>>>,
    dsl::And<Predicate<QS>, Predicate<QS>>:
        BoxableExpression<QS, Sqlite, SqlType = Nullable<Bool>> + 'static,
{
    predicates
        .into_iter()
        .flatten()
        .reduce(|acc, next| -> Predicate<QS> { Box::new(acc.and(next)) })
}

fn username_eq(username: Option<&str>) -> Option<MemberTeamPredicate> {
    username.map(|name| -> MemberTeamPredicate {
        Box::new(members::username.nullable().eq(name.to_owned()))
    })
}

/// A member without a team has a null `teams.name`, which never equals a name.
fn team_name_eq(team_name: Option<&str>) -> Option<MemberTeamPredicate> {
    team_name.map(|name| -> MemberTeamPredicate {
        Box::new(teams::name.nullable().eq(name.to_owned()))
    })
}

fn age_goe(age: Option<i32>) -> Option<MemberTeamPredicate> {
    age.map(|age| -> MemberTeamPredicate { Box::new(members::age.nullable().ge(age)) })
}

fn age_loe(age: Option<i32>) -> Option<MemberTeamPredicate> {
    age.map(|age| -> MemberTeamPredicate { Box::new(members::age.nullable().le(age)) })
}

/// Filter over the joined member/team source used by searches and counts.
pub fn member_team_filter(condition: &MemberSearchCondition) -> Option<MemberTeamPredicate> {
    all_of([
        username_eq(condition.username_filter()),
        team_name_eq(condition.team_name_filter()),
        age_goe(condition.age_goe_filter()),
        age_loe(condition.age_loe_filter()),
    ])
}

/// Same translation over `members` alone, for statements that cannot target
/// a join. The team name becomes `team_id IN (SELECT id FROM teams WHERE ...)`.
pub fn member_filter(condition: &MemberSearchCondition) -> Option<MemberPredicate> {
    let team_ids = |name: &str| {
        teams::table
            .filter(teams::name.eq(name.to_owned()))
            .select(teams::id.nullable())
    };

    all_of([
        condition
            .username_filter()
            .map(|name| -> MemberPredicate {
                Box::new(members::username.nullable().eq(name.to_owned()))
            }),
        condition
            .team_name_filter()
            .map(|name| -> MemberPredicate {
                Box::new(members::team_id.eq_any(team_ids(name)).nullable())
            }),
        condition
            .age_goe_filter()
            .map(|age| -> MemberPredicate { Box::new(members::age.nullable().ge(age)) }),
        condition
            .age_loe_filter()
            .map(|age| -> MemberPredicate { Box::new(members::age.nullable().le(age)) }),
    ])
}
