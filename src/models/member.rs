//! Diesel models for members and the member/team projection.

use diesel::prelude::*;

use crate::domain::member::{
    Member as DomainMember, MemberTeamDto as DomainMemberTeamDto, NewMember as DomainNewMember,
    TeamRef,
};
use crate::domain::types::{Age, MemberId, MemberName, TeamId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::members)]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub username: &'a str,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Row of `members LEFT JOIN teams`; team columns are null without a team.
#[derive(Debug, Clone, Queryable)]
pub struct MemberTeamRow {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::try_from(member.id)?,
            username: MemberName::new(member.username)?,
            age: Age::new(member.age)?,
            team_id: member.team_id.map(TeamId::try_from).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_str(),
            age: member.age.get(),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}

impl TryFrom<MemberTeamRow> for DomainMemberTeamDto {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeamRow) -> Result<Self, Self::Error> {
        let team = match (row.team_id, row.team_name) {
            (Some(team_id), Some(team_name)) => Some(TeamRef {
                team_id: TeamId::try_from(team_id)?,
                team_name,
            }),
            _ => None,
        };

        Ok(Self {
            member_id: MemberId::try_from(row.member_id)?,
            username: row.username,
            age: row.age,
            team,
        })
    }
}
