use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, MemberName, TeamId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: MemberName,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: MemberName,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    pub fn new(username: MemberName, age: Age, team_id: Option<TeamId>) -> Self {
        Self {
            username,
            age,
            team_id,
        }
    }
}

/// Team columns carried by a [`MemberTeamDto`] when the member has a team.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRef {
    pub team_id: TeamId,
    pub team_name: String,
}

/// Flat read-only projection of a member and its (optional) team.
///
/// Produced fresh by every query; members without a team have `team: None`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberTeamDto {
    pub member_id: MemberId,
    pub username: String,
    pub age: i32,
    pub team: Option<TeamRef>,
}

impl MemberTeamDto {
    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|team| team.team_name.as_str())
    }
}

/// Store-side change applied to every member matching a condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberBulkUpdate {
    /// Set the username of every matching member.
    Rename(MemberName),
    /// Add the given delta to the age (may be negative).
    AddAge(i32),
    /// Multiply the age by the given factor.
    MultiplyAge(i32),
}
