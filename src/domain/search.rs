//! Optional search criteria for member queries.

use thiserror::Error;

use crate::domain::page::PageRequest;

/// Errors reported by [`MemberSearchCondition::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchConditionError {
    #[error("age lower bound {goe} is greater than upper bound {loe}")]
    InvertedAgeRange { goe: i32, loe: i32 },
}

/// Sparse set of member filters. An absent field does not filter.
///
/// String criteria that are empty or whitespace-only count as absent; use the
/// accessors rather than the raw fields when building predicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username to match exactly, if present and non-blank.
    pub fn username_filter(&self) -> Option<&str> {
        non_blank(&self.username)
    }

    /// Team name to match exactly, if present and non-blank.
    pub fn team_name_filter(&self) -> Option<&str> {
        non_blank(&self.team_name)
    }

    pub fn age_goe_filter(&self) -> Option<i32> {
        self.age_goe
    }

    pub fn age_loe_filter(&self) -> Option<i32> {
        self.age_loe
    }

    /// True when no criterion would produce a predicate.
    pub fn is_unfiltered(&self) -> bool {
        self.username_filter().is_none()
            && self.team_name_filter().is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }

    /// Rejects an age range whose lower bound exceeds its upper bound.
    ///
    /// The repository accepts such a condition and matches nothing; callers at
    /// the service boundary reject it instead.
    pub fn validate(&self) -> Result<(), SearchConditionError> {
        match (self.age_goe, self.age_loe) {
            (Some(goe), Some(loe)) if goe > loe => {
                Err(SearchConditionError::InvertedAgeRange { goe, loe })
            }
            _ => Ok(()),
        }
    }
}

/// Repository query: a condition plus an optional page window.
#[derive(Debug, Clone, Default)]
pub struct MemberListQuery {
    pub condition: MemberSearchCondition,
    pub page: Option<PageRequest>,
}

impl MemberListQuery {
    pub fn new(condition: MemberSearchCondition) -> Self {
        Self {
            condition,
            page: None,
        }
    }

    pub fn paginate(mut self, request: PageRequest) -> Self {
        self.page = Some(request);
        self
    }
}
