//! DTOs exposed by the member API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::page::PageRequest;
use crate::domain::search::MemberSearchCondition;

/// Query string accepted by the `/api/*/members` endpoints.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchParams {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    /// Zero-based page number.
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub size: Option<usize>,
}

impl MemberSearchParams {
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    /// Window for these params. Fails when `size` exceeds `max_size` or the
    /// offset cannot be bound as an SQL integer.
    pub fn page_request(
        &self,
        default_size: usize,
        max_size: usize,
    ) -> Result<PageRequest, String> {
        let size = self.size.unwrap_or(default_size);
        if size > max_size {
            return Err(format!("page size must not exceed {max_size}"));
        }
        let page = self.page.unwrap_or(0);
        PageRequest::of(page, size)
            .filter(|request| i64::try_from(request.offset).is_ok())
            .ok_or_else(|| format!("page {page} is out of range"))
    }
}

/// JSON body returned with 4xx/5xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
