//! Pagination options and the shared list envelope

use serde::{Deserialize, Serialize};

/// Query options for a listing request
///
/// A request is either a fresh query (`top`, `skip`, `order_by`, `filter`)
/// or a continuation. When `next_link` is set it is used verbatim and every
/// other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    pub top: u32,
    pub skip: u32,
    pub order_by: Option<String>,
    pub filter: Option<String>,
    pub next_link: Option<String>,
}

impl PaginationOptions {
    /// Fresh query returning at most `top` records
    pub fn with_top(top: u32) -> Self {
        Self {
            top,
            ..Self::default()
        }
    }

    /// Continuation of a previous listing
    pub fn continuation(next_link: impl Into<String>) -> Self {
        Self {
            next_link: Some(next_link.into()),
            ..Self::default()
        }
    }

    /// Options for `top` records, resuming from `token` when it is non-empty
    pub fn resume(top: u32, token: &str) -> Self {
        if token.is_empty() {
            Self::with_top(top)
        } else {
            Self::continuation(token)
        }
    }

    /// Continuation link, if this is a continuation request
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|link| !link.is_empty())
    }

    /// Options for the page after `response`, or `None` at end of stream
    pub fn advance<R: PaginatedResponse>(&self, response: &R) -> Option<Self> {
        response.next_link().map(|link| {
            let mut next = self.clone();
            next.next_link = Some(link.to_string());
            next
        })
    }
}

/// Trait for list envelopes that can point at a following page
pub trait PaginatedResponse {
    type Item;

    /// Server-issued link to the next page; `None` when this is the last page
    fn next_link(&self) -> Option<&str>;

    /// Consume self and return the items of this page
    fn into_items(self) -> Vec<Self::Item>;
}

/// List envelope shared by every AvaTax listing endpoint
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ListResponse<T> {
    #[serde(rename = "@recordsetCount", default)]
    pub recordset_count: u64,
    #[serde(default)]
    pub value: Vec<T>,
    #[serde(rename = "@nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    #[serde(rename = "pageKey", default, skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
}

impl<T> PaginatedResponse for ListResponse<T> {
    type Item = T;

    fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|link| !link.is_empty())
    }

    fn into_items(self) -> Vec<T> {
        self.value
    }
}
