//! Resource syncer interface driven by the host platform

use async_trait::async_trait;

use crate::error::Result;

use super::resource::{Entitlement, Grant, Resource, ResourceId, ResourceType};

/// Opaque continuation token; empty means "first page" on input and
/// "no more pages" on output
pub type PageToken = String;

/// One page of results plus the opaque token for the next page
///
/// An empty `next_token` means there are no more pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: PageToken,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: impl Into<String>) -> Self {
        Self {
            items,
            next_token: next_token.into(),
        }
    }

    /// Final page with no continuation
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, String::new())
    }

    pub fn empty() -> Self {
        Self::last(Vec::new())
    }

    pub fn has_next(&self) -> bool {
        !self.next_token.is_empty()
    }
}

/// Produces resources, entitlements and grants for one resource type
///
/// Every method takes the token returned by the previous page ("" for the
/// first page) and is called repeatedly until an empty token comes back.
#[async_trait]
pub trait ResourceSyncer: Send + Sync {
    fn resource_type(&self) -> &'static ResourceType;

    async fn list(&self, parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>>;

    async fn entitlements(&self, resource: &Resource, token: &str) -> Result<Page<Entitlement>>;

    async fn grants(&self, resource: &Resource, token: &str) -> Result<Page<Grant>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_tokens() {
        let page = Page::new(vec![1, 2], "next");
        assert!(page.has_next());
        assert!(!Page::last(vec![3]).has_next());
        assert!(Page::<i32>::empty().items.is_empty());
    }
}
