//! Page - One slice of results plus total-count metadata
//!
//! Produced by `ClientRepository::find_all_paged` for a `PageRequest`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Client, PageRequest};
use crate::models::ClientResponse;

/// One page of results plus total-count metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[aliases(ClientPage = Page<Client>, ClientResponsePage = Page<ClientResponse>)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_count: i64) -> Self {
        Self {
            items,
            page_number: request.page_offset,
            page_size: request.page_size,
            total_count,
        }
    }

    /// Transform each item, keeping the paging metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}
