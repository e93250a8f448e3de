//! PageRequest - Which slice of an ordered collection to read
//!
//! Zero-based page number, page size and optional ordering. The results come
//! back as `models::Page`.

use crate::domain::DomainError;

/// Column a page is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Ordering applied before slicing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Parses `field` or `field,direction`, e.g. `name,desc`
impl std::str::FromStr for Sort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);

        let field = match parts.next().map(str::to_lowercase).as_deref() {
            Some("id") => SortField::Id,
            Some("name") => SortField::Name,
            _ => {
                return Err(DomainError::InvalidPagination(format!(
                    "Unknown sort field: {}",
                    s
                )))
            }
        };

        let direction = match parts.next().map(str::to_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(DomainError::InvalidPagination(format!(
                    "Unknown sort direction: {}",
                    other
                )))
            }
        };

        if parts.next().is_some() {
            return Err(DomainError::InvalidPagination(format!(
                "Malformed sort: {}",
                s
            )));
        }

        Ok(Self { field, direction })
    }
}

/// Requested slice: zero-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_offset: i64,
    pub page_size: i64,
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// Validate and build a page request
    pub fn new(page_offset: i64, page_size: i64) -> Result<Self, DomainError> {
        if page_size <= 0 {
            return Err(DomainError::InvalidPagination(format!(
                "Page size must be greater than zero, got {}",
                page_size
            )));
        }
        if page_offset < 0 {
            return Err(DomainError::InvalidPagination(format!(
                "Page offset must not be negative, got {}",
                page_offset
            )));
        }

        Ok(Self {
            page_offset,
            page_size,
            sort: None,
        })
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Re-check bounds for requests built by hand instead of through `new`
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::new(self.page_offset, self.page_size).map(|_| ())
    }

    /// Number of rows preceding this page
    pub fn skip(&self) -> Result<i64, DomainError> {
        self.page_offset
            .checked_mul(self.page_size)
            .ok_or_else(|| DomainError::InvalidPagination("Page offset out of range".to_string()))
    }
}
