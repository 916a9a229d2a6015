use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// 1-indexed page selection. A `size` of 0 disables pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Every row, in order
    pub fn all() -> Self {
        Self { page: 1, size: 0 }
    }

    #[track_caller]
    pub fn new(page: u32, size: u32) -> CoreErrorResult<Self> {
        if size > 0 && page == 0 {
            return Err(CoreError::InvalidPage {
                message: "page is 1-indexed and must be at least 1".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self {
            page: page.max(1),
            size,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// `(limit, offset)` when paginated, `None` for "return everything"
    pub fn limit_offset(&self) -> Option<(i64, i64)> {
        if self.size == 0 {
            return None;
        }
        let size = i64::from(self.size);
        let offset = i64::from(self.page.saturating_sub(1)) * size;
        Some((size, offset))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::all()
    }
}
