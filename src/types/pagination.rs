use crate::error::{DecodeError, ValidationError};
use serde::{Deserialize, Serialize};

pub const MAX_PER_PAGE: u32 = 50;

/// One page of a list endpoint.
///
/// `data` is required: a body without it, or with a non-array value, fails to
/// decode instead of yielding an empty page. A page whose bookkeeping does not
/// add up (see [`RetrieveAll::check`]) fails to decode as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawRetrieveAll<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct RetrieveAll<T> {
    pub livemode: bool,
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub last_page: u32,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub total: u64,
}

/// Wire shape of [`RetrieveAll`] before its invariants are checked.
#[derive(Deserialize)]
struct RawRetrieveAll<T> {
    livemode: bool,
    current_page: u32,
    data: Vec<T>,
    first_page_url: String,
    last_page: u32,
    last_page_url: String,
    next_page_url: Option<String>,
    path: String,
    per_page: u32,
    prev_page_url: Option<String>,
    total: u64,
}

impl<T> TryFrom<RawRetrieveAll<T>> for RetrieveAll<T> {
    type Error = String;

    fn try_from(raw: RawRetrieveAll<T>) -> Result<Self, Self::Error> {
        let page = RetrieveAll {
            livemode: raw.livemode,
            current_page: raw.current_page,
            data: raw.data,
            first_page_url: raw.first_page_url,
            last_page: raw.last_page,
            last_page_url: raw.last_page_url,
            next_page_url: raw.next_page_url,
            path: raw.path,
            per_page: raw.per_page,
            prev_page_url: raw.prev_page_url,
            total: raw.total,
        };
        page.check().map_err(|err| format!("{}: {}", err.path, err.message))?;
        Ok(page)
    }
}

impl<T> RetrieveAll<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some()
    }

    pub fn has_prev_page(&self) -> bool {
        self.prev_page_url.is_some()
    }

    /// Checks the envelope's own bookkeeping; decoding runs this too.
    pub fn check(&self) -> Result<(), DecodeError> {
        if self.data.len() > self.per_page as usize {
            return Err(DecodeError::new(
                "data",
                format!(
                    "page holds {} items but per_page is {}",
                    self.data.len(),
                    self.per_page
                ),
            ));
        }
        if self.total == 0 && !self.data.is_empty() {
            return Err(DecodeError::new(
                "data",
                format!("total is 0 but page holds {} items", self.data.len()),
            ));
        }
        if self.total > 0 && (self.current_page < 1 || self.current_page > self.last_page) {
            return Err(DecodeError::new(
                "current_page",
                format!(
                    "current_page {} is outside 1..={}",
                    self.current_page, self.last_page
                ),
            ));
        }
        Ok(())
    }
}

impl<T> IntoIterator for RetrieveAll<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RetrieveAll<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Params for the page after `page`, or `None` on the last page.
    pub fn next<T>(&self, page: &RetrieveAll<T>) -> Option<Self> {
        if !page.has_next_page() || page.current_page >= page.last_page {
            return None;
        }
        Some(Self {
            per_page: self.per_page.or(Some(page.per_page)),
            page: Some(page.current_page + 1),
        })
    }

    /// Key/value pairs for a query string, in a stable order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }

    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        if let Some(per_page) = self.per_page {
            if per_page < 1 || per_page > MAX_PER_PAGE {
                return Err(ValidationError::OutOfRange {
                    field: "per_page",
                    min: 1,
                    max: i64::from(MAX_PER_PAGE),
                    value: i64::from(per_page),
                });
            }
        }
        if self.page == Some(0) {
            return Err(ValidationError::OutOfRange {
                field: "page",
                min: 1,
                max: i64::from(u32::MAX),
                value: 0,
            });
        }
        Ok(())
    }
}
