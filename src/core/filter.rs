//! Filter engine.
//!
//! Criteria are immutable values built by the caller. A record passes when
//! every constraint holds; an unset constraint always passes. Output keeps
//! the input order.

use crate::core::join::{JoinedAttendance, JoinedLog};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceStatus, TxStatus};
use crate::utils::date::parse_date;
use crate::utils::range::parse_range;
use chrono::NaiveDate;
use std::str::FromStr;

pub const ALL: &str = "all";

/// Enum constraint with the `all` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn admits(&self, status: Option<&S>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == Some(wanted),
        }
    }
}

impl<S: From<String>> FromStr for StatusFilter<S> {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::InvalidStatus(s.to_string()));
        }
        if s.eq_ignore_ascii_case(ALL) {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Only(S::from(s.to_string())))
        }
    }
}

/// Tri-state filter on an optional field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    All,
    Present,
    Absent,
}

impl Presence {
    pub fn admits(self, present: bool) -> bool {
        match self {
            Presence::All => true,
            Presence::Present => present,
            Presence::Absent => !present,
        }
    }
}

impl FromStr for Presence {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Presence::All),
            "onchain" | "on-chain" | "present" => Ok(Presence::Present),
            "offchain" | "off-chain" | "absent" => Ok(Presence::Absent),
            other => Err(AppError::InvalidPresence(other.to_string())),
        }
    }
}

/// Inclusive date range; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// A record without a usable date only passes an unbounded range.
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(d) = date else {
            return false;
        };
        self.start.is_none_or(|s| d >= s) && self.end.is_none_or(|e| d <= e)
    }

    /// Build from CLI-style inputs: a `--range` expression, or explicit
    /// `YYYY-MM-DD` bounds. Explicit bounds override the range side they name.
    pub fn from_inputs(
        range: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<Self> {
        let mut out = match range {
            Some(r) if !r.eq_ignore_ascii_case(ALL) => {
                let (s, e) = parse_range(r)?;
                DateRange::new(Some(s), Some(e))
            }
            _ => DateRange::default(),
        };

        if let Some(f) = from {
            out.start = Some(parse_date(f).ok_or_else(|| AppError::InvalidDate(f.to_string()))?);
        }
        if let Some(t) = to {
            out.end = Some(parse_date(t).ok_or_else(|| AppError::InvalidDate(t.to_string()))?);
        }

        if let (Some(s), Some(e)) = (out.start, out.end)
            && s > e
        {
            return Err(AppError::InvalidRange(format!("{s} is after {e}")));
        }
        Ok(out)
    }
}

/// Case-insensitive substring search; an empty term matches everything.
///
/// The term is trimmed first, so a whitespace-only term is empty and
/// `" 0x"` looks for `"0x"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when the term occurs in any of `fields`.
    pub fn matches_any<'f, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = Option<&'f str>>,
    {
        self.is_empty()
            || fields
                .into_iter()
                .flatten()
                .any(|f| f.to_lowercase().contains(&self.needle))
    }
}

fn contains_ci(haystack: Option<&str>, needle: &Option<String>) -> bool {
    match needle {
        None => true,
        Some(n) => TextSearch::new(n).matches_any([haystack]),
    }
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AttendanceCriteria {
    pub employee: Option<String>,
    pub department: Option<String>,
    pub dates: DateRange,
    pub status: StatusFilter<AttendanceStatus>,
    pub on_chain: Presence,
    pub search: TextSearch,
}

impl AttendanceCriteria {
    pub fn with_employee(mut self, did: impl Into<String>) -> Self {
        self.employee = Some(did.into());
        self
    }

    pub fn with_department(mut self, id: impl Into<String>) -> Self {
        self.department = Some(id.into());
        self
    }

    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_status(mut self, status: StatusFilter<AttendanceStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_on_chain(mut self, on_chain: Presence) -> Self {
        self.on_chain = on_chain;
        self
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = TextSearch::new(term);
        self
    }

    pub fn admits(&self, row: &JoinedAttendance<'_>) -> bool {
        let r = row.record;

        self.employee
            .as_deref()
            .is_none_or(|did| r.employee_did == did)
            && self
                .department
                .as_deref()
                .is_none_or(|id| row.department_id() == Some(id))
            && self.dates.admits(r.canonical_date())
            && self.status.admits(r.status.as_ref())
            && self.on_chain.admits(r.is_on_chain())
            && self.search.matches_any([
                Some(r.employee_did.as_str()),
                row.employee.and_then(|e| e.name.as_deref()),
                r.transaction_hash.as_deref(),
            ])
    }
}

pub fn filter_attendance<'a>(
    rows: &[JoinedAttendance<'a>],
    criteria: &AttendanceCriteria,
) -> Vec<JoinedAttendance<'a>> {
    rows.iter().filter(|r| criteria.admits(r)).copied().collect()
}

// ---------------------------------------------------------------------------
// Smart-contract logs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct LogCriteria {
    pub search: TextSearch,
    pub status: StatusFilter<TxStatus>,
    pub contract: Option<String>,
    pub function: Option<String>,
    pub dates: DateRange,
}

impl LogCriteria {
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = TextSearch::new(term);
        self
    }

    pub fn with_status(mut self, status: StatusFilter<TxStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_contract(mut self, fragment: impl Into<String>) -> Self {
        self.contract = Some(fragment.into());
        self
    }

    pub fn with_function(mut self, fragment: impl Into<String>) -> Self {
        self.function = Some(fragment.into());
        self
    }

    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    pub fn admits(&self, row: &JoinedLog<'_>) -> bool {
        let l = row.log;

        self.search.matches_any([
            l.transaction_hash.as_deref(),
            l.contract_address.as_deref(),
            l.function_name.as_deref(),
        ]) && self.status.admits(l.status.as_ref())
            && contains_ci(l.contract_address.as_deref(), &self.contract)
            && contains_ci(l.function_name.as_deref(), &self.function)
            && self
                .dates
                .admits(l.canonical_timestamp().map(|ts| ts.date()))
    }
}

pub fn filter_logs<'a>(rows: &[JoinedLog<'a>], criteria: &LogCriteria) -> Vec<JoinedLog<'a>> {
    rows.iter().filter(|r| criteria.admits(r)).copied().collect()
}
