//! Course listing queries
//!
//! Parses the query string of the public course listing into filters, sort
//! keys, paging and field selection. The repository turns a [`CourseQuery`]
//! into SQL.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    constants::{DEFAULT_COURSE_SORT, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
};

/// Parameters with a fixed meaning; every other key is a field filter
const RESERVED_PARAMS: &[&str] = &["select", "sort", "page", "limit"];

/// Course attributes addressable from the listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Title,
    Weeks,
    Tuition,
    MinimumSkill,
    ScholarshipAvailable,
    CreatedAt,
}

impl CourseField {
    /// Resolve the JSON name of a field
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(Self::Title),
            "weeks" => Some(Self::Weeks),
            "tuition" => Some(Self::Tuition),
            "minimumSkill" => Some(Self::MinimumSkill),
            "scholarshipAvailable" => Some(Self::ScholarshipAvailable),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Fully qualified column in the course listing query
    pub fn column(&self) -> &'static str {
        match self {
            Self::Title => "c.title",
            Self::Weeks => "c.weeks",
            Self::Tuition => "c.tuition",
            Self::MinimumSkill => "c.minimum_skill",
            Self::ScholarshipAvailable => "c.scholarship_available",
            Self::CreatedAt => "c.created_at",
        }
    }

    fn supports(&self, op: FilterOp) -> bool {
        match self {
            Self::Weeks | Self::Tuition => true,
            Self::MinimumSkill => matches!(op, FilterOp::Eq | FilterOp::In),
            Self::Title | Self::ScholarshipAvailable => op == FilterOp::Eq,
            Self::CreatedAt => false,
        }
    }
}

/// Comparison operator of a field filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FilterOp {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// SQL operator for scalar comparisons (`In` is rendered as `= ANY(..)`)
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Eq | Self::In => " = ",
            Self::Gt => " > ",
            Self::Gte => " >= ",
            Self::Lt => " < ",
            Self::Lte => " <= ",
        }
    }
}

/// Typed right-hand side of a filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i32),
    Text(String),
    Bool(bool),
    IntList(Vec<i32>),
    TextList(Vec<String>),
}

/// A single `field[op]=value` condition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: CourseField,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl FieldFilter {
    fn parse(key: &str, raw: &str) -> AppResult<Self> {
        let (name, op) = match key.split_once('[') {
            Some((name, rest)) => {
                let op = rest
                    .strip_suffix(']')
                    .and_then(FilterOp::from_key)
                    .ok_or_else(|| AppError::InvalidInput(format!("Invalid filter {}", key)))?;
                (name, op)
            }
            None => (key, FilterOp::Eq),
        };

        let field = CourseField::from_key(name)
            .filter(|f| f.supports(op))
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid filter {}", key)))?;

        let invalid = || AppError::InvalidInput(format!("Invalid value for {}", key));
        let value = match (field, op) {
            (CourseField::Weeks | CourseField::Tuition, FilterOp::In) => FilterValue::IntList(
                split_list(raw)
                    .map(|v| v.parse().map_err(|_| invalid()))
                    .collect::<AppResult<_>>()?,
            ),
            (CourseField::Weeks | CourseField::Tuition, _) => {
                FilterValue::Int(raw.trim().parse().map_err(|_| invalid())?)
            }
            (CourseField::ScholarshipAvailable, _) => {
                FilterValue::Bool(raw.trim().parse().map_err(|_| invalid())?)
            }
            (_, FilterOp::In) => {
                FilterValue::TextList(split_list(raw).map(str::to_string).collect())
            }
            _ => FilterValue::Text(raw.to_string()),
        };

        Ok(Self { field, op, value })
    }
}

/// One ordering criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: CourseField,
    pub descending: bool,
}

impl SortKey {
    fn parse_list(raw: &str) -> AppResult<Vec<Self>> {
        split_list(raw)
            .map(|part| {
                let (name, descending) = match part.strip_prefix('-') {
                    Some(name) => (name, true),
                    None => (part, false),
                };
                CourseField::from_key(name)
                    .map(|field| SortKey { field, descending })
                    .ok_or_else(|| AppError::InvalidInput(format!("Invalid sort field {}", name)))
            })
            .collect()
    }
}

/// Filtering, ordering and paging of the course listing
#[derive(Debug, Clone, PartialEq)]
pub struct CourseQuery {
    pub filters: Vec<FieldFilter>,
    pub sort: Vec<SortKey>,
    pub page: u32,
    pub limit: u32,
    pub select: Option<Vec<String>>,
}

impl Default for CourseQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort: vec![SortKey {
                field: CourseField::CreatedAt,
                descending: true,
            }],
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            select: None,
        }
    }
}

impl CourseQuery {
    /// Build a query from raw query-string parameters
    pub fn from_params(params: &HashMap<String, String>) -> AppResult<Self> {
        let page = match params.get("page") {
            Some(raw) => parse_number(raw, "page")?.max(1),
            None => 1,
        };
        let limit = match params.get("limit") {
            Some(raw) => parse_number(raw, "limit")?.clamp(1, MAX_PAGE_SIZE),
            None => DEFAULT_PAGE_SIZE,
        };

        let mut sort = SortKey::parse_list(
            params
                .get("sort")
                .map(String::as_str)
                .unwrap_or(DEFAULT_COURSE_SORT),
        )?;
        if sort.is_empty() {
            sort = SortKey::parse_list(DEFAULT_COURSE_SORT)?;
        }

        let select = params
            .get("select")
            .map(|raw| split_list(raw).map(str::to_string).collect::<Vec<_>>())
            .filter(|fields| !fields.is_empty());

        let mut filters = params
            .iter()
            .filter(|(key, _)| !RESERVED_PARAMS.contains(&key.as_str()))
            .map(|(key, value)| FieldFilter::parse(key, value))
            .collect::<AppResult<Vec<_>>>()?;
        // HashMap iteration order is arbitrary
        filters.sort_by(|a, b| a.field.column().cmp(b.field.column()));

        Ok(Self {
            filters,
            sort,
            page,
            limit,
            select,
        })
    }

    /// Number of rows skipped before this page
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// Links to the neighbouring pages given the total number of matches
    pub fn pagination(&self, total: i64) -> Pagination {
        let start = self.offset();
        let end = start + i64::from(self.limit);

        Pagination {
            next: (end < total).then(|| PageRef {
                page: self.page + 1,
                limit: self.limit,
            }),
            prev: (start > 0).then(|| PageRef {
                page: self.page - 1,
                limit: self.limit,
            }),
        }
    }

    /// Keep only the selected keys (and `id`) of a serialized course
    pub fn project(&self, value: serde_json::Value) -> serde_json::Value {
        match (&self.select, value) {
            (Some(fields), serde_json::Value::Object(mut object)) => {
                object.retain(|key, _| key == "id" || fields.iter().any(|f| f == key));
                serde_json::Value::Object(object)
            }
            (_, value) => value,
        }
    }
}

/// Previous/next page references
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRef {
    pub page: u32,
    pub limit: u32,
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(raw: &str, name: &str) -> AppResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid value for {}", name)))
}
