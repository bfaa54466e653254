//! Translation of inbound requests into PostgREST filter expressions.
//!
//! | request | query | filter |
//! |---|---|---|
//! | `GET /cars` | `ListAll` | `select=*` |
//! | `GET /cars?search=Range Rover` | `ListFiltered` | `or=(name.ilike.*Range%Rover*,brand.ilike.*Range%Rover*)` |
//! | `GET /cars/3` | `ById` | `id=eq.3` |
//!
//! A [`Filter`] is a single query-string key/value pair. It is URL-encoded by
//! the transport, so nothing in a search term can add or break query
//! parameters. Inside the pattern, only spaces are rewritten: `*`, `%`, `,`
//! and parentheses from the user reach the store as typed.

use std::fmt;

use crate::error::{Error, Result};

/// PostgREST's multi-character wildcard inside an `ilike` pattern body.
const WILDCARD: &str = "%";

/// Columns a free-text search matches against, OR'd together.
const SEARCH_COLUMNS: [&str; 2] = ["name", "brand"];

/// What a single inbound request asks of the backing store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    ListAll,
    ListFiltered { term: String },
    ById { id: String },
}

impl Query {
    /// A collection listing. An absent or empty term selects everything.
    pub fn list(search: Option<&str>) -> Self {
        match search {
            Some(term) if !term.is_empty() => Self::ListFiltered { term: term.to_owned() },
            _ => Self::ListAll,
        }
    }

    /// A point lookup. The empty identifier is rejected here, before anything
    /// is sent upstream.
    pub fn by_id(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::InvalidArgument("identifier required"));
        }
        Ok(Self::ById { id: id.to_owned() })
    }

    pub fn filter(&self) -> Filter {
        match self {
            Self::ListAll => Filter::new("select", "*"),
            Self::ListFiltered { term } => {
                let pattern = term.replace(' ', WILDCARD);
                let predicates = SEARCH_COLUMNS
                    .iter()
                    .map(|col| format!("{col}.ilike.*{pattern}*"))
                    .collect::<Vec<_>>()
                    .join(",");
                Filter::new("or", format!("({predicates})"))
            }
            Self::ById { id } => Filter::new("id", format!("eq.{id}")),
        }
    }
}

/// One PostgREST query-string parameter, e.g. `id=eq.3`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub key: &'static str,
    pub value: String,
}

impl Filter {
    fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }
}

/// The unencoded `key=value` form, as PostgREST documents it.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
