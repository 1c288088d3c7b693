use super::fragment::Fragment;
use super::substitute;
use crate::args::Args;
use crate::config::{PlaceholderStyle, SqlConfig};
use crate::error::SqlResult;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

const WHERE_PREFIX: &str = "WHERE ";
const ORDER_BY_PREFIX: &str = "ORDER BY ";

/// The flattened result of a chain: SQL text plus positionally aligned arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Built {
    /// SQL with `@0, @1, ...` placeholders in order of appearance.
    pub sql: String,
    /// `args[n]` binds placeholder `@n`.
    pub args: Vec<Value>,
}

/// A chain of SQL fragments that flattens into one parameterized statement.
///
/// Each fragment numbers its own parameters from `@0` (or names them). Building
/// walks the chain once, renumbers every placeholder into a single list, merges
/// consecutive `WHERE`/`ORDER BY` fragments, and caches the result.
///
/// # Example
/// ```ignore
/// use sqlchain::{Sql, args};
///
/// let mut q = Sql::builder();
/// q.select(["id", "name"]).from("users");
/// q.where_args("status = @0", "active");
/// q.where_args("id IN (@ids)", args![ids = vec![1, 2, 3]]);
///
/// assert_eq!(
///     q.sql()?,
///     "SELECT id, name\nFROM users\nWHERE (status = @0)\nAND (id IN (@1,@2,@3))"
/// );
/// ```
#[must_use]
#[derive(Debug)]
pub struct Sql {
    fragments: Vec<Fragment>,
    built: OnceCell<Built>,
    config: SqlConfig,
    tag: Option<String>,
}

impl Sql {
    /// Start an empty chain (the root is a no-op fragment).
    pub fn builder() -> Self {
        Self::from_root(Fragment::empty())
    }

    /// Start a chain whose root carries `template`.
    pub fn new(template: impl Into<String>) -> Self {
        Self::from_root(Fragment::new(template))
    }

    /// Start a chain whose root carries `template` and its arguments.
    pub fn with_args(template: impl Into<String>, args: impl Into<Args>) -> Self {
        Self::from_root(Fragment::with_args(template, args))
    }

    fn from_root(root: Fragment) -> Self {
        Self {
            fragments: vec![root],
            built: OnceCell::new(),
            config: SqlConfig::default(),
            tag: None,
        }
    }

    /// Replace this chain's rendering/logging configuration.
    pub fn config(&mut self, config: SqlConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Associate a tag for observability; it is attached to build log events.
    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = Some(tag.into());
        self
    }

    /// Consuming counterpart of [`Sql::tag`].
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// The observability tag, if one was set.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Append a fragment with no arguments.
    pub fn append(&mut self, template: impl Into<String>) -> &mut Self {
        self.append_fragment(Fragment::new(template))
    }

    /// Append a fragment with arguments.
    ///
    /// `args` may be a single value, a `Vec`/array of values, or an [`Args`] set
    /// with named entries.
    pub fn append_args(&mut self, template: impl Into<String>, args: impl Into<Args>) -> &mut Self {
        self.append_fragment(Fragment::with_args(template, args))
    }

    /// Append a prebuilt fragment at the end of the chain.
    ///
    /// Appending after the chain has been built does not invalidate the cached
    /// result; the new fragment is ignored by `sql()`/`arguments()` and only a
    /// `debug` event records it.
    pub fn append_fragment(&mut self, fragment: Fragment) -> &mut Self {
        if self.is_built() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "sqlchain.sql",
                tag = self.tag_name().unwrap_or("-"),
                template = fragment.template().unwrap_or(""),
                "fragment appended after build; cached SQL will not include it"
            );
        }
        self.fragments.push(fragment);
        self
    }

    /// Append every fragment of `other`, root included, in order.
    ///
    /// `other`'s tag is adopted when this chain has none.
    pub fn append_sql(&mut self, other: Sql) -> &mut Self {
        if self.tag.is_none() {
            self.tag = other.tag;
        }
        for fragment in other.fragments {
            self.append_fragment(fragment);
        }
        self
    }

    /// Fragments in chain order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments, the root included. A fresh [`Sql::builder`] reports 1.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// `true` when no fragment contributes any text.
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(Fragment::is_noop)
    }

    /// `true` once the flattened result has been cached.
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// Flatten the chain, or return the cached result.
    ///
    /// The first successful call fixes the result for the life of the chain.
    /// Failures are not cached.
    pub fn build(&self) -> SqlResult<&Built> {
        if let Some(built) = self.built.get() {
            return Ok(built);
        }

        let built = flatten(&self.fragments)?;
        self.log_built(&built);
        Ok(self.built.get_or_init(|| built))
    }

    /// Final SQL text with `@N` placeholders.
    pub fn sql(&self) -> SqlResult<&str> {
        Ok(&self.build()?.sql)
    }

    /// Arguments aligned with the placeholders returned by [`Sql::sql`].
    pub fn arguments(&self) -> SqlResult<&[Value]> {
        Ok(&self.build()?.args)
    }

    /// Final SQL in the configured placeholder style.
    pub fn render(&self) -> SqlResult<String> {
        self.render_as(self.config.placeholder_style)
    }

    /// Final SQL in an explicit placeholder style.
    pub fn render_as(&self, style: PlaceholderStyle) -> SqlResult<String> {
        Ok(substitute::render(&self.build()?.sql, style))
    }

    /// Consume the chain and return the flattened statement.
    pub fn into_built(self) -> SqlResult<Built> {
        match self.built.into_inner() {
            Some(built) => Ok(built),
            None => flatten(&self.fragments),
        }
    }

    #[cfg(feature = "tracing")]
    fn log_built(&self, built: &Built) {
        tracing::debug!(
            target: "sqlchain.sql",
            tag = self.tag_name().unwrap_or("-"),
            fragments = self.fragments.len(),
            param_count = built.args.len(),
            sql = %self.logged_sql(&built.sql),
            "built sql chain"
        );
    }

    /// SQL as it appears in log events, cut to `max_logged_sql_length` bytes.
    #[cfg(feature = "tracing")]
    pub(crate) fn logged_sql(&self, sql: &str) -> String {
        match self.config.max_logged_sql_length {
            Some(max) if sql.len() > max => {
                format!("{}...", crate::config::truncate_sql_bytes(sql, max))
            }
            _ => sql.to_string(),
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn log_built(&self, _built: &Built) {}
}

#[cfg(feature = "postgres")]
impl Sql {
    /// Final SQL with `$1, $2, ...` placeholders.
    pub fn to_pg_sql(&self) -> SqlResult<String> {
        self.render_as(PlaceholderStyle::Dollar)
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> SqlResult<Vec<&(dyn tokio_postgres::types::ToSql + Sync)>> {
        Ok(self
            .arguments()?
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect())
    }
}

/// Walk the chain left to right, substituting and merging clauses.
fn flatten(fragments: &[Fragment]) -> SqlResult<Built> {
    let mut sql = String::new();
    let mut args = Vec::new();
    let mut prev: Option<&Fragment> = None;

    for fragment in fragments {
        if let Some(template) = fragment.template().filter(|t| !t.is_empty()) {
            if !sql.is_empty() {
                sql.push('\n');
            }

            let text = match substitute::substitute(template, fragment.args(), &mut args) {
                Ok(text) => text,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(target: "sqlchain.sql", error = %err, "parameter substitution failed");
                    return Err(err);
                }
            };

            sql.push_str(&merge_clause(prev, fragment, text));
        }
        prev = Some(fragment);
    }

    Ok(Built { sql, args })
}

/// Turn a repeated `WHERE`/`ORDER BY` into its continuation form.
///
/// Prefixes are detected on raw templates; the rewrite applies to substituted text.
fn merge_clause(prev: Option<&Fragment>, current: &Fragment, text: String) -> String {
    let Some(prev) = prev else {
        return text;
    };

    if prev.starts_with_keyword(WHERE_PREFIX) && current.starts_with_keyword(WHERE_PREFIX) {
        return format!("AND {}", &text[WHERE_PREFIX.len()..]);
    }
    if prev.starts_with_keyword(ORDER_BY_PREFIX) && current.starts_with_keyword(ORDER_BY_PREFIX) {
        return format!(", {}", &text[ORDER_BY_PREFIX.len()..]);
    }
    text
}
