//! Keyword-prefixed convenience constructors.

use super::builder::Sql;
use crate::args::Args;

/// One or many column/table names, joined with `, `.
///
/// An empty sequence joins to `""`, so `order_by(Vec::<&str>::new())` appends a
/// bare `ORDER BY `. Skip the call when there is nothing to list.
pub trait IntoColumns {
    fn into_columns(self) -> String;
}

impl IntoColumns for &str {
    fn into_columns(self) -> String {
        self.to_string()
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> String {
        self
    }
}

impl<S: AsRef<str>> IntoColumns for Vec<S> {
    fn into_columns(self) -> String {
        join(self.iter().map(AsRef::as_ref))
    }
}

impl<S: AsRef<str>> IntoColumns for &[S] {
    fn into_columns(self) -> String {
        join(self.iter().map(AsRef::as_ref))
    }
}

impl<S: AsRef<str>, const N: usize> IntoColumns for [S; N] {
    fn into_columns(self) -> String {
        join(self.iter().map(AsRef::as_ref))
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

impl Sql {
    /// Append `SELECT <columns>`.
    pub fn select(&mut self, columns: impl IntoColumns) -> &mut Self {
        self.append(format!("SELECT {}", columns.into_columns()))
    }

    /// Append `FROM <tables>`.
    pub fn from(&mut self, tables: impl IntoColumns) -> &mut Self {
        self.append(format!("FROM {}", tables.into_columns()))
    }

    /// Append `GROUP BY <columns>`.
    pub fn group_by(&mut self, columns: impl IntoColumns) -> &mut Self {
        self.append(format!("GROUP BY {}", columns.into_columns()))
    }

    /// Append `ORDER BY <columns>`. A directly following `order_by` continues the list.
    pub fn order_by(&mut self, columns: impl IntoColumns) -> &mut Self {
        self.append(format!("ORDER BY {}", columns.into_columns()))
    }

    /// Append `WHERE (<condition>)`. A directly following `where_` becomes `AND (...)`.
    pub fn where_(&mut self, condition: &str) -> &mut Self {
        self.where_args(condition, Args::new())
    }

    /// Append `WHERE (<condition>)` with arguments for the condition's placeholders.
    pub fn where_args(&mut self, condition: &str, args: impl Into<Args>) -> &mut Self {
        self.append_args(format!("WHERE ({condition})"), args)
    }

    /// Append `INNER JOIN <table>`; finish with [`JoinClause::on`].
    pub fn inner_join(&mut self, table: &str) -> JoinClause<'_> {
        self.join("INNER JOIN ", table)
    }

    /// Append `LEFT JOIN <table>`; finish with [`JoinClause::on`].
    pub fn left_join(&mut self, table: &str) -> JoinClause<'_> {
        self.join("LEFT JOIN ", table)
    }

    fn join(&mut self, join_type: &str, table: &str) -> JoinClause<'_> {
        self.append(format!("{join_type}{table}"));
        JoinClause { sql: self }
    }
}

/// A pending join, borrowed from its chain until `on` is called.
#[must_use = "a join needs an ON clause"]
pub struct JoinClause<'a> {
    sql: &'a mut Sql,
}

impl<'a> JoinClause<'a> {
    /// Append `ON <condition>` and return the chain.
    pub fn on(self, condition: &str) -> &'a mut Sql {
        self.on_args(condition, Args::new())
    }

    /// Append `ON <condition>` with arguments and return the chain.
    pub fn on_args(self, condition: &str, args: impl Into<Args>) -> &'a mut Sql {
        self.sql.append_args(format!("ON {condition}"), args)
    }
}
