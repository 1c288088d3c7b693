//! Fragment chains.
//!
//! A chain is built from fragments, each with its own local parameters (`@0`,
//! `@1`, `@name`). Flattening produces one SQL string whose `@N` placeholders
//! are renumbered in order of appearance, plus the matching argument list.
//!
//! # Example
//!
//! ```ignore
//! use sqlchain::{Sql, args};
//!
//! let mut q = Sql::builder();
//! q.select("*").from("articles");
//! q.left_join("comments").on("articles.article_id = comments.article_id");
//! if let Some(author) = author {
//!     q.where_args("articles.author = @0", author);
//! }
//! q.where_args("comments.rating IN (@ratings)", args![ratings = vec![4, 5]]);
//! q.order_by("articles.created_at DESC");
//!
//! let (sql, args) = (q.sql()?, q.arguments()?);
//! ```

mod builder;
mod clause;
mod fragment;
mod substitute;


pub use builder::{Built, Sql};
pub use clause::{IntoColumns, JoinClause};
pub use fragment::Fragment;

/// Start a chain whose root carries `template`.
pub fn sql(template: impl Into<String>) -> Sql {
    Sql::new(template)
}
