//! # sqlchain
//!
//! Compose parameterized SQL from fragments without tracking placeholder indices
//! by hand.
//!
//! Every fragment numbers its own parameters from `@0` (or names them `@name`).
//! Flattening the chain renumbers them into one contiguous `@0, @1, ...` list,
//! expands list arguments into several placeholders, and merges consecutive
//! `WHERE` and `ORDER BY` clauses.
//!
//! ```ignore
//! use sqlchain::{Sql, args};
//!
//! let mut q = Sql::builder();
//! q.append_args("@0 IN (@1) @2", args![20, vec![1, 2, 3], 30]);
//!
//! assert_eq!(q.sql()?, "@0 IN (@1,@2,@3) @4");
//! assert_eq!(q.arguments()?.len(), 5);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): debug events for each build, warnings for appends to a built chain
//! - `postgres`: `tokio_postgres::types::ToSql` for [`Value`] and `$N` rendering

pub mod args;
pub mod config;
pub mod error;
pub mod sql;
pub mod value;

pub use args::Args;
pub use config::{PlaceholderStyle, SqlConfig};
pub use error::{SqlError, SqlResult};
pub use sql::{Built, Fragment, IntoColumns, JoinClause, Sql, sql};
pub use value::{Arg, Value};
