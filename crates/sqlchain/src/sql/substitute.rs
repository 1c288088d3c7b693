//! Placeholder scanning and rewriting.
//!
//! A token is `@` followed by word characters (`[A-Za-z0-9_]`), where the `@` is
//! not itself preceded by `@`. Runs such as `@@var` or `@@@var` are database
//! variables and pass through untouched.

use crate::args::Args;
use crate::config::PlaceholderStyle;
use crate::error::{SqlError, SqlResult};
use crate::value::{Arg, Value};
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    // `@+` swallows the whole run so `@@var` is seen as one token and skipped.
    TOKEN_RE.get_or_init(|| Regex::new(r"@+[A-Za-z0-9_]+").expect("invalid built-in token regex"))
}

/// Yields `(start, end, name)` for every substitutable token in `text`.
fn tokens(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    token_regex().find_iter(text).filter_map(|m| {
        let token = m.as_str();
        let name = token.trim_start_matches('@');
        (token.len() - name.len() == 1).then_some((m.start(), m.end(), name))
    })
}

fn resolve<'a>(name: &str, template: &str, args: &'a Args) -> SqlResult<&'a Arg> {
    if name.bytes().all(|b| b.is_ascii_digit()) {
        // Indices that overflow usize can never be in range.
        let index = name.parse::<usize>().unwrap_or(usize::MAX);
        args.get(index)
            .ok_or_else(|| SqlError::out_of_range(index, args.positional_len(), template))
    } else {
        args.get_named(name)
            .ok_or_else(|| SqlError::missing_param(name, template))
    }
}

fn push_placeholder(sql: &mut String, index: usize) {
    // Writing to a String cannot fail.
    let _ = write!(sql, "@{index}");
}

/// Rewrite every local token in `template` into global `@N` placeholders.
///
/// Each resolved value is appended to `out`; its position there is the number
/// written into the text. List arguments produce one placeholder per element,
/// joined by `,`. Arguments that no token refers to are never copied.
pub(crate) fn substitute(template: &str, args: &Args, out: &mut Vec<Value>) -> SqlResult<String> {
    let mut sql = String::with_capacity(template.len());
    let mut last = 0;

    for (start, end, name) in tokens(template) {
        sql.push_str(&template[last..start]);
        match resolve(name, template, args)? {
            Arg::Scalar(value) => {
                push_placeholder(&mut sql, out.len());
                out.push(value.clone());
            }
            Arg::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        sql.push(',');
                    }
                    push_placeholder(&mut sql, out.len());
                    out.push(value.clone());
                }
            }
        }
        last = end;
    }

    sql.push_str(&template[last..]);
    Ok(sql)
}

/// Rewrite flattened `@N` placeholders into another driver's syntax.
pub(crate) fn render(sql: &str, style: PlaceholderStyle) -> String {
    if style == PlaceholderStyle::At {
        return sql.to_string();
    }

    let mut out = String::with_capacity(sql.len() + 8);
    let mut last = 0;
    for (start, end, name) in tokens(sql) {
        let Ok(index) = name.parse::<usize>() else {
            continue;
        };
        out.push_str(&sql[last..start]);
        match style {
            PlaceholderStyle::Dollar => {
                let _ = write!(out, "${}", index + 1);
            }
            PlaceholderStyle::Question => out.push('?'),
            PlaceholderStyle::At => push_placeholder(&mut out, index),
        }
        last = end;
    }
    out.push_str(&sql[last..]);
    out
}
