/// Placeholder syntax used when rendering a flattened chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `@0, @1, ...` (0-based). This is what flattening produces.
    #[default]
    At,
    /// `$1, $2, ...` (1-based), as used by Postgres drivers.
    Dollar,
    /// `?, ?, ...`, as used by SQLite/MySQL drivers.
    Question,
}

/// Per-chain configuration for rendering and logging.
///
/// # Example
/// ```ignore
/// use sqlchain::{PlaceholderStyle, Sql, SqlConfig};
///
/// let mut q = Sql::builder();
/// q.config(SqlConfig::new().placeholder_style(PlaceholderStyle::Dollar));
/// ```
#[derive(Debug, Clone)]
pub struct SqlConfig {
    /// Style used by [`crate::Sql::render`].
    pub placeholder_style: PlaceholderStyle,
    /// Truncate SQL in log events (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            placeholder_style: PlaceholderStyle::At,
            max_logged_sql_length: Some(200),
        }
    }
}

impl SqlConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style used by `render()`.
    pub fn placeholder_style(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
