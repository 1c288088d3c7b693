use crate::args::Args;

/// One piece of raw SQL template text plus its local arguments.
///
/// Placeholders in the template (`@0`, `@name`) refer to this fragment's own
/// arguments only; flattening renumbers them into one global list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    template: Option<String>,
    args: Args,
}

impl Fragment {
    /// Fragment with template text and no arguments.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            args: Args::new(),
        }
    }

    /// Fragment with template text and arguments.
    pub fn with_args(template: impl Into<String>, args: impl Into<Args>) -> Self {
        Self {
            template: Some(template.into()),
            args: args.into(),
        }
    }

    /// A no-op fragment. Contributes no text and never merges.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// `true` when the fragment contributes no text.
    pub fn is_noop(&self) -> bool {
        self.template.as_deref().is_none_or(str::is_empty)
    }

    /// Case-insensitive check of the raw template's leading keyword.
    pub(crate) fn starts_with_keyword(&self, keyword: &str) -> bool {
        self.template
            .as_deref()
            .and_then(|t| t.get(..keyword.len()))
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
    }
}

impl From<&str> for Fragment {
    fn from(template: &str) -> Self {
        Fragment::new(template)
    }
}

impl From<String> for Fragment {
    fn from(template: String) -> Self {
        Fragment::new(template)
    }
}
