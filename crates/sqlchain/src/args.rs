//! Fragment-local argument sets.

use crate::value::{Arg, Value};
use std::collections::HashMap;

/// Ordered-and-keyed arguments for a single fragment.
///
/// Positional entries answer `@0`, `@1`, ... and keyed entries answer `@name`.
/// Both kinds can be mixed in one set.
///
/// # Example
/// ```ignore
/// use sqlchain::{Args, args};
///
/// let a = Args::new().push("a1").push(vec![1, 2, 3]).named("name", "n");
/// let b = args!["a1", vec![1, 2, 3]; name = "n"];
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Arg>,
    named: HashMap<String, Arg>,
}

impl Args {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn push(mut self, value: impl Into<Arg>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add (or replace) a keyed argument.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Positional argument at `index`.
    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.positional.get(index)
    }

    /// Keyed argument called `name`.
    pub fn get_named(&self, name: &str) -> Option<&Arg> {
        self.named.get(name)
    }

    /// Number of positional arguments.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// `true` when there are neither positional nor keyed arguments.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl From<Arg> for Args {
    fn from(arg: Arg) -> Self {
        Args::new().push(arg)
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Args::new().push(value)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Args {
    fn from(values: Vec<T>) -> Self {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: HashMap::new(),
        }
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Args {
    fn from(values: [T; N]) -> Self {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: HashMap::new(),
        }
    }
}

impl<K: Into<String>, V: Into<Arg>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Args::new(), |args, (k, v)| args.named(k, v))
    }
}

macro_rules! impl_single {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Args {
                fn from(value: $t) -> Self {
                    Args::new().push(value)
                }
            }
        )*
    };
}

impl_single!(
    bool,
    i16,
    i32,
    i64,
    u32,
    f32,
    f64,
    &str,
    String,
    uuid::Uuid,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
);

/// Build an [`Args`] set from positional values, keyed values, or both.
///
/// ```ignore
/// args![20, vec![1, 2, 3], 30];
/// args![name = "n", password = "p"];
/// args!["a1", "a2"; name = "n"];
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($key:ident = $named:expr),+ $(,)?) => {
        $crate::Args::new()$(.named(stringify!($key), $named))+
    };
    ($($value:expr),+ $(; $($key:ident = $named:expr),+)? $(,)?) => {
        $crate::Args::new()$(.push($value))+$($(.named(stringify!($key), $named))+)?
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_becomes_one_positional() {
        let args = Args::from("a0");
        assert_eq!(args.positional_len(), 1);
        assert_eq!(args.get(0), Some(&Arg::Scalar(Value::Text("a0".into()))));
    }

    #[test]
    fn vec_of_lists_keeps_each_list_whole() {
        let args = Args::from(vec![vec![1_i64, 2], vec![3]]);
        assert_eq!(args.positional_len(), 2);
        assert!(args.get(0).is_some_and(Arg::is_list));
    }

    #[test]
    fn macro_mixes_positional_and_named() {
        let args = args!["a1", vec![1_i64, 2, 3]; name = "n", password = "p"];
        assert_eq!(args.positional_len(), 2);
        assert_eq!(
            args.get_named("password"),
            Some(&Arg::Scalar(Value::Text("p".into())))
        );
        let built = Args::new()
            .push("a1")
            .push(vec![1_i64, 2, 3])
            .named("name", "n")
            .named("password", "p");
        assert_eq!(args, built);
    }

    #[test]
    fn macro_named_only() {
        let args = args![x = 1_i64, y = 2_i64];
        assert_eq!(args.positional_len(), 0);
        assert!(!args.is_empty());
        assert_eq!(args.get_named("y"), Some(&Arg::Scalar(Value::Int(2))));
    }

    #[test]
    fn collect_pairs_into_named() {
        let args: Args = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
        assert_eq!(args.get_named("a"), Some(&Arg::Scalar(Value::Int(1))));
        assert_eq!(args.get(0), None);
    }
}
