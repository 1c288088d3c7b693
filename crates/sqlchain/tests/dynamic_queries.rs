//! End-to-end chain building through the public API only.

use sqlchain::{Args, PlaceholderStyle, Sql, SqlConfig, SqlError, Value, args};

#[derive(Default)]
struct Filters {
    status: Option<&'static str>,
    author_ids: Vec<i64>,
    search: Option<&'static str>,
    sort: Vec<&'static str>,
}

fn list_articles(filters: &Filters) -> Sql {
    let mut q = Sql::builder();
    q.select(["a.id", "a.title", "u.name"])
        .from("articles a")
        .inner_join("users u")
        .on("u.id = a.author_id");

    if let Some(status) = filters.status {
        q.where_args("a.status = @0", status);
    }
    if !filters.author_ids.is_empty() {
        q.where_args("a.author_id IN (@ids)", args![ids = filters.author_ids.clone()]);
    }
    if let Some(search) = filters.search {
        q.where_args(
            "a.title ILIKE @pattern OR a.body ILIKE @pattern",
            args![pattern = format!("%{search}%")],
        );
    }
    for column in &filters.sort {
        q.order_by(*column);
    }
    q
}

#[test]
fn no_filters_builds_plain_select() {
    let q = list_articles(&Filters::default());

    assert_eq!(
        q.sql().unwrap(),
        "SELECT a.id, a.title, u.name\nFROM articles a\nINNER JOIN users u\nON u.id = a.author_id"
    );
    assert!(q.arguments().unwrap().is_empty());
}

#[test]
fn all_filters_merge_and_renumber() {
    let q = list_articles(&Filters {
        status: Some("published"),
        author_ids: vec![3, 5],
        search: Some("rust"),
        sort: vec!["a.created_at DESC", "a.id"],
    });

    assert_eq!(
        q.sql().unwrap(),
        "SELECT a.id, a.title, u.name\n\
         FROM articles a\n\
         INNER JOIN users u\n\
         ON u.id = a.author_id\n\
         WHERE (a.status = @0)\n\
         AND (a.author_id IN (@1,@2))\n\
         AND (a.title ILIKE @3 OR a.body ILIKE @4)\n\
         ORDER BY a.created_at DESC\n\
         , a.id"
    );
    assert_eq!(
        q.arguments().unwrap(),
        [
            Value::from("published"),
            Value::Int(3),
            Value::Int(5),
            Value::from("%rust%"),
            Value::from("%rust%"),
        ]
    );
}

#[test]
fn placeholders_are_contiguous_in_text_order() {
    let mut q = Sql::builder();
    q.append_args("a @2 @0", [10_i64, 11, 12])
        .append_args("b @k @1", args![0_i64, 21_i64; k = 20_i64])
        .append_args("c @0", vec![vec![30_i64, 31]]);

    let sql = q.sql().unwrap();
    assert_eq!(sql, "a @0 @1\nb @2 @3\nc @4,@5");

    let numbers: Vec<usize> = sql
        .split(|c: char| !(c == '@' || c.is_ascii_digit()))
        .filter_map(|tok| tok.strip_prefix('@'))
        .map(|n| n.parse().unwrap())
        .collect();
    assert_eq!(numbers, (0..q.arguments().unwrap().len()).collect::<Vec<_>>());
    assert_eq!(
        q.arguments().unwrap(),
        [12_i64, 10, 20, 21, 30, 31].map(Value::Int)
    );
}

#[test]
fn error_reports_the_failing_fragment() {
    let mut q = Sql::builder();
    q.append_args("ok = @0", 1_i64)
        .append_args("bad = @5", [1_i64, 2]);

    match q.sql() {
        Err(SqlError::ParamOutOfRange {
            index,
            count,
            template,
        }) => {
            assert_eq!(index, 5);
            assert_eq!(count, 2);
            assert_eq!(template, "bad = @5");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_named_argument() {
    let mut q = Sql::builder();
    q.where_args("name = @name", Args::new().named("nme", "typo"));

    let err = q.build().unwrap_err();
    assert!(err.is_missing_param());
    assert_eq!(err.template(), "WHERE (name = @name)");
}

#[test]
fn render_for_positional_drivers() {
    let mut q = Sql::builder();
    q.select("*")
        .from("t")
        .where_args("x IN (@0) AND y = @1", args![vec![1_i64, 2], "y"]);

    assert_eq!(
        q.render_as(PlaceholderStyle::Dollar).unwrap(),
        "SELECT *\nFROM t\nWHERE (x IN ($1,$2) AND y = $3)"
    );
}

#[test]
fn build_and_stale_append_log_without_panicking() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();

    let mut q = Sql::builder();
    q.config(SqlConfig::new().max_logged_sql_length(8))
        .tag("articles.by_id")
        .where_args("id = @0", 1_i64);
    assert_eq!(q.sql().unwrap(), "WHERE (id = @0)");

    q.where_("ignored");
    assert_eq!(q.sql().unwrap(), "WHERE (id = @0)");
}

#[test]
fn list_argument_from_iterator() {
    let ids = [7_i64, 8, 9];
    let mut q = Sql::builder();
    q.where_args("id IN (@ids)", args![ids = sqlchain::Arg::list(ids.iter().copied())]);

    assert_eq!(q.sql().unwrap(), "WHERE (id IN (@0,@1,@2))");
    assert!(q.arguments().unwrap().iter().all(|v| v.as_i64().is_some()));
}
