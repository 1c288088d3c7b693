//! Example: build a filtered listing query from optional inputs.
//!
//! Run with:
//!   cargo run --example dynamic_filters -p sqlchain
//!
//! Set `RUST_LOG=sqlchain=debug` to see the build events.

use sqlchain::{PlaceholderStyle, Sql, SqlResult, args};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    roles_any_of: Vec<String>,
    search: Option<String>,
    sort_by: Vec<&'static str>,
}

fn build_list_users_sql(filters: &Filters) -> Sql {
    let mut q = Sql::builder();
    q.tag("users.list")
        .select(["u.id", "u.name", "u.status", "t.name AS team"])
        .from("users u")
        .left_join("teams t")
        .on("t.id = u.team_id");

    if let Some(status) = &filters.status {
        q.where_args("u.status = @0", status.as_str());
    }
    if !filters.roles_any_of.is_empty() {
        q.where_args("u.role IN (@roles)", args![roles = filters.roles_any_of.clone()]);
    }
    if let Some(search) = &filters.search {
        q.where_args(
            "u.name ILIKE @p OR u.email ILIKE @p",
            args![p = format!("%{search}%")],
        );
    }
    // Keep MySQL-style session variables untouched.
    q.where_("u.created_at > @@session_start");

    q.order_by(filters.sort_by.clone());
    q.order_by("u.id");
    q
}

fn main() -> SqlResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let filters = Filters {
        status: Some("active".to_string()),
        roles_any_of: vec!["admin".to_string(), "owner".to_string()],
        search: Some("a".to_string()),
        sort_by: vec!["u.created_at DESC"],
    };
    println!("filters = {filters:?}\n");

    let q = build_list_users_sql(&filters);
    println!("built sql:\n{}\n", q.sql()?);
    println!("as $N:\n{}\n", q.render_as(PlaceholderStyle::Dollar)?);

    for (i, arg) in q.arguments()?.iter().enumerate() {
        println!("@{i} = {arg:?}");
    }

    let built = q.into_built()?;
    println!(
        "\njson = {}",
        serde_json::to_string_pretty(&built).unwrap_or_default()
    );
    Ok(())
}
