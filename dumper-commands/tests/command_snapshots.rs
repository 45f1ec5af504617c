//! Snapshot tests for generated command text.
//!
//! These tests pin the exact operator-facing command lines per adapter.
//! Update the inline snapshots only for intentional format changes.

use std::path::Path;

use chrono::NaiveDate;
use dumper_commands::{CommandSpec, artifact_name};
use dumper_config::{AdapterKind, parse_str};

/// Select an environment from YAML and build its commands with a pinned
/// artifact name, for deterministic snapshots.
fn build(yaml: &str, environment: &str, with_restore: bool) -> CommandSpec {
    let set = parse_str(yaml).expect("failed to parse yaml");
    let config = set.select(environment).expect("environment not found");
    let kind = AdapterKind::classify(&config.adapter);
    let name = artifact_name(
        Path::new("/srv/myapp/config/database.yml"),
        environment,
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
    );
    CommandSpec::build(&config, kind, &name, with_restore).expect("unrecognized adapter")
}

#[test]
fn test_postgres_dump() {
    let spec = build(
        r#"
        development:
          adapter: postgresql
          database: app_dev
          username: app
        "#,
        "development",
        false,
    );

    insta::assert_snapshot!(
        spec.dump,
        @"pg_dump -Fc --no-acl --no-owner --clean -U app -h localhost app_dev > myapp_dev_20260824.dump"
    );
    assert!(spec.restore.is_none());
}

#[test]
fn test_postgres_dump_and_restore_with_password() {
    let spec = build(
        r#"
        production:
          adapter: postgresql
          host: pg.internal
          database: app_prod
          username: app
          password: secret
        "#,
        "production",
        true,
    );

    insta::assert_snapshot!(
        spec.dump,
        @"PGPASSWORD=secret pg_dump -Fc --no-acl --no-owner --clean -U app -h pg.internal app_prod > myapp_pro_20260824.dump"
    );
    insta::assert_snapshot!(
        spec.restore.unwrap(),
        @"PGPASSWORD=secret pg_restore --verbose --clean --no-acl --no-owner -h pg.internal -U app -d app_prod myapp_pro_20260824.dump"
    );
}

#[test]
fn test_mysql_dump_and_restore_with_password() {
    let spec = build(
        r#"
        production:
          adapter: mysql2
          host: db.internal
          database: app_prod
          username: app
          password: secret
        "#,
        "production",
        true,
    );

    insta::assert_snapshot!(spec.dump, @r"
    Password: secret

    mysqldump -u app -p -h db.internal app_prod > myapp_pro_20260824.sql
    ");
    insta::assert_snapshot!(spec.restore.unwrap(), @r"
    Password: secret

    mysql -u app -p -h db.internal app_prod < myapp_pro_20260824.sql
    ");
}

#[test]
fn test_mysql_dump_without_credentials() {
    let spec = build(
        r#"
        development:
          adapter: mysql2
          database: app_dev
        "#,
        "development",
        false,
    );

    insta::assert_snapshot!(
        spec.dump,
        @"mysqldump -p -h localhost app_dev > myapp_dev_20260824.sql"
    );
}

#[test]
fn test_sqlite_dump_is_fixed() {
    let spec = build(
        r#"
        development:
          adapter: sqlite3
          database: db/development.sqlite3
        "#,
        "development",
        true,
    );

    insta::assert_snapshot!(spec.dump, @"sqlite3 db/development.sqlite3 .dump > dump");
    assert!(spec.restore.is_none());
}
