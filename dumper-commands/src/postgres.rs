//! pg_dump / pg_restore command synthesis.
//!
//! A non-empty password becomes an inline `PGPASSWORD=` assignment in front
//! of the command, in clear text. That is an operator convenience for
//! copy-pasting, not a security control.

use dumper_config::EnvironmentConfig;

/// Render the pg_dump invocation, redirected to `<name>.dump`.
pub fn dump(config: &EnvironmentConfig, name: &str) -> String {
    let command = format!(
        "pg_dump -Fc --no-acl --no-owner --clean {}-h {} {} > {}.dump",
        user_flag(config),
        config.host,
        config.database,
        name,
    );
    with_password(config, command)
}

/// Render the pg_restore invocation consuming `<name>.dump`.
pub fn restore(config: &EnvironmentConfig, name: &str) -> String {
    let command = format!(
        "pg_restore --verbose --clean --no-acl --no-owner -h {} {}-d {} {}.dump",
        config.host,
        user_flag(config),
        config.database,
        name,
    );
    with_password(config, command)
}

/// `-U <username> ` segment, omitted entirely when no username is configured.
fn user_flag(config: &EnvironmentConfig) -> String {
    if config.username.is_empty() {
        String::new()
    } else {
        format!("-U {} ", config.username)
    }
}

fn with_password(config: &EnvironmentConfig, command: String) -> String {
    if config.password.is_empty() {
        command
    } else {
        format!("PGPASSWORD={} {}", config.password, command)
    }
}
