//! mysqldump / mysql command synthesis.
//!
//! Unlike the Postgres commands, a non-empty password is printed as a
//! separate `Password:` line above the command instead of inline: the MySQL
//! clients prompt for it interactively (`-p`), so the operator only needs
//! it on screen to type back.

use dumper_config::EnvironmentConfig;

/// Render the mysqldump invocation, redirected to `<name>.sql`.
pub fn dump(config: &EnvironmentConfig, name: &str) -> String {
    let command = format!(
        "mysqldump {}-p -h {} {} > {}.sql",
        user_flag(config),
        config.host,
        config.database,
        name,
    );
    with_password(config, command)
}

/// Render the mysql client invocation consuming `<name>.sql`.
pub fn restore(config: &EnvironmentConfig, name: &str) -> String {
    let command = format!(
        "mysql {}-p -h {} {} < {}.sql",
        user_flag(config),
        config.host,
        config.database,
        name,
    );
    with_password(config, command)
}

/// `-u <username> ` segment, omitted entirely when no username is configured.
fn user_flag(config: &EnvironmentConfig) -> String {
    if config.username.is_empty() {
        String::new()
    } else {
        format!("-u {} ", config.username)
    }
}

fn with_password(config: &EnvironmentConfig, command: String) -> String {
    if config.password.is_empty() {
        command
    } else {
        format!("Password: {}\n\n{}", config.password, command)
    }
}
