use std::path::PathBuf;

use sqlx_core::migrate::{MigrateError, Migrator};

const WORKSPACE_MIGRATIONS_DIR: &str = "server/migrations";
const CRATE_MIGRATIONS_DIR: &str = "./migrations";

/// `MIGRATIONS_DIR` wins, then the workspace layout, then the crate directory.
fn migrations_path() -> PathBuf {
    if let Some(dir) = std::env::var("MIGRATIONS_DIR")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
    {
        return PathBuf::from(dir);
    }

    let workspace_path = PathBuf::from(WORKSPACE_MIGRATIONS_DIR);
    if workspace_path.exists() {
        return workspace_path;
    }
    PathBuf::from(CRATE_MIGRATIONS_DIR)
}

pub async fn run(pool: &sqlx::PgPool) -> Result<(), MigrateError> {
    let path = migrations_path();
    tracing::info!(path = %path.display(), "applying score table migrations");
    let migrator = Migrator::new(path).await?;
    migrator.run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_overrides_layout_lookup() {
        temp_env::with_var("MIGRATIONS_DIR", Some("/opt/tradle/migrations"), || {
            assert_eq!(migrations_path(), PathBuf::from("/opt/tradle/migrations"));
        });
    }

    #[test]
    fn blank_override_is_ignored() {
        temp_env::with_var("MIGRATIONS_DIR", Some("  "), || {
            let path = migrations_path();
            assert!(
                path == PathBuf::from(WORKSPACE_MIGRATIONS_DIR)
                    || path == PathBuf::from(CRATE_MIGRATIONS_DIR)
            );
        });
    }
}
