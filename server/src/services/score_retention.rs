use std::time::Duration;

use tracing::{info, warn};

use crate::config::{RETENTION_CHECK_SECS, RETENTION_DAYS};
use crate::state::AppState;

const BATCH_SIZE: i64 = 10_000;

/// Daily cleanup of score rows older than the retention period.
pub async fn run(state: AppState) {
    let Some(pool) = state.db.as_ref().cloned() else {
        warn!("score retention disabled: no database configured");
        return;
    };

    info!(
        "Score retention started (retention: {}d, check interval: {}s)",
        RETENTION_DAYS, RETENTION_CHECK_SECS
    );

    let mut interval = tokio::time::interval(Duration::from_secs(RETENTION_CHECK_SECS));
    loop {
        interval.tick().await;
        let deleted = delete_expired_scores(&pool, retention_cutoff(chrono::Utc::now())).await;
        if deleted > 0 {
            info!(deleted, "Score retention removed expired rows");
        }
    }
}

fn retention_cutoff(now: chrono::DateTime<chrono::Utc>) -> chrono::DateTime<chrono::Utc> {
    now - chrono::Duration::days(RETENTION_DAYS)
}

/// Delete in batches so a large backlog never holds one long lock.
async fn delete_expired_scores(
    pool: &sqlx::PgPool,
    cutoff: chrono::DateTime<chrono::Utc>,
) -> i64 {
    let mut total = 0i64;
    loop {
        match sqlx::query(
            "DELETE FROM tradle_scores WHERE id IN \
             (SELECT id FROM tradle_scores WHERE received_at < $1 LIMIT $2)",
        )
        .bind(cutoff)
        .bind(BATCH_SIZE)
        .execute(pool)
        .await
        {
            Ok(result) => {
                let deleted = result.rows_affected() as i64;
                total += deleted;
                if deleted < BATCH_SIZE {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete expired scores");
                break;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const REAL_DB_TEST_LOCK: i64 = 7_301_001;

    #[test]
    fn cutoff_is_retention_days_back() {
        let now = chrono::Utc
            .with_ymd_and_hms(2023, 4, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let cutoff = retention_cutoff(now);
        assert_eq!((now - cutoff).num_days(), RETENTION_DAYS);
    }

    #[tokio::test]
    async fn deletes_only_rows_past_the_cutoff() {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("Skipping score retention test: DATABASE_URL is not set");
            return;
        };

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&database_url)
            .await
            .expect("connect real postgres");

        let mut lock_conn = pool.acquire().await.expect("acquire lock connection");
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(REAL_DB_TEST_LOCK)
            .execute(&mut *lock_conn)
            .await
            .expect("acquire db lock");

        crate::db_migrations::run(&pool)
            .await
            .expect("run migrations");
        sqlx::query("TRUNCATE TABLE tradle_scores RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate scores");

        for age_days in [RETENTION_DAYS + 10, 1] {
            sqlx::query(
                "INSERT INTO tradle_scores \
                 (received_at, client_date, answer_from, answer_to, won, tries, guesses) \
                 VALUES (now() - make_interval(days => $1), '2022-04-01', 'FR', 'DE', TRUE, 1, '[]')",
            )
            .bind(age_days as i32)
            .execute(&pool)
            .await
            .expect("insert score row");
        }

        let deleted = delete_expired_scores(&pool, retention_cutoff(chrono::Utc::now())).await;
        assert_eq!(deleted, 1);

        let remaining = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tradle_scores")
            .fetch_one(&pool)
            .await
            .expect("count scores");
        assert_eq!(remaining, 1);

        sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(REAL_DB_TEST_LOCK)
            .execute(&mut *lock_conn)
            .await
            .expect("release db lock");
    }
}
