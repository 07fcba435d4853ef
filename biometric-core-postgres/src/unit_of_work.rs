use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::error::Error;

/// Open a transaction on the pool and wrap it for sharing between repositories
pub async fn begin(pool: &PgPool) -> Result<Executor, sqlx::Error> {
    Ok(Executor::new(pool.begin().await?))
}

/// Commit the shared transaction; later repository calls on it fail
pub async fn commit(executor: &Executor) -> Result<(), Box<dyn Error + Send + Sync>> {
    let tx = executor
        .tx
        .lock()
        .await
        .take()
        .ok_or("Transaction has been consumed")?;
    tx.commit().await?;
    Ok(())
}

pub async fn rollback(executor: &Executor) -> Result<(), Box<dyn Error + Send + Sync>> {
    let tx = executor
        .tx
        .lock()
        .await
        .take()
        .ok_or("Transaction has been consumed")?;
    tx.rollback().await?;
    Ok(())
}

pub async fn is_consumed(executor: &Executor) -> bool {
    executor.tx.lock().await.is_none()
}
