use anyhow::Context;
use tracing::error;

/// Hash with bcrypt at the given cost; the cost and salt travel inside the hash.
pub fn hash_password(plain: &str, cost: u32) -> anyhow::Result<String> {
    bcrypt::hash(plain, cost)
        .map_err(|e| {
            error!(error = %e, cost, "bcrypt hash error");
            e
        })
        .context("hash password")
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    bcrypt::verify(plain, hash)
        .map_err(|e| {
            error!(error = %e, "bcrypt verify error");
            e
        })
        .context("verify password")
}

/// [`hash_password`] on the blocking pool; bcrypt is too slow for a runtime worker.
pub async fn hash_password_async(plain: String, cost: u32) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain, cost))
        .await
        .context("join bcrypt hash task")?
}

pub async fn verify_password_async(plain: String, hash: String) -> anyhow::Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&plain, &hash))
        .await
        .context("join bcrypt verify task")?
}
