//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;
use tracing::warn;

/// Ensure the data directory exists; warn when an optional catalog file is missing.
pub async fn ensure_env(data_dir: &str, catalog_path: Option<&str>) -> anyhow::Result<()> {
    if let Some(path) = catalog_path {
        if !is_file(path).await {
            warn!(%path, "catalog file not found; loading it will fail");
        }
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

/// Whether a path exists and is a regular file.
pub async fn is_file(path: impl AsRef<Path>) -> bool {
    tokio::fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_env_creates_data_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("dm_env_{}", uuid::Uuid::new_v4()));
        let dir_str = dir.to_string_lossy().to_string();
        ensure_env(&dir_str, None).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        assert!(!is_file(&dir).await);
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn directory_is_not_a_catalog_file() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("dm_env_{}", uuid::Uuid::new_v4()));
        let dir_str = dir.to_string_lossy().to_string();
        // a directory at the catalog path only warns
        ensure_env(&dir_str, Some(&dir_str)).await?;
        assert!(!is_file(&dir).await);

        let catalog = dir.join("catalog.json");
        tokio::fs::write(&catalog, b"{}").await?;
        assert!(is_file(&catalog).await);
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
