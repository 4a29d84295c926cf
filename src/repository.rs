// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded collection and its load-once lifecycle.
//!
//! The export is read lazily on first use. Concurrent first callers all await
//! the same read; once it lands, the collection is an immutable `Arc<[Cast]>`
//! shared by every query without locking. A failed read leaves the cell
//! empty, so each caller sees the error and a later call reads again.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter::SearchFilters;
use crate::search::{search, SearchResponse};
use crate::types::{Cast, CastBatch};

/// Collection summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stats {
    pub total: usize,
}

/// Read and parse an export file.
pub async fn load_casts(path: &Path) -> Result<Vec<Cast>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let batch: CastBatch = serde_json::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(batch.casts)
}

#[derive(Debug)]
pub struct CastRepository {
    path: PathBuf,
    casts: OnceCell<Arc<[Cast]>>,
}

impl CastRepository {
    /// Repository over the export at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            casts: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_path.clone())
    }

    /// Repository that is already loaded. Used by tests and benchmarks.
    pub fn from_casts(casts: Vec<Cast>) -> Self {
        Self {
            path: PathBuf::new(),
            casts: OnceCell::new_with(Some(Arc::from(casts))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.casts.initialized()
    }

    /// Load the export if it is not loaded yet, and return the collection.
    pub async fn ensure_initialized(&self) -> Result<Arc<[Cast]>> {
        let casts = self
            .casts
            .get_or_try_init(|| async {
                info!(path = %self.path.display(), "loading cast export");
                match load_casts(&self.path).await {
                    Ok(casts) => {
                        info!(count = casts.len(), "cast export loaded");
                        Ok(Arc::from(casts))
                    }
                    Err(err) => {
                        error!(error = %err, "cast export failed to load");
                        Err(err)
                    }
                }
            })
            .await?;
        Ok(Arc::clone(casts))
    }

    /// Run a search, loading the collection first if needed.
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse> {
        let casts = self.ensure_initialized().await?;
        Ok(search(&casts, filters))
    }

    pub async fn stats(&self) -> Result<Stats> {
        let casts = self.ensure_initialized().await?;
        Ok(Stats { total: casts.len() })
    }
}
