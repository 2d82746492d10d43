//! Generic remote-resource state container
//!
//! The storefront UI holds one `data / loading / error` triple per remote
//! resource (cart, orders, products, ...). `Resource<T>` is that pattern
//! written once: `run` flips the loading flag, awaits the operation, and
//! records either the payload or the error message for display.

use crate::error::ClientError;
use std::future::Future;
use std::sync::{Arc, RwLock};

/// Snapshot of a remote resource's state.
#[derive(Debug, Clone)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Shared handle over a `Remote<T>` snapshot.
#[derive(Debug)]
pub struct Resource<T> {
    state: Arc<RwLock<Remote<T>>>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(Remote::default())),
        }
    }
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn get(&self) -> Remote<T> {
        self.read().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.read().data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Run a remote operation against this resource: set loading, await,
    /// store the payload or the error message, clear loading. The result is
    /// also returned so callers can branch on it. The lock is never held
    /// across the await.
    pub async fn run<F>(&self, operation: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        {
            let mut state = self.write();
            state.loading = true;
            state.error = None;
        }

        let result = operation.await;

        {
            let mut state = self.write();
            state.loading = false;
            match &result {
                Ok(data) => state.data = Some(data.clone()),
                Err(error) => state.error = Some(error.to_string()),
            }
        }

        result
    }

    /// Drop any cached data and error (e.g. on logout).
    pub fn reset(&self) {
        let mut state = self.write();
        state.data = None;
        state.loading = false;
        state.error = None;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Remote<T>> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Remote<T>> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_stores_data_and_clears_loading() {
        let resource: Resource<u32> = Resource::new();
        let result = resource.run(async { Ok(41) }).await;
        assert_eq!(result.unwrap(), 41);

        let snapshot = resource.get();
        assert_eq!(snapshot.data, Some(41));
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn run_stores_error_and_keeps_previous_data() {
        let resource: Resource<u32> = Resource::new();
        resource.run(async { Ok(1) }).await.unwrap();

        let result = resource
            .run(async {
                Err(ClientError::Configuration("boom".into()))
            })
            .await;
        assert!(result.is_err());

        let snapshot = resource.get();
        assert_eq!(snapshot.data, Some(1));
        assert_eq!(snapshot.error.as_deref(), Some("Invalid configuration: boom"));
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn error_is_cleared_when_a_new_run_starts() {
        let resource: Resource<u32> = Resource::new();
        resource
            .run(async { Err(ClientError::Configuration("boom".into())) })
            .await
            .ok();
        assert!(resource.error().is_some());

        resource.run(async { Ok(2) }).await.unwrap();
        assert!(resource.error().is_none());
    }

    #[tokio::test]
    async fn reset_drops_everything() {
        let resource: Resource<u32> = Resource::new();
        resource.run(async { Ok(5) }).await.unwrap();
        resource.reset();
        let snapshot = resource.get();
        assert!(snapshot.data.is_none());
        assert!(snapshot.error.is_none());
        assert!(!snapshot.loading);
    }
}
