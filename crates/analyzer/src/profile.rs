//! Persistent user profile.

use std::sync::Arc;

use composition_core::{KeyValueStore, UserProfile};
use tracing::warn;

use crate::error::AnalysisError;

/// Storage key for the profile blob.
pub const PROFILE_KEY: &str = "cosmetic_scanner_profile";

/// Profile storage backed by the key-value store.
///
/// A missing or unreadable profile loads as the default profile.
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> UserProfile {
        self.try_load().await.unwrap_or_else(|e| {
            warn!("Failed to load profile: {}", e);
            UserProfile::default()
        })
    }

    /// Like [`load`](Self::load), but a storage failure is an error.
    async fn try_load(&self) -> Result<UserProfile, AnalysisError> {
        match self.store.get(PROFILE_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt profile: {}", e);
                UserProfile::default()
            })),
            None => Ok(UserProfile::default()),
        }
    }

    pub async fn save(&self, profile: &UserProfile) -> Result<(), AnalysisError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &raw).await?;
        Ok(())
    }

    /// Load, modify and save the profile, returning the new value.
    ///
    /// Nothing is written when the stored profile cannot be read.
    pub async fn update<F>(&self, change: F) -> Result<UserProfile, AnalysisError>
    where
        F: FnOnce(&mut UserProfile),
    {
        let mut profile = self.try_load().await?;
        change(&mut profile);
        self.save(&profile).await?;
        Ok(profile)
    }
}
