// User profiles — the read-only records the matcher compares.
//
// Profiles live in a JSON file of synthetic sample users and are loaded once
// per invocation. The core never mutates a profile; the store hands out
// shared references only.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RapportError, Result};

/// One user record: an opaque id, a psychometric trait vector, and an
/// optional list of personal topic interests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// One dimension per trait. May be any length; the matcher resamples.
    pub psychometrics: Vec<f64>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// An in-memory profile store keyed by user id.
pub struct ProfileStore {
    users: HashMap<String, UserProfile>,
}

impl ProfileStore {
    /// Load profiles from a JSON array of user records.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let profiles: Vec<UserProfile> = serde_json::from_str(&raw)?;
        info!(users = profiles.len(), path = %path.display(), "Loaded profile store");
        Ok(Self::from_profiles(profiles))
    }

    /// Build a store from already-parsed records. Later duplicates of an id
    /// replace earlier ones, mirroring how the source file is keyed.
    pub fn from_profiles(profiles: Vec<UserProfile>) -> Self {
        let users = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { users }
    }

    /// Look up a user by id.
    pub fn get(&self, id: &str) -> Result<&UserProfile> {
        self.users.get(id).ok_or_else(|| RapportError::UnknownUser {
            id: id.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All profiles in id order, for listing.
    pub fn all(&self) -> Vec<&UserProfile> {
        let mut all: Vec<&UserProfile> = self.users.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
