use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::backend::KeyValueStore;
use crate::patch::ToolUpdate;
use crate::state::ToolStates;

/// Key the tool states are persisted under
pub const STORE_KEY: &str = "tools-store";

/// Version written into the persisted record
pub const STORE_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct Persisted {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    tool_states: ToolStates,
}

/// The per-tool states, loaded on start and saved on every change
#[derive(Debug)]
pub struct ToolStore<B: KeyValueStore> {
    backend: B,
    states: ToolStates,
}

impl<B: KeyValueStore> ToolStore<B> {
    /// Load the states from the backend
    ///
    /// A missing record starts from the defaults. So does a record that
    /// cannot be read back, after logging a warning.
    pub fn load(backend: B) -> Result<Self> {
        let states = match backend.get(STORE_KEY)? {
            None => {
                debug!("No persisted tool states, starting fresh");
                ToolStates::default()
            }
            Some(raw) => match serde_json::from_str::<Persisted>(&raw) {
                Ok(persisted) => {
                    if persisted.version != STORE_VERSION {
                        warn!(
                            "Persisted tool states have version {}, expected {}",
                            persisted.version, STORE_VERSION
                        );
                    }
                    persisted.state.tool_states
                }
                Err(err) => {
                    warn!("Ignoring unreadable tool states: {}", err);
                    ToolStates::default()
                }
            },
        };

        Ok(Self { backend, states })
    }

    /// Get all tool states
    pub fn states(&self) -> &ToolStates {
        &self.states
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Merge a partial update into its slot and persist the result
    pub fn update(&mut self, update: impl Into<ToolUpdate>) -> Result<()> {
        let update = update.into();
        debug!("Updating {} state", update.tool());
        update.apply(&mut self.states);
        self.save()
    }

    /// Swap the Base64 tool's output into its input and flip its direction
    pub fn swap_base64(&mut self) -> Result<()> {
        self.states.base64.swap();
        self.save()
    }

    /// Drop every tool's state
    pub fn reset(&mut self) -> Result<()> {
        info!("Resetting all tool states");
        self.states = ToolStates::default();
        self.backend
            .remove(STORE_KEY)
            .context("Failed to remove persisted tool states")
    }

    fn save(&mut self) -> Result<()> {
        let persisted = Persisted {
            state: PersistedState {
                tool_states: self.states.clone(),
            },
            version: STORE_VERSION,
        };
        let raw = serde_json::to_string(&persisted).context("Failed to serialize tool states")?;

        self.backend
            .set(STORE_KEY, &raw)
            .context("Failed to persist tool states")
    }
}
