// Persisted per-tool state for the devtools workspace
// Each tool owns one typed slot; updates merge a typed patch into that slot

mod backend;
mod patch;
mod state;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use patch::{Base64Patch, DiffPatch, JsonPatch, ToolUpdate, UtmPatch, WisdomPatch};
pub use state::{Base64State, DiffState, JsonState, ToolStates, UtmState, WisdomState};
pub use store::{ToolStore, STORE_KEY, STORE_VERSION};
