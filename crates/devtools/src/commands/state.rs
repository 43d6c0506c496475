use anyhow::{anyhow, Result};
use tool_store::{KeyValueStore, ToolStore};
use toolkit::ToolKind;

use crate::args::StateAction;

pub fn run<B: KeyValueStore>(action: StateAction, store: &mut ToolStore<B>) -> Result<()> {
    match action {
        StateAction::Show { tool: Some(slot) } => {
            let tool = ToolKind::from_slot(&slot).ok_or_else(|| {
                anyhow!("Unknown tool '{}', expected base64, json, diff, utm or wisdom", slot)
            })?;
            println!("{}", store.states().slot_json(tool)?);
        }
        StateAction::Show { tool: None } => {
            println!("{}", serde_json::to_string_pretty(store.states())?);
        }
        StateAction::Reset => {
            store.reset()?;
            println!("Cleared all tool states");
        }
    }
    Ok(())
}
