use anyhow::Result;
use log::debug;
use tool_store::{Base64Patch, KeyValueStore, ToolStore};
use toolkit::Base64Mode;

use super::arg_or_stdin;
use crate::args::Base64Action;

pub fn run<B: KeyValueStore>(action: Base64Action, store: &mut ToolStore<B>) -> Result<()> {
    let (mode, input) = match action {
        Base64Action::Encode { input } => (Base64Mode::Encode, arg_or_stdin(input)?),
        Base64Action::Decode { input } => (Base64Mode::Decode, arg_or_stdin(input)?),
        Base64Action::Swap => {
            store.swap_base64()?;
            let state = &store.states().base64;
            println!("mode: {}", state.mode);
            println!("{}", state.input);
            return Ok(());
        }
    };

    debug!("base64 {} of {} bytes", mode, input.len());
    let result = toolkit::base64::apply(mode, &input);

    // Keep what was typed even when it fails to convert
    let output = result.as_ref().map(String::clone).unwrap_or_default();
    store.update(Base64Patch {
        input: Some(input),
        output: Some(output),
        mode: Some(mode),
    })?;

    println!("{}", result?);
    Ok(())
}
