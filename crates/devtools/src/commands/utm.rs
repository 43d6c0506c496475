use anyhow::Result;
use tool_store::{KeyValueStore, ToolStore, UtmPatch};

use crate::args::UtmArgs;

pub fn run<B: KeyValueStore>(args: UtmArgs, store: &mut ToolStore<B>) -> Result<()> {
    // Flags that are left out keep their stored value
    store.update(UtmPatch {
        url: Some(args.url.clone()),
        source: args.source,
        medium: args.medium,
        campaign: args.campaign,
        term: args.term,
        content: args.content,
        output: None,
    })?;

    let state = &store.states().utm;
    let result = state.params().build(&state.url);

    let output = match &result {
        Ok(url) => url.to_string(),
        Err(_) => "Error: Please enter a valid URL".to_string(),
    };
    store.update(UtmPatch {
        output: Some(output),
        ..Default::default()
    })?;

    println!("{}", result?);
    Ok(())
}
