use anyhow::Result;
use tool_store::{JsonPatch, KeyValueStore, ToolStore};

use super::{read_file, read_stdin};
use crate::args::JsonArgs;

pub fn run<B: KeyValueStore>(args: JsonArgs, store: &mut ToolStore<B>) -> Result<()> {
    let input = match &args.file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let result = if args.minify {
        toolkit::json::minify(&input)
    } else if args.sort_keys {
        toolkit::json::format_sorted(&input)
    } else {
        toolkit::json::format(&input)
    };

    let output = result.as_ref().map(String::clone).unwrap_or_default();
    store.update(JsonPatch {
        input: Some(input),
        output: Some(output),
    })?;

    println!("{}", result?);
    Ok(())
}
