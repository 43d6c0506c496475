use anyhow::Result;
use tool_store::{KeyValueStore, ToolStore, WisdomPatch};
use toolkit::{PlaceholderWisdom, WisdomSource};

pub fn run<B: KeyValueStore>(prompt: &str, store: &mut ToolStore<B>) -> Result<()> {
    let wisdom = PlaceholderWisdom.generate(prompt)?;

    store.update(WisdomPatch {
        input: Some(prompt.to_string()),
        output: Some(wisdom.clone()),
    })?;

    println!("{}", wisdom);
    Ok(())
}
