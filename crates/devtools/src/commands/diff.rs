use anyhow::{bail, Result};
use line_diff::DiffConfig;
use log::info;
use tool_store::{DiffPatch, KeyValueStore, ToolStore};

use super::read_file;
use crate::args::{DiffArgs, ViewArg};
use crate::view;

pub fn run<B: KeyValueStore>(args: DiffArgs, store: &mut ToolStore<B>) -> Result<()> {
    let (text1, text2, old_name, new_name) = match (&args.original, &args.modified) {
        (Some(original), Some(modified)) => (
            read_file(original)?,
            read_file(modified)?,
            original.display().to_string(),
            modified.display().to_string(),
        ),
        _ => {
            let state = &store.states().diff;
            if state.text1.is_empty() && state.text2.is_empty() {
                bail!("Nothing to compare: pass ORIGINAL and MODIFIED files");
            }
            info!("Comparing the last stored texts");
            (
                state.text1.clone(),
                state.text2.clone(),
                "original".to_string(),
                "modified".to_string(),
            )
        }
    };

    let diff = DiffConfig::default()
        .algorithm(args.algorithm.into())
        .diff(&text1, &text2);

    store.update(DiffPatch {
        text1: Some(text1),
        text2: Some(text2),
    })?;

    match args.view {
        ViewArg::Inline => print!("{}", view::inline(&diff)),
        ViewArg::Split => print!("{}", view::split(&diff)),
        ViewArg::Unified => print!(
            "{}",
            view::unified(&diff, args.context, &old_name, &new_name)
        ),
        ViewArg::Json => {
            println!("{}", view::json(&diff)?);
            return Ok(());
        }
    }

    eprintln!("{}", view::summary(diff.stats()));
    Ok(())
}
