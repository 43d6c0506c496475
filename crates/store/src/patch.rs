use derive_more::From;
use toolkit::{Base64Mode, ToolKind};

use crate::state::{Base64State, DiffState, JsonState, ToolStates, UtmState, WisdomState};

/// Overwrite `field` when the patch carries a value
fn merge<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base64Patch {
    pub input: Option<String>,
    pub output: Option<String>,
    pub mode: Option<Base64Mode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPatch {
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPatch {
    pub text1: Option<String>,
    pub text2: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmPatch {
    pub url: Option<String>,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WisdomPatch {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// A partial update of exactly one tool's slot
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum ToolUpdate {
    Base64(Base64Patch),
    Json(JsonPatch),
    Diff(DiffPatch),
    Utm(UtmPatch),
    Wisdom(WisdomPatch),
}

impl ToolUpdate {
    /// The tool whose slot this update touches
    pub fn tool(&self) -> ToolKind {
        match self {
            ToolUpdate::Base64(_) => ToolKind::Base64,
            ToolUpdate::Json(_) => ToolKind::JsonPrettifier,
            ToolUpdate::Diff(_) => ToolKind::Diff,
            ToolUpdate::Utm(_) => ToolKind::UtmBuilder,
            ToolUpdate::Wisdom(_) => ToolKind::Wisdom,
        }
    }

    /// Merge the patch into its slot, leaving unset fields alone
    pub fn apply(self, states: &mut ToolStates) {
        match self {
            ToolUpdate::Base64(patch) => patch.apply(&mut states.base64),
            ToolUpdate::Json(patch) => patch.apply(&mut states.json),
            ToolUpdate::Diff(patch) => patch.apply(&mut states.diff),
            ToolUpdate::Utm(patch) => patch.apply(&mut states.utm),
            ToolUpdate::Wisdom(patch) => patch.apply(&mut states.wisdom),
        }
    }
}

impl Base64Patch {
    fn apply(self, state: &mut Base64State) {
        merge(&mut state.input, self.input);
        merge(&mut state.output, self.output);
        merge(&mut state.mode, self.mode);
    }
}

impl JsonPatch {
    fn apply(self, state: &mut JsonState) {
        merge(&mut state.input, self.input);
        merge(&mut state.output, self.output);
    }
}

impl DiffPatch {
    fn apply(self, state: &mut DiffState) {
        merge(&mut state.text1, self.text1);
        merge(&mut state.text2, self.text2);
    }
}

impl UtmPatch {
    fn apply(self, state: &mut UtmState) {
        merge(&mut state.url, self.url);
        merge(&mut state.source, self.source);
        merge(&mut state.medium, self.medium);
        merge(&mut state.campaign, self.campaign);
        merge(&mut state.term, self.term);
        merge(&mut state.content, self.content);
        merge(&mut state.output, self.output);
    }
}

impl WisdomPatch {
    fn apply(self, state: &mut WisdomState) {
        merge(&mut state.input, self.input);
        merge(&mut state.output, self.output);
    }
}
