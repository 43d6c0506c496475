use serde::{Deserialize, Serialize};
use toolkit::{Base64Mode, ToolKind, UtmParams};

/// Base64 tool fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Base64State {
    pub input: String,
    pub output: String,
    pub mode: Base64Mode,
}

impl Base64State {
    /// Feed the output back in and flip the direction
    pub fn swap(&mut self) {
        self.input = std::mem::take(&mut self.output);
        self.mode = self.mode.toggled();
    }
}

/// JSON prettifier fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonState {
    pub input: String,
    pub output: String,
}

/// Diff tool fields: the two compared texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffState {
    pub text1: String,
    pub text2: String,
}

/// UTM builder fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtmState {
    pub url: String,
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub term: String,
    pub content: String,
    pub output: String,
}

impl UtmState {
    /// The campaign parameters held in this state
    pub fn params(&self) -> UtmParams {
        UtmParams {
            source: self.source.clone(),
            medium: self.medium.clone(),
            campaign: self.campaign.clone(),
            term: self.term.clone(),
            content: self.content.clone(),
        }
    }
}

/// Wisdom generator fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WisdomState {
    pub input: String,
    pub output: String,
}

/// One slot per tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolStates {
    pub base64: Base64State,
    pub json: JsonState,
    pub diff: DiffState,
    pub utm: UtmState,
    pub wisdom: WisdomState,
}

impl ToolStates {
    /// Render one tool's slot as pretty JSON
    pub fn slot_json(&self, tool: ToolKind) -> serde_json::Result<String> {
        match tool {
            ToolKind::Base64 => serde_json::to_string_pretty(&self.base64),
            ToolKind::JsonPrettifier => serde_json::to_string_pretty(&self.json),
            ToolKind::Diff => serde_json::to_string_pretty(&self.diff),
            ToolKind::UtmBuilder => serde_json::to_string_pretty(&self.utm),
            ToolKind::Wisdom => serde_json::to_string_pretty(&self.wisdom),
        }
    }
}
