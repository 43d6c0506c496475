use derive_more::Display;

/// The tools offered by the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ToolKind {
    #[display(fmt = "Base64")]
    Base64,

    #[display(fmt = "UTM Builder")]
    UtmBuilder,

    #[display(fmt = "JSON Prettifier")]
    JsonPrettifier,

    #[display(fmt = "Diff Tool")]
    Diff,

    #[display(fmt = "Wisdom")]
    Wisdom,
}

impl ToolKind {
    /// Every tool, in the order the home page lists them
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Base64,
        ToolKind::UtmBuilder,
        ToolKind::JsonPrettifier,
        ToolKind::Diff,
        ToolKind::Wisdom,
    ];

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            ToolKind::Base64 => "Encode and decode Base64 strings",
            ToolKind::UtmBuilder => "Build UTM campaign URLs",
            ToolKind::JsonPrettifier => "Format and validate JSON",
            ToolKind::Diff => "Compare text differences",
            ToolKind::Wisdom => "External tool for wisdom quotes",
        }
    }

    /// Where the tool lives; external tools use an absolute URL
    pub fn route(self) -> &'static str {
        match self {
            ToolKind::Base64 => "/base64",
            ToolKind::UtmBuilder => "/utm-builder",
            ToolKind::JsonPrettifier => "/prettyjson",
            ToolKind::Diff => "/difftool",
            ToolKind::Wisdom => "https://areguig.github.io/wisdom",
        }
    }

    pub fn is_external(self) -> bool {
        matches!(self, ToolKind::Wisdom)
    }

    /// Identifier used for the tool's slot in the state store
    pub fn slot(self) -> &'static str {
        match self {
            ToolKind::Base64 => "base64",
            ToolKind::UtmBuilder => "utm",
            ToolKind::JsonPrettifier => "json",
            ToolKind::Diff => "diff",
            ToolKind::Wisdom => "wisdom",
        }
    }

    /// Find a tool by its slot identifier
    pub fn from_slot(slot: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.slot() == slot)
    }
}
