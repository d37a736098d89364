use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct ContextWindow {
    pub remaining_percentage: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HookModel {
    pub display_name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HookWorkspace {
    pub current_dir: Option<String>,
}

/// The statusLine hook payload Claude Code writes to stdin. Only the fields
/// this display consumes are modeled; unknown fields are ignored and every
/// modeled field is optional so a partial payload still renders a partial
/// line.
#[derive(Deserialize, Debug, Default)]
pub struct StatusInput {
    #[serde(default)]
    pub context_window: ContextWindow,
    #[serde(default)]
    pub workspace: HookWorkspace,
    #[serde(default)]
    pub model: HookModel,
}
