use serde::{Deserialize, Serialize};

use crate::choice::{ChoiceItem, ChoiceList};

/// Which iteration of the landing animation to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// stroke draw + cross-fade
    Reveal,
    /// reveal + background dimming
    Dimmed,
    /// dimmed + typewriter dialogue + choices
    #[default]
    Dialogue,
}

impl Variant {
    pub fn dims_background(self) -> bool {
        !matches!(self, Variant::Reveal)
    }

    pub fn has_dialogue(self) -> bool {
        matches!(self, Variant::Dialogue)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub assets_path: String,
    pub log_path:    String,
    pub log_level:   String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub variant: Variant,
    /// 相对 assets_path
    pub vector_asset: String,
    pub raster_asset: String,
    pub path_delay_ms: u64,
    pub pre_draw_pause_ms: u64,
    pub post_draw_pause_ms: u64,
    pub wait_for_draw: bool,
    pub dim_opacity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    pub tick_ms: u64,
    pub line_pause_ms: u64,
    pub lines: Vec<String>,
}

/// Identifiers of the surface containers the sequence writes into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub stage: String,
    pub writer: String,
    pub background: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            assets_path: "assets/".into(),
            log_path:    "logs/".into(),
            log_level:   "warn".into(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            vector_asset: "smiley.svg".into(),
            raster_asset: "smiley.png".into(),
            path_delay_ms: 25,
            pre_draw_pause_ms: 200,
            post_draw_pause_ms: 1000,
            wait_for_draw: true,
            dim_opacity: 0.4,
        }
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            tick_ms: 25,
            line_pause_ms: 500,
            lines: vec![
                "Oh, hello there.".into(),
                "You found my little corner of the internet.".into(),
                "Where would you like to go?".into(),
            ],
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            stage: "smiley".into(),
            writer: "writer".into(),
            background: "main".into(),
        }
    }
}

/// Everything the sequencer needs, gathered from the config sections.
#[derive(Debug, Clone)]
pub struct SequenceConfig {
    pub animation: AnimationConfig,
    pub dialogue: DialogueConfig,
    pub containers: ContainerConfig,
    pub choices: Vec<ChoiceItem>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            dialogue: DialogueConfig::default(),
            containers: ContainerConfig::default(),
            choices: ChoiceList::default().0,
        }
    }
}

impl SequenceConfig {
    /// Reads `[animation]`, `[dialogue]`, `[containers]` and `[[choices]]`
    /// from the shared config store.
    pub fn from_shared() -> Self {
        let choices: ChoiceList = doodle_shared::config::get("choices");
        Self {
            animation: doodle_shared::config::get("animation"),
            dialogue: doodle_shared::config::get("dialogue"),
            containers: doodle_shared::config::get("containers"),
            choices: choices.0,
        }
    }

    pub fn from_table(table: &doodle_shared::ConfigTable) -> Self {
        let choices: ChoiceList = table.section("choices");
        Self {
            animation: table.section("animation"),
            dialogue: table.section("dialogue"),
            containers: table.section("containers"),
            choices: choices.0,
        }
    }
}
