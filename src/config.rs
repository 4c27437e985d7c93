use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::{ConfigError, ConfigResult};
use crate::tools::ToolMode;

/// Historical generations of the program, each reproducible as a preset
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// Pencil only
    Sketch,
    /// Pencil and eraser; picking a color switches back to the pencil
    Eraser,
    /// Adds square and circle outlines
    Shapes,
    /// Adds text labels and a font size setting
    #[default]
    Text,
}

/// Font size bounds for the text tool, in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontLimits {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for FontLimits {
    fn default() -> Self {
        Self {
            default: 12,
            min: 6,
            max: 120,
        }
    }
}

impl FontLimits {
    pub fn contains(&self, size: u32) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

/// Everything a drawing session needs to know at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigDocument")]
pub struct SessionConfig {
    pub edition: Edition,
    pub window_title: String,
    /// Tools in toolbar order
    pub tools: Vec<ToolMode>,
    pub stroke_color: String,
    pub background_color: String,
    pub default_width: u32,
    pub width_presets: Vec<u32>,
    pub max_custom_width: u32,
    /// `None` for editions without the text tool
    pub font: Option<FontLimits>,
    pub color_selection_forces_pencil_mode: bool,
}

/// A config file as written by hand: any field left out comes from the preset of
/// the edition it names, or of the default edition when it names none.
#[derive(Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    edition: Edition,
    window_title: Option<String>,
    tools: Option<Vec<ToolMode>>,
    stroke_color: Option<String>,
    background_color: Option<String>,
    default_width: Option<u32>,
    width_presets: Option<Vec<u32>>,
    max_custom_width: Option<u32>,
    // an explicit `null` turns the text tool's font off, so keep it apart from a missing key
    #[serde(default, deserialize_with = "present")]
    font: Option<Option<FontLimits>>,
    color_selection_forces_pencil_mode: Option<bool>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<ConfigDocument> for SessionConfig {
    fn from(doc: ConfigDocument) -> Self {
        let preset = Self::for_edition(doc.edition);
        Self {
            edition: doc.edition,
            window_title: doc.window_title.unwrap_or(preset.window_title),
            tools: doc.tools.unwrap_or(preset.tools),
            stroke_color: doc.stroke_color.unwrap_or(preset.stroke_color),
            background_color: doc.background_color.unwrap_or(preset.background_color),
            default_width: doc.default_width.unwrap_or(preset.default_width),
            width_presets: doc.width_presets.unwrap_or(preset.width_presets),
            max_custom_width: doc.max_custom_width.unwrap_or(preset.max_custom_width),
            font: doc.font.unwrap_or(preset.font),
            color_selection_forces_pencil_mode: doc
                .color_selection_forces_pencil_mode
                .unwrap_or(preset.color_selection_forces_pencil_mode),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_edition(Edition::default())
    }
}

impl SessionConfig {
    pub fn for_edition(edition: Edition) -> Self {
        use ToolMode::*;

        let base = Self {
            edition,
            window_title: String::new(),
            tools: vec![Pencil],
            stroke_color: "#000000".to_owned(),
            background_color: "#ffffff".to_owned(),
            default_width: 2,
            width_presets: vec![2, 5, 10],
            max_custom_width: 100,
            font: None,
            color_selection_forces_pencil_mode: false,
        };

        match edition {
            Edition::Sketch => Self {
                window_title: "Humming Paint v0.1".to_owned(),
                max_custom_width: 50,
                ..base
            },
            Edition::Eraser => Self {
                window_title: "Humming Paint v2.0 (with Eraser!)".to_owned(),
                tools: vec![Pencil, Eraser],
                width_presets: vec![2, 5, 10, 20],
                color_selection_forces_pencil_mode: true,
                ..base
            },
            Edition::Shapes => Self {
                window_title: "Humming Paint 3.0 (With drawing figures!)".to_owned(),
                tools: vec![Pencil, Eraser, Square, Circle],
                default_width: 1,
                width_presets: vec![1, 3, 5, 10],
                ..base
            },
            Edition::Text => Self {
                window_title: "Humming Paint 4.0 (With text!)".to_owned(),
                tools: vec![Pencil, Eraser, Square, Circle, Text],
                default_width: 1,
                width_presets: vec![1, 3, 5, 10],
                font: Some(FontLimits::default()),
                ..base
            },
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.tools.is_empty() {
            return Err(ConfigError::NoTools);
        }
        for (i, tool) in self.tools.iter().enumerate() {
            if self.tools[..i].contains(tool) {
                return Err(ConfigError::DuplicateTool(*tool));
            }
        }

        self.stroke_color()?;
        self.background_color()?;

        if self.max_custom_width == 0 {
            return Err(ConfigError::Inconsistent("max_custom_width must be at least 1"));
        }
        for &width in std::iter::once(&self.default_width).chain(&self.width_presets) {
            if width == 0 || width > self.max_custom_width {
                return Err(ConfigError::WidthOutOfRange {
                    width,
                    max: self.max_custom_width,
                });
            }
        }

        match (self.font, self.offers(ToolMode::Text)) {
            (Some(font), _) => {
                if font.min == 0 || font.min > font.max {
                    return Err(ConfigError::FontLimits(format!(
                        "min {} and max {} do not form a range",
                        font.min, font.max
                    )));
                }
                if !font.contains(font.default) {
                    return Err(ConfigError::FontLimits(format!(
                        "default {} is outside {}..={}",
                        font.default, font.min, font.max
                    )));
                }
            }
            (None, true) => {
                return Err(ConfigError::Inconsistent("the text tool needs font limits"));
            }
            (None, false) => {}
        }

        if self.color_selection_forces_pencil_mode && !self.offers(ToolMode::Pencil) {
            return Err(ConfigError::Inconsistent(
                "color_selection_forces_pencil_mode requires the pencil tool",
            ));
        }

        Ok(())
    }

    pub fn offers(&self, mode: ToolMode) -> bool {
        self.tools.contains(&mode)
    }

    /// Mode active at startup: the pencil when offered, else the first tool.
    pub fn initial_mode(&self) -> ToolMode {
        if self.offers(ToolMode::Pencil) {
            ToolMode::Pencil
        } else {
            self.tools.first().copied().unwrap_or_default()
        }
    }

    pub fn stroke_color(&self) -> ConfigResult<Color32> {
        Ok(color::parse_hex(&self.stroke_color)?)
    }

    pub fn background_color(&self) -> ConfigResult<Color32> {
        Ok(color::parse_hex(&self.background_color)?)
    }
}
