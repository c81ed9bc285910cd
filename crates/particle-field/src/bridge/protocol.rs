//! Configuration bridge between host controls and the field.
//!
//! Controls deliver values as widget strings (or JSON scalars) under the
//! parameter names below. Parsing happens here, once, so the field's
//! setters only ever see typed, finite numbers.
//!
//! JSON messages:
//! ```text
//! {"type":"param","name":"particleCount","value":"150"}
//! {"type":"command","command":"togglePause"}
//! {"type":"resize","width":1280,"height":720}
//! {"type":"displayMode","mode":"fullscreen"}
//! {"type":"pointerMove","x":10,"y":20}
//! {"type":"pointerLeave"}
//! ```

use std::fmt;

use serde::Deserialize;

use crate::api::params::{ColorScheme, PARTICLE_COUNT_LIMIT};
use crate::core::field::ParticleField;
use crate::core::layout::DisplayMode;
use crate::input::queue::InputEvent;

/// Key code that exits fullscreen.
pub const KEY_ESCAPE: u32 = 27;

/// Errors produced while decoding host configuration input.
#[derive(Debug)]
pub enum ConfigError {
    /// No parameter with this name.
    UnknownParameter(String),
    /// The value could not be parsed or lies outside the parameter's domain.
    InvalidValue { name: &'static str, value: String },
    /// No color scheme with this name.
    UnknownColorScheme(String),
    /// No command with this name.
    UnknownCommand(String),
    /// The message was not valid JSON or had the wrong shape.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownParameter(name) => write!(f, "unknown parameter '{}'", name),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "invalid value '{}' for {}", value, name)
            }
            ConfigError::UnknownColorScheme(name) => write!(f, "unknown color scheme '{}'", name),
            ConfigError::UnknownCommand(name) => write!(f, "unknown command '{}'", name),
            ConfigError::Json(e) => write!(f, "malformed bridge message: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// A single typed parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamUpdate {
    ParticleCount(usize),
    ParticleSpeed(f32),
    ParticleSize(f32),
    SizeRandomness(f32),
    ConnectionDistance(f32),
    PointerConnectionDistance(f32),
    PointerForce(f32),
    ColorScheme(ColorScheme),
}

impl ParamUpdate {
    /// Decode a widget value for the named parameter.
    ///
    /// Count, size and the two distances are whole-pixel sliders, so their
    /// values are truncated to integers. Older `mouse*` names are accepted.
    pub fn parse(name: &str, value: &str) -> Result<Self, ConfigError> {
        let name = canonical_name(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))?;
        let update = match name {
            "particleCount" => ParamUpdate::ParticleCount(count(name, value)?),
            "particleSpeed" => ParamUpdate::ParticleSpeed(number(name, value)?),
            "particleSize" => ParamUpdate::ParticleSize(whole(name, value)?),
            "sizeRandomness" => ParamUpdate::SizeRandomness(number(name, value)?),
            "connectionDistance" => ParamUpdate::ConnectionDistance(whole(name, value)?),
            "pointerConnectionDistance" => {
                ParamUpdate::PointerConnectionDistance(whole(name, value)?)
            }
            "pointerForce" => ParamUpdate::PointerForce(number(name, value)?),
            "colorScheme" => ColorScheme::from_name(value.trim())
                .map(ParamUpdate::ColorScheme)
                .ok_or_else(|| ConfigError::UnknownColorScheme(value.to_string()))?,
            other => return Err(ConfigError::UnknownParameter(other.to_string())),
        };
        Ok(update)
    }

    /// Canonical parameter name.
    pub fn name(&self) -> &'static str {
        match self {
            ParamUpdate::ParticleCount(_) => "particleCount",
            ParamUpdate::ParticleSpeed(_) => "particleSpeed",
            ParamUpdate::ParticleSize(_) => "particleSize",
            ParamUpdate::SizeRandomness(_) => "sizeRandomness",
            ParamUpdate::ConnectionDistance(_) => "connectionDistance",
            ParamUpdate::PointerConnectionDistance(_) => "pointerConnectionDistance",
            ParamUpdate::PointerForce(_) => "pointerForce",
            ParamUpdate::ColorScheme(_) => "colorScheme",
        }
    }

    /// Route the change to the matching field setter.
    pub fn apply(self, field: &mut ParticleField) {
        match self {
            ParamUpdate::ParticleCount(n) => field.set_particle_count(n),
            ParamUpdate::ParticleSpeed(v) => field.set_particle_speed(v),
            ParamUpdate::ParticleSize(v) => field.set_particle_size(v),
            ParamUpdate::SizeRandomness(v) => field.set_size_randomness(v),
            ParamUpdate::ConnectionDistance(v) => field.set_connection_distance(v),
            ParamUpdate::PointerConnectionDistance(v) => {
                field.set_pointer_connection_distance(v)
            }
            ParamUpdate::PointerForce(v) => field.set_pointer_force(v),
            ParamUpdate::ColorScheme(s) => field.set_color_scheme(s),
        }
    }
}

/// Canonical name for a parameter name or one of its aliases.
fn canonical_name(name: &str) -> Option<&'static str> {
    let canonical = match name {
        "particleCount" => "particleCount",
        "particleSpeed" => "particleSpeed",
        "particleSize" => "particleSize",
        "sizeRandomness" => "sizeRandomness",
        "connectionDistance" => "connectionDistance",
        "pointerConnectionDistance" | "mouseConnectionDistance" => "pointerConnectionDistance",
        "pointerForce" | "mouseForce" => "pointerForce",
        "colorScheme" => "colorScheme",
        _ => return None,
    };
    Some(canonical)
}

fn number(name: &'static str, value: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
}

/// Particle count, at most [`PARTICLE_COUNT_LIMIT`].
fn count(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    let v = whole(name, value)?;
    if v > PARTICLE_COUNT_LIMIT as f32 {
        return Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        });
    }
    Ok(v as usize)
}

/// Non-negative whole number.
fn whole(name: &'static str, value: &str) -> Result<f32, ConfigError> {
    let v = number(name, value)?.trunc();
    if v < 0.0 {
        return Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        });
    }
    Ok(v)
}

/// Discrete button commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    TogglePause,
    ToggleFullscreen,
}

impl Command {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "reset" => Ok(Command::Reset),
            "togglePause" => Ok(Command::TogglePause),
            "toggleFullscreen" => Ok(Command::ToggleFullscreen),
            _ => Err(ConfigError::UnknownCommand(name.to_string())),
        }
    }
}

/// What the host should do with its fullscreen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

impl FullscreenRequest {
    /// The toggle for the current mode.
    pub fn toggle_from(mode: DisplayMode) -> Self {
        if mode == DisplayMode::Fullscreen {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        }
    }

    /// Mode to report once the host has carried out the request.
    pub fn resulting_mode(self) -> DisplayMode {
        match self {
            FullscreenRequest::Enter => DisplayMode::Fullscreen,
            FullscreenRequest::Exit => DisplayMode::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FullscreenRequest::Enter => "enter",
            FullscreenRequest::Exit => "exit",
        }
    }
}

/// Pause button label.
pub fn pause_label(paused: bool) -> &'static str {
    if paused {
        "Resume"
    } else {
        "Pause"
    }
}

/// Fullscreen button label.
pub fn fullscreen_label(mode: DisplayMode) -> &'static str {
    if mode == DisplayMode::Fullscreen {
        "Show Menu"
    } else {
        "Fullscreen"
    }
}

/// A message from the host, as JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BridgeMessage {
    Param {
        name: String,
        value: serde_json::Value,
    },
    Command {
        command: String,
    },
    Resize {
        width: f32,
        height: f32,
    },
    DisplayMode {
        mode: DisplayMode,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerLeave,
}

impl BridgeMessage {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode into a typed input event.
    pub fn into_event(self) -> Result<InputEvent, ConfigError> {
        let event = match self {
            BridgeMessage::Param { name, value } => {
                let text = match &value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    other => {
                        let name = canonical_name(&name)
                            .ok_or_else(|| ConfigError::UnknownParameter(name.clone()))?;
                        return Err(ConfigError::InvalidValue {
                            name,
                            value: other.to_string(),
                        });
                    }
                };
                InputEvent::Param(ParamUpdate::parse(&name, &text)?)
            }
            BridgeMessage::Command { command } => InputEvent::Command(Command::from_name(&command)?),
            BridgeMessage::Resize { width, height } => InputEvent::Resize { width, height },
            BridgeMessage::DisplayMode { mode } => InputEvent::DisplayMode(mode),
            BridgeMessage::PointerMove { x, y } => InputEvent::PointerMove { x, y },
            BridgeMessage::PointerLeave => InputEvent::PointerLeave,
        };
        Ok(event)
    }
}

/// Parse a JSON message straight into an input event.
pub fn decode_message(json: &str) -> Result<InputEvent, ConfigError> {
    BridgeMessage::from_json(json)?.into_event()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::FieldConfig;
    use crate::core::layout::Viewport;

    #[test]
    fn parses_every_parameter() {
        assert_eq!(
            ParamUpdate::parse("particleCount", "150").unwrap(),
            ParamUpdate::ParticleCount(150)
        );
        assert_eq!(
            ParamUpdate::parse("particleSpeed", "1.5").unwrap(),
            ParamUpdate::ParticleSpeed(1.5)
        );
        assert_eq!(
            ParamUpdate::parse("particleSize", "4").unwrap(),
            ParamUpdate::ParticleSize(4.0)
        );
        assert_eq!(
            ParamUpdate::parse("sizeRandomness", "0.3").unwrap(),
            ParamUpdate::SizeRandomness(0.3)
        );
        assert_eq!(
            ParamUpdate::parse("connectionDistance", "120").unwrap(),
            ParamUpdate::ConnectionDistance(120.0)
        );
        assert_eq!(
            ParamUpdate::parse("pointerConnectionDistance", "250").unwrap(),
            ParamUpdate::PointerConnectionDistance(250.0)
        );
        assert_eq!(
            ParamUpdate::parse("pointerForce", "-2.5").unwrap(),
            ParamUpdate::PointerForce(-2.5)
        );
        assert_eq!(
            ParamUpdate::parse("colorScheme", "stardust").unwrap(),
            ParamUpdate::ColorScheme(ColorScheme::Stardust)
        );
    }

    #[test]
    fn accepts_mouse_aliases() {
        assert_eq!(
            ParamUpdate::parse("mouseForce", "3").unwrap(),
            ParamUpdate::PointerForce(3.0)
        );
        let update = ParamUpdate::parse("mouseConnectionDistance", "90").unwrap();
        assert_eq!(update.name(), "pointerConnectionDistance");
    }

    #[test]
    fn whole_pixel_sliders_truncate() {
        assert_eq!(
            ParamUpdate::parse("particleCount", "12.9").unwrap(),
            ParamUpdate::ParticleCount(12)
        );
        assert_eq!(
            ParamUpdate::parse("particleSize", " 5.7 ").unwrap(),
            ParamUpdate::ParticleSize(5.0)
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            ParamUpdate::parse("gravity", "1"),
            Err(ConfigError::UnknownParameter(_))
        ));
        assert!(matches!(
            ParamUpdate::parse("particleSpeed", "fast"),
            Err(ConfigError::InvalidValue { name: "particleSpeed", .. })
        ));
        assert!(matches!(
            ParamUpdate::parse("particleCount", "-4"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            ParamUpdate::parse("particleCount", "1e30"),
            Err(ConfigError::InvalidValue { name: "particleCount", .. })
        ));
        assert!(matches!(
            ParamUpdate::parse("particleCount", "10001"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(
            ParamUpdate::parse("particleCount", "10000").unwrap(),
            ParamUpdate::ParticleCount(PARTICLE_COUNT_LIMIT)
        );
        assert!(matches!(
            ParamUpdate::parse("pointerForce", "NaN"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            ParamUpdate::parse("colorScheme", "plasma"),
            Err(ConfigError::UnknownColorScheme(_))
        ));
    }

    #[test]
    fn apply_reaches_the_field() {
        let mut field = ParticleField::new(
            &FieldConfig::default(),
            Viewport::new(500.0, 500.0),
            DisplayMode::Fullscreen,
        );
        ParamUpdate::ParticleCount(40).apply(&mut field);
        ParamUpdate::PointerForce(-3.0).apply(&mut field);
        ParamUpdate::ColorScheme(ColorScheme::Cosmic).apply(&mut field);
        assert_eq!(field.particles().len(), 40);
        assert_eq!(field.params().pointer_force, -3.0);
        assert_eq!(field.params().color_scheme, ColorScheme::Cosmic);
    }

    #[test]
    fn decodes_json_messages() {
        assert_eq!(
            decode_message(r#"{"type":"param","name":"particleCount","value":"150"}"#).unwrap(),
            InputEvent::Param(ParamUpdate::ParticleCount(150))
        );
        assert_eq!(
            decode_message(r#"{"type":"param","name":"particleSpeed","value":2.5}"#).unwrap(),
            InputEvent::Param(ParamUpdate::ParticleSpeed(2.5))
        );
        assert_eq!(
            decode_message(r#"{"type":"command","command":"togglePause"}"#).unwrap(),
            InputEvent::Command(Command::TogglePause)
        );
        assert_eq!(
            decode_message(r#"{"type":"resize","width":800,"height":600}"#).unwrap(),
            InputEvent::Resize { width: 800.0, height: 600.0 }
        );
        assert_eq!(
            decode_message(r#"{"type":"displayMode","mode":"controlsHidden"}"#).unwrap(),
            InputEvent::DisplayMode(DisplayMode::ControlsHidden)
        );
        assert_eq!(
            decode_message(r#"{"type":"pointerLeave"}"#).unwrap(),
            InputEvent::PointerLeave
        );
    }

    #[test]
    fn malformed_messages_are_errors() {
        assert!(matches!(decode_message("not json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            decode_message(r#"{"type":"command","command":"explode"}"#),
            Err(ConfigError::UnknownCommand(_))
        ));
        assert!(matches!(
            decode_message(r#"{"type":"param","name":"particleCount","value":[1]}"#),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn labels_track_state() {
        assert_eq!(pause_label(false), "Pause");
        assert_eq!(pause_label(true), "Resume");
        assert_eq!(fullscreen_label(DisplayMode::Normal), "Fullscreen");
        assert_eq!(fullscreen_label(DisplayMode::Fullscreen), "Show Menu");
        assert_eq!(
            FullscreenRequest::toggle_from(DisplayMode::Normal),
            FullscreenRequest::Enter
        );
        assert_eq!(
            FullscreenRequest::toggle_from(DisplayMode::Fullscreen).resulting_mode(),
            DisplayMode::Normal
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ParamUpdate::parse("particleSpeed", "fast").unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'fast' for particleSpeed");
    }
}
