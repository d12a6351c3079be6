use serde::{Deserialize, Serialize};

use super::shapes::ShapeKind;

/// Flat, named construction fields for an actor.
///
/// Unspecified fields keep their defaults (50x50 at the origin, heading 10°,
/// standing still, unrotated). JSON keys are camelCase, and the shape is
/// selected with `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActorConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame
    pub speed: f32,
    /// Heading in degrees
    pub direction: f32,
    pub rotation: f32,
    /// Rotation added every frame (degrees)
    pub spin: f32,
    /// Heading drift per frame (degrees)
    pub turn_rate: f32,
    /// Speed added every frame
    pub acceleration: f32,
    #[serde(rename = "type")]
    pub shape: Option<String>,
    /// Sprite sheet source for `Image` actors
    pub src: Option<String>,
    pub fill_style: Option<String>,
    pub opacity: f32,
    /// Advance the sprite frame every N ticks (0 = never)
    pub change_frame_every: u32,
    /// Number of frames laid out horizontally in the sprite sheet
    pub frame_count: u32,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 50.0,
            speed: 0.0,
            direction: 10.0,
            rotation: 0.0,
            spin: 0.0,
            turn_rate: 0.0,
            acceleration: 0.0,
            shape: None,
            src: None,
            fill_style: None,
            opacity: 1.0,
            change_frame_every: 0,
            frame_count: 1,
        }
    }
}

impl ActorConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ActorConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn moving(mut self, speed: f32, direction: f32) -> Self {
        self.speed = speed;
        self.direction = direction;
        self
    }

    pub fn shaped(mut self, kind: ShapeKind) -> Self {
        self.shape = Some(kind.name().to_string());
        self
    }

    fn validate(&self) -> Result<(), String> {
        let numbers = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("speed", self.speed),
            ("direction", self.direction),
            ("rotation", self.rotation),
            ("spin", self.spin),
            ("turnRate", self.turn_rate),
            ("acceleration", self.acceleration),
            ("opacity", self.opacity),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(format!("actor field {} must be finite", name));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(format!(
                "actor size must be non-negative: {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Stage-wide settings (`anim.config` equivalent).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StageSettings {
    /// Ticks per second requested from the host scheduler
    pub fps: f32,
    /// Emit bounding-box overlays in the draw list
    pub bounding_boxes: bool,
    /// Background grid spacing in pixels, forwarded to the draw list
    pub canvas_grid: Option<u32>,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            fps: 30.0,
            bounding_boxes: false,
            canvas_grid: None,
        }
    }
}

impl StageSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: StageSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if !settings.fps.is_finite() || settings.fps <= 0.0 {
            return Err(format!("fps must be positive, got {}", settings.fps));
        }
        Ok(settings)
    }

    /// Delay between ticks for the host scheduler
    pub fn frame_delay_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let cfg = ActorConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ActorConfig::default());
        assert_eq!(cfg.width, 50.0);
        assert_eq!(cfg.height, 50.0);
        assert_eq!(cfg.direction, 10.0);
        assert_eq!(cfg.speed, 0.0);
    }

    #[test]
    fn specified_fields_override_defaults() {
        let cfg = ActorConfig::from_json(
            r#"{"x": 12, "width": 10, "type": "Circle", "turnRate": 2.5, "fillStyle": "red"}"#,
        )
        .unwrap();
        assert_eq!(cfg.x, 12.0);
        assert_eq!(cfg.width, 10.0);
        assert_eq!(cfg.height, 50.0);
        assert_eq!(cfg.shape.as_deref(), Some("Circle"));
        assert_eq!(cfg.turn_rate, 2.5);
        assert_eq!(cfg.fill_style.as_deref(), Some("red"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ActorConfig::from_json("{\"x\": \"left\"}").is_err());
        assert!(ActorConfig::from_json("not json").is_err());
    }

    #[test]
    fn negative_size_is_rejected() {
        let err = ActorConfig::from_json(r#"{"width": -5}"#).unwrap_err();
        assert!(err.contains("non-negative"));
    }

    #[test]
    fn settings_reject_zero_fps() {
        assert!(StageSettings::from_json(r#"{"fps": 0}"#).is_err());
        let s = StageSettings::from_json(r#"{"fps": 60, "boundingBoxes": true}"#).unwrap();
        assert_eq!(s.fps, 60.0);
        assert!(s.bounding_boxes);
        assert!((s.frame_delay_ms() - 16.666).abs() < 0.01);
    }
}
