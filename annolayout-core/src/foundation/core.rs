use crate::foundation::error::{LayoutError, LayoutResult};

/// A position on one annotation axis: a character offset or a frame number.
pub type Coord = i64;

/// Sentinel coordinate for spans that have no position (null instantiations).
pub const NO_COORD: Coord = -1;

/// Which axis the coordinates of a computation live on.
///
/// The two kinds are never mixed within one layout.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Character offsets into a sentence (text corpus annotation).
    #[default]
    Char,
    /// Frame numbers on a video timeline (deixis/video annotation).
    Frame,
}

impl AxisKind {
    /// Fixed pixels-per-coordinate multiplier used when the config does not override it.
    pub fn default_pixel_scale(self) -> f64 {
        match self {
            Self::Char => 8.0,
            Self::Frame => 2.0,
        }
    }
}

/// Video frame rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero components.
    pub fn new(num: u32, den: u32) -> LayoutResult<Self> {
        if den == 0 {
            return Err(LayoutError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LayoutError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Start time of frame `frame` in seconds.
    pub fn frames_to_secs(self, frame: Coord) -> f64 {
        (frame as f64) * self.frame_duration_secs()
    }

    /// Frame containing time `secs`, clamped at zero.
    pub fn secs_to_frames_floor(self, secs: f64) -> Coord {
        (secs * self.as_f64()).floor().max(0.0) as Coord
    }

    /// Last frame that starts strictly before time `secs`, never below `floor`.
    pub(crate) fn secs_to_last_frame(self, secs: f64, floor: Coord) -> Coord {
        let end = (secs * self.as_f64()).ceil() as Coord - 1;
        end.max(floor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
