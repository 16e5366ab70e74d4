use egui::Pos2;

use crate::config::WiggleConfig;
use crate::element::Element;

/// Phase shift between consecutive flattened coordinates
pub const PHASE_PER_COORDINATE: f32 = 0.37;

/// Offset `base` by `sin(t * frequency + k * 0.37) * amplitude`, where `k` is
/// the flattened coordinate index (x of vertex `i` is `2i`, y is `2i + 1`).
pub fn wiggle_points(base: &[Pos2], t: f32, frequency: f32, amplitude: f32) -> Vec<Pos2> {
    let offset = |k: usize| (t * frequency + k as f32 * PHASE_PER_COORDINATE).sin() * amplitude;
    base.iter()
        .enumerate()
        .map(|(i, p)| Pos2::new(p.x + offset(2 * i), p.y + offset(2 * i + 1)))
        .collect()
}

/// Frame-driven jitter for wiggle-flagged strokes.
///
/// The clock moves by a fixed step per tick, so the animation speed does not
/// depend on the frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct WiggleAnimator {
    config: WiggleConfig,
    time: f32,
}

impl WiggleAnimator {
    pub fn new(config: WiggleConfig) -> Self {
        Self { config, time: 0.0 }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance the clock one step and derive new render points.
    /// The clock keeps running even while nothing wiggles.
    ///
    /// Returns `None` when nothing wiggles, so the caller can skip the
    /// update entirely. Otherwise returns a new list in which only the
    /// wiggling strokes have been replaced.
    pub fn tick(&mut self, elements: &[Element]) -> Option<Vec<Element>> {
        self.time += self.config.time_step;
        if !elements.iter().any(Element::is_wiggling) {
            return None;
        }
        Some(self.frame(elements))
    }

    /// Render points for the current clock value, without advancing it.
    pub fn frame(&self, elements: &[Element]) -> Vec<Element> {
        elements
            .iter()
            .map(|element| match element {
                Element::Stroke(stroke) if stroke.wiggle() => {
                    let points = wiggle_points(
                        stroke.base_points(),
                        self.time,
                        self.config.frequency,
                        self.config.amplitude,
                    );
                    stroke
                        .with_render_points(points)
                        .map_or_else(|| element.clone(), Element::Stroke)
                }
                other => other.clone(),
            })
            .collect()
    }
}

impl Default for WiggleAnimator {
    fn default() -> Self {
        Self::new(WiggleConfig::default())
    }
}
