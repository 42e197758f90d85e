use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
    /// Animate each element the first time it is seen, never again.
    #[serde(default = "default_once")]
    pub once: bool,
    /// Rows an element must be inside the viewport before it triggers.
    #[serde(default = "default_offset")]
    pub offset: u16,
}

fn default_duration() -> u64 {
    650
}
fn default_once() -> bool {
    true
}
fn default_offset() -> u16 {
    2
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration(),
            easing: Easing::default(),
            once: default_once(),
            offset: default_offset(),
        }
    }
}

/// Scroll-triggered fade-in for page elements.
///
/// Trigger positions are page rows. They go stale whenever the content
/// under them moves, and must be recomputed with [`Reveal::refresh_hard`].
#[derive(Debug)]
pub struct Reveal {
    config: AnimationConfig,
    triggers: Vec<(String, u16)>,
    started: HashMap<String, Instant>,
    stale: bool,
}

impl Reveal {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            triggers: Vec::new(),
            started: HashMap::new(),
            stale: true,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replace every trigger position. Elements that disappeared lose their
    /// animation state so a re-added element animates again.
    pub fn refresh_hard(&mut self, triggers: Vec<(String, u16)>) {
        self.started
            .retain(|key, _| triggers.iter().any(|(k, _)| k == key));
        self.triggers = triggers;
        self.stale = false;
    }

    pub fn on_scroll(&mut self, scroll: u16, viewport: u16, now: Instant) {
        let bottom = scroll.saturating_add(viewport);
        for (key, top) in &self.triggers {
            let entered = top.saturating_add(self.config.offset) <= bottom;
            let in_view = *top < bottom;
            if entered && !self.started.contains_key(key) {
                self.started.insert(key.clone(), now);
            } else if !self.config.once && !in_view {
                self.started.remove(key);
            }
        }
    }

    /// Eased progress in `0.0..=1.0`; `0.0` for elements not yet triggered.
    pub fn progress(&self, key: &str, now: Instant) -> f32 {
        let Some(start) = self.started.get(key) else {
            return 0.0;
        };
        let duration = Duration::from_millis(self.config.duration_ms.max(1));
        let t = now.saturating_duration_since(*start).as_secs_f32() / duration.as_secs_f32();
        self.config.easing.apply(t)
    }
}
