// SPDX-License-Identifier: MPL-2.0
//! Post-processing effect behind the FAB cluster.
//!
//! The effect is a two-stage filter chain: a large blur followed by a color
//! matrix that leaves RGB untouched and hard-thresholds the alpha channel.
//! Blurring the FAB silhouettes and keeping only the mostly-opaque pixels
//! carves the "goo" membrane that appears to connect the buttons while they
//! travel.
//!
//! The chain is modelled as data here; the GPU implementation lives in
//! [`goo_shader`] and is compiled in behind the `render-effects` feature.
//! When the capability is missing the screen silently composes the plain
//! FAB layer only; there is no error surface.

#[cfg(feature = "render-effects")]
pub mod goo_shader;

/// Edge handling of the blur stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMode {
    Clamp,
    Repeat,
    Mirror,
}

/// Gaussian-style blur stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurSpec {
    pub radius_x: f32,
    pub radius_y: f32,
    pub tile_mode: TileMode,
}

/// Alpha-channel remap on the 0–255 scale; RGB rows are identity.
///
/// The constants encode a hard cutoff: `alpha' = scale · alpha + offset`,
/// clamped to the channel range. They are carried verbatim from the source
/// effect rather than re-derived from the intended visual threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaMatrix {
    pub scale: f32,
    pub offset: f32,
}

impl AlphaMatrix {
    /// Applies the remap to an alpha value on the 0–255 scale.
    #[must_use]
    pub fn apply(self, alpha: f32) -> f32 {
        (self.scale * alpha + self.offset).clamp(0.0, 255.0)
    }

    /// The lowest 0–255 alpha that survives the remap with any output.
    #[must_use]
    pub fn threshold(self) -> f32 {
        -self.offset / self.scale
    }

    /// The same remap expressed for normalized (0–1) alpha values, as the
    /// shader consumes it.
    #[must_use]
    pub fn normalized(self) -> (f32, f32) {
        (self.scale, self.offset / 255.0)
    }
}

/// The composed filter chain: blur first, then the alpha remap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEffect {
    pub blur: BlurSpec,
    pub alpha: AlphaMatrix,
}

impl RenderEffect {
    /// The goo effect used behind the FAB cluster.
    #[must_use]
    pub fn goo() -> Self {
        Self {
            blur: BlurSpec {
                radius_x: 80.0,
                radius_y: 80.0,
                tile_mode: TileMode::Mirror,
            },
            alpha: AlphaMatrix {
                scale: 50.0,
                offset: -5000.0,
            },
        }
    }
}

/// What the platform can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether the GPU shader pipeline for the filtered layer is available.
    pub shader_pipeline: bool,
}

impl Capabilities {
    /// Detects the capability once at startup.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            shader_pipeline: cfg!(feature = "render-effects"),
        }
    }
}

/// Strategy selected once at composition time: either the filtered layer is
/// drawn underneath the plain one, or the plain layer stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectMode {
    Filtered,
    Plain,
}

impl EffectMode {
    /// Combines the detected capability with the user's veto.
    #[must_use]
    pub fn select(capabilities: Capabilities, enabled: bool) -> Self {
        if capabilities.shader_pipeline && enabled {
            EffectMode::Filtered
        } else {
            EffectMode::Plain
        }
    }
}
