use crate::{blend::BlendMode, depth::DepthMode, raster::RasterMode, sampler::SamplerMode};

/// The fixed-function state a batch is drawn with.
///
/// The default is the sprite baseline: premultiplied alpha blending, no
/// depth, counter-clockwise culling, linear clamped sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderState {
    pub blend: BlendMode,
    pub depth: DepthMode,
    pub raster: RasterMode,
    pub sampler: SamplerMode,
}

impl RenderState {
    /// Fill unset overrides from the baseline.
    pub fn resolve(
        blend: Option<BlendMode>,
        depth: Option<DepthMode>,
        raster: Option<RasterMode>,
        sampler: Option<SamplerMode>,
    ) -> Self {
        let baseline = Self::default();
        Self {
            blend: blend.unwrap_or(baseline.blend),
            depth: depth.unwrap_or(baseline.depth),
            raster: raster.unwrap_or(baseline.raster),
            sampler: sampler.unwrap_or(baseline.sampler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline() {
        let state = RenderState::default();
        assert_eq!(state.blend, BlendMode::AlphaBlend);
        assert_eq!(state.depth, DepthMode::None);
        assert_eq!(state.raster, RasterMode::CullCounterClockwise);
        assert_eq!(state.sampler, SamplerMode::LinearClamp);
    }

    #[test]
    fn test_resolve_keeps_overrides() {
        let state = RenderState::resolve(Some(BlendMode::Additive), None, None, Some(SamplerMode::PointClamp));
        assert_eq!(state.blend, BlendMode::Additive);
        assert_eq!(state.depth, DepthMode::None);
        assert_eq!(state.sampler, SamplerMode::PointClamp);
    }
}
