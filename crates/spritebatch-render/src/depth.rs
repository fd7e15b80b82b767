//! Depth test presets for sprite rendering.

/// Default depth format used when a depth mode is turned into wgpu state.
pub const DEFAULT_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// How a batch interacts with the depth buffer.
///
/// Sprites are usually ordered on the CPU (see
/// [`SortMode`](crate::SortMode)), so the default disables depth entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthMode {
    /// No depth test, no depth writes.
    #[default]
    None,
    /// Depth test and depth writes enabled.
    Default,
    /// Depth test enabled, depth writes disabled.
    Read,
}

impl DepthMode {
    /// Convert to a wgpu depth-stencil state for the given depth format.
    ///
    /// Returns `None` for [`DepthMode::None`], meaning the pipeline has no
    /// depth attachment.
    pub fn to_depth_stencil_state(
        self,
        format: wgpu::TextureFormat,
    ) -> Option<wgpu::DepthStencilState> {
        let depth_write_enabled = match self {
            DepthMode::None => return None,
            DepthMode::Default => true,
            DepthMode::Read => false,
        };

        Some(wgpu::DepthStencilState {
            format,
            depth_write_enabled,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        })
    }
}
