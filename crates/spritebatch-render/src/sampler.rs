//! Sampler presets for sprite textures.

/// Filtering and addressing used when sampling sprite textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SamplerMode {
    /// Nearest filtering, clamp to edge. Crisp pixel art.
    PointClamp,
    /// Nearest filtering, repeat.
    PointWrap,
    /// Linear filtering, clamp to edge. The batch default.
    #[default]
    LinearClamp,
    /// Linear filtering, repeat.
    LinearWrap,
    /// Anisotropic filtering, clamp to edge.
    AnisotropicClamp,
    /// Anisotropic filtering, repeat.
    AnisotropicWrap,
}

/// Anisotropy used by the anisotropic presets.
const MAX_ANISOTROPY: u16 = 16;

impl SamplerMode {
    pub fn address_mode(self) -> wgpu::AddressMode {
        match self {
            SamplerMode::PointClamp | SamplerMode::LinearClamp | SamplerMode::AnisotropicClamp => {
                wgpu::AddressMode::ClampToEdge
            }
            SamplerMode::PointWrap | SamplerMode::LinearWrap | SamplerMode::AnisotropicWrap => {
                wgpu::AddressMode::Repeat
            }
        }
    }

    pub fn filter_mode(self) -> wgpu::FilterMode {
        match self {
            SamplerMode::PointClamp | SamplerMode::PointWrap => wgpu::FilterMode::Nearest,
            _ => wgpu::FilterMode::Linear,
        }
    }

    pub fn anisotropy_clamp(self) -> u16 {
        match self {
            SamplerMode::AnisotropicClamp | SamplerMode::AnisotropicWrap => MAX_ANISOTROPY,
            _ => 1,
        }
    }

    /// Build the wgpu sampler descriptor for this preset.
    pub fn to_descriptor(self) -> wgpu::SamplerDescriptor<'static> {
        let address_mode = self.address_mode();
        let filter = self.filter_mode();

        wgpu::SamplerDescriptor {
            label: Some("Sprite Sampler"),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: filter,
            lod_min_clamp: 0.0,
            lod_max_clamp: f32::MAX,
            compare: None,
            anisotropy_clamp: self.anisotropy_clamp(),
            border_color: None,
        }
    }
}
