/// Rasterizer presets: face culling and fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RasterMode {
    /// Draw both faces.
    CullNone,
    /// Cull faces with clockwise winding.
    CullClockwise,
    /// Cull faces with counter-clockwise winding. The batch default.
    #[default]
    CullCounterClockwise,
    /// Draw triangle edges only, no culling.
    Wireframe,
}

impl RasterMode {
    /// Convert to a wgpu primitive state for an indexed triangle list.
    pub fn to_primitive_state(self) -> wgpu::PrimitiveState {
        let (cull_mode, polygon_mode) = match self {
            RasterMode::CullNone => (None, wgpu::PolygonMode::Fill),
            RasterMode::CullClockwise => (Some(wgpu::Face::Front), wgpu::PolygonMode::Fill),
            RasterMode::CullCounterClockwise => (Some(wgpu::Face::Back), wgpu::PolygonMode::Fill),
            RasterMode::Wireframe => (None, wgpu::PolygonMode::Line),
        };

        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            // Screen space has y pointing down, so sprites wind clockwise.
            front_face: wgpu::FrontFace::Cw,
            cull_mode,
            polygon_mode,
            ..Default::default()
        }
    }
}
