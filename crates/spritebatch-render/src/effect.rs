use std::borrow::Cow;

/// Identity of a custom shader effect, assigned by the render backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EffectId(pub u64);

/// A custom shader effect applied to every run of a batch.
///
/// The batcher knows nothing about the shader itself; it only calls
/// [`RenderBackend::apply_shader_pass`](crate::RenderBackend::apply_shader_pass)
/// once per pass before each draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effect {
    id: EffectId,
    name: Cow<'static, str>,
    pass_count: u32,
}

impl Effect {
    pub fn new(id: EffectId, name: impl Into<Cow<'static, str>>, pass_count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            pass_count,
        }
    }

    pub fn id(&self) -> EffectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of passes; each run is drawn once per pass.
    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }
}
