use thiserror::Error;

/// Failures while bringing up or driving the dashboard window.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("graphics setup failed at {stage}: {detail}")]
    Gpu { stage: &'static str, detail: String },

    #[error("no Vulkan device supports presenting to this window")]
    NoDevice,
}

/// Map any Vulkan/windowing error into [`RenderError::Gpu`] tagged with the
/// setup stage that produced it.
pub(crate) fn gpu<E: std::fmt::Debug>(stage: &'static str) -> impl FnOnce(E) -> RenderError {
    move |err| RenderError::Gpu {
        stage,
        detail: format!("{err:?}"),
    }
}
