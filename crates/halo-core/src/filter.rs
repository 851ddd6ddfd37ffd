use crate::error::Result;
use crate::sink::OutputSink;

/// A post-processing filter the host renderer invokes after each render pass.
///
/// The host owns registration and scheduling; implementors only transform
/// one frame at a time. `input` is the linear-light buffer described by
/// [`crate::frame::FrameView`], `exposure` the camera exposure multiplier.
pub trait PostProcessFilter: Send + Sync {
    /// Human-readable filter name, shown by host UIs.
    fn name(&self) -> &'static str;

    /// Stable identifier used by host-side persistence.
    fn id(&self) -> &'static str;

    /// Transform one frame into `output`. Every coordinate in
    /// `[0,width) x [0,height)` is written exactly once.
    fn process_frame(
        &self,
        width: usize,
        height: usize,
        input: &[f64],
        output: &mut dyn OutputSink,
        exposure: f64,
    ) -> Result<()>;
}
