/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the current frame is dropped and rendering
    /// resumes next frame.
    Reconfigured,
    /// Acquisition timed out or failed transiently; drop this frame and retry next tick.
    SkipFrame,
    /// Unrecoverable; the frame loop must stop and report the error.
    Fatal,
}
