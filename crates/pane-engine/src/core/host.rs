/// Scheduling side of a host surface.
///
/// Implemented once per host kind; the frame scheduler only ever talks to
/// this trait.
pub trait HostSurface: Send + Sync {
    /// Registers that a frame is about to be drawn.
    fn request_draw(&self);

    /// Whether the viewport can be drawn to right now.
    fn can_draw(&self) -> bool;

    /// Teardown hook run when a frame loop exits. Must be idempotent.
    fn finish(&self);
}
