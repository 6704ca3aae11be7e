use crate::controllers::viewport::data::grid_frame::GridFrame;

/// Receives each grid the controller computes for the current viewport.
///
/// Called on the thread that ran the computation, while the controller's
/// listener list is locked; implementations must not register listeners or
/// change the viewport from inside `grid_ready`.
pub trait GridListener: Send + Sync {
    fn grid_ready(&self, frame: &GridFrame);
}

impl<F> GridListener for F
where
    F: Fn(&GridFrame) + Send + Sync,
{
    fn grid_ready(&self, frame: &GridFrame) {
        self(frame)
    }
}
