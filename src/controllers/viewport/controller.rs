use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::ExplorerConfig;
use crate::controllers::viewport::data::grid_frame::GridFrame;
use crate::controllers::viewport::errors::ControllerError;
use crate::controllers::viewport::ports::grid_listener::GridListener;
use crate::core::actions::cancellation::Cancelled;
use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Bounds, Viewport};
use crate::core::escape_time::errors::EvaluateError;
use crate::core::escape_time::evaluator::Evaluator;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    viewport: Viewport,
    generation: u64,
    cancel_epoch: u64,
}

/// Owns the current viewport and turns "bounds changed" events into fresh
/// grids.
///
/// Every accepted viewport bumps a generation counter. A computation polls
/// that counter while it runs and stops as soon as a newer viewport has been
/// accepted, so a stale grid never reaches the listeners.
pub struct ViewportController {
    viewport: Mutex<Viewport>,
    generation: AtomicU64,
    cancel_epoch: AtomicU64,
    resolution: Resolution,
    budget: IterationBudget,
    evaluator: Evaluator,
    listeners: Mutex<Vec<Box<dyn GridListener>>>,
}

impl ViewportController {
    #[must_use]
    pub fn new(viewport: Viewport, resolution: Resolution, budget: IterationBudget, evaluator: Evaluator) -> Self {
        Self {
            viewport: Mutex::new(viewport),
            generation: AtomicU64::new(0),
            cancel_epoch: AtomicU64::new(0),
            resolution,
            budget,
            evaluator,
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self, EvaluateError> {
        Ok(Self::new(
            config.viewport()?,
            config.resolution()?,
            config.budget()?,
            config.evaluator()?,
        ))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *lock(&self.viewport)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    /// Registers a display callback for every grid computed from now on.
    pub fn on_bounds_changed<L>(&self, listener: L)
    where
        L: GridListener + 'static,
    {
        lock(&self.listeners).push(Box::new(listener));
    }

    /// Validates `bounds`, makes them the current viewport and recomputes.
    ///
    /// Invalid bounds leave the controller untouched.
    pub fn set_viewport(&self, bounds: Bounds) -> Result<Arc<Grid>, ControllerError> {
        let viewport = Viewport::from_bounds(bounds).inspect_err(|err| {
            warn!("rejected viewport {:?}: {}", bounds, err);
        })?;

        let snapshot = {
            let mut current = lock(&self.viewport);
            *current = viewport;

            // epoch is read before the generation is published so that a
            // cancel issued after observing the new generation is seen
            let cancel_epoch = self.cancel_epoch.load(Ordering::SeqCst);
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

            Snapshot {
                viewport,
                generation,
                cancel_epoch,
            }
        };

        info!(
            "viewport set to real [{}, {}] imag [{}, {}] (generation {})",
            bounds.real_min, bounds.real_max, bounds.imag_min, bounds.imag_max, snapshot.generation
        );

        self.compute(snapshot)
    }

    /// Recomputes the grid for the current viewport and hands it to the
    /// listeners.
    pub fn recompute(&self) -> Result<Arc<Grid>, ControllerError> {
        let snapshot = {
            let current = lock(&self.viewport);

            Snapshot {
                viewport: *current,
                generation: self.generation.load(Ordering::SeqCst),
                cancel_epoch: self.cancel_epoch.load(Ordering::SeqCst),
            }
        };

        self.compute(snapshot)
    }

    /// Zooms by `factor` around `centre` (factor > 1 zooms in).
    pub fn zoom(&self, factor: f64, centre: Complex) -> Result<Arc<Grid>, ControllerError> {
        let zoomed = self.viewport().zoomed(factor, centre)?;

        self.set_viewport(zoomed.bounds())
    }

    pub fn pan(&self, d_real: f64, d_imag: f64) -> Result<Arc<Grid>, ControllerError> {
        let panned = self.viewport().panned(d_real, d_imag)?;

        self.set_viewport(panned.bounds())
    }

    /// Aborts every computation currently running. Their callers receive
    /// [`ControllerError::Cancelled`]; the viewport is unchanged.
    pub fn cancel_in_flight(&self) {
        self.cancel_epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn compute(&self, snapshot: Snapshot) -> Result<Arc<Grid>, ControllerError> {
        let cancel_token = || {
            self.generation.load(Ordering::Relaxed) != snapshot.generation
                || self.cancel_epoch.load(Ordering::Relaxed) != snapshot.cancel_epoch
        };

        let start = Instant::now();
        let grid = self
            .evaluator
            .evaluate_cancelable(&snapshot.viewport, self.resolution, self.budget, &cancel_token)
            .map_err(|Cancelled| self.interrupted(snapshot))?;
        let duration = start.elapsed();

        let frame = GridFrame {
            generation: snapshot.generation,
            viewport: snapshot.viewport,
            grid: Arc::new(grid),
            duration,
        };

        // Checked under the listener lock so an older frame can never be
        // delivered after a newer one.
        let listeners = lock(&self.listeners);
        if cancel_token() {
            return Err(self.interrupted(snapshot));
        }

        debug!(
            "generation {} computed in {:?}, notifying {} listener(s)",
            frame.generation,
            frame.duration,
            listeners.len()
        );

        for listener in listeners.iter() {
            listener.grid_ready(&frame);
        }

        Ok(frame.grid)
    }

    fn interrupted(&self, snapshot: Snapshot) -> ControllerError {
        let current = self.generation.load(Ordering::SeqCst);

        if current != snapshot.generation {
            debug!("generation {} superseded by {}", snapshot.generation, current);
            ControllerError::Superseded {
                generation: snapshot.generation,
                current,
            }
        } else {
            debug!("generation {} cancelled", snapshot.generation);
            ControllerError::Cancelled {
                generation: snapshot.generation,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::cell::Cell;
    use crate::core::data::viewport::{Axis, ViewportError};
    use std::thread;
    use std::time::Duration;

    type Frames = Arc<Mutex<Vec<GridFrame>>>;

    fn record_frames(controller: &ViewportController) -> Frames {
        let frames = Frames::default();
        let sink = Arc::clone(&frames);
        controller.on_bounds_changed(move |frame: &GridFrame| lock(&sink).push(frame.clone()));
        frames
    }

    fn generations(frames: &Frames) -> Vec<u64> {
        lock(frames).iter().map(|f| f.generation).collect()
    }

    fn create_controller(width: u32, height: u32, max_iterations: u32) -> ViewportController {
        ViewportController::new(
            Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap(),
            Resolution::new(width, height).unwrap(),
            IterationBudget::new(max_iterations).unwrap(),
            Evaluator::new(),
        )
    }

    fn wait_for_generation(controller: &ViewportController, generation: u64) {
        let start = Instant::now();
        while controller.generation() < generation {
            assert!(start.elapsed() < Duration::from_secs(10), "timed out waiting for generation {}", generation);
            thread::yield_now();
        }
    }

    #[test]
    fn test_recompute_uses_initial_viewport() {
        let controller = create_controller(7, 5, 100);

        let grid = controller.recompute().unwrap();

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.get(Cell::new(2, 4)), Some(100));
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_set_viewport_stores_bounds_and_notifies_listeners() {
        let controller = create_controller(5, 3, 50);
        let frames = record_frames(&controller);

        let bounds = Bounds::new(-2.0, 2.0, -1.0, 1.0);
        let grid = controller.set_viewport(bounds).unwrap();

        assert_eq!(controller.viewport().bounds(), bounds);
        assert_eq!(controller.generation(), 1);
        assert_eq!(grid.get(Cell::new(1, 4)), Some(2));

        let frames = lock(&frames);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].generation, 1);
        assert_eq!(frames[0].viewport.bounds(), bounds);
        assert_eq!(*frames[0].grid, *grid);
    }

    #[test]
    fn test_closure_listener() {
        let controller = create_controller(4, 4, 20);
        let seen = Arc::new(AtomicU64::new(0));
        let seen_by_listener = Arc::clone(&seen);
        controller.on_bounds_changed(move |frame: &GridFrame| {
            seen_by_listener.store(frame.generation, Ordering::SeqCst);
        });

        controller.set_viewport(Bounds::new(-1.0, 1.0, -1.0, 1.0)).unwrap();
        controller.set_viewport(Bounds::new(-0.5, 0.5, -0.5, 0.5)).unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalid_bounds_leave_state_unchanged() {
        let controller = create_controller(4, 4, 20);
        let frames = record_frames(&controller);
        let before = controller.viewport();

        let zero_width = controller.set_viewport(Bounds::new(0.5, 0.5, -1.0, 1.0));
        let inverted = controller.set_viewport(Bounds::new(-2.0, 1.0, 1.0, -1.0));

        assert_eq!(
            zero_width,
            Err(ControllerError::InvalidViewport(ViewportError::InvertedAxis {
                axis: Axis::Real,
                min: 0.5,
                max: 0.5
            }))
        );
        assert!(matches!(
            inverted,
            Err(ControllerError::InvalidViewport(ViewportError::InvertedAxis { axis: Axis::Imag, .. }))
        ));
        assert_eq!(controller.viewport(), before);
        assert_eq!(controller.generation(), 0);
        assert!(generations(&frames).is_empty());
    }

    #[test]
    fn test_zoom_and_pan_route_through_set_viewport() {
        let controller = create_controller(4, 4, 20);

        controller.zoom(2.0, Complex::new(-0.5, 0.0)).unwrap();
        assert_eq!(controller.viewport().bounds(), Bounds::new(-1.25, 0.25, -0.5, 0.5));

        controller.pan(0.25, 0.5).unwrap();
        assert_eq!(controller.viewport().bounds(), Bounds::new(-1.0, 0.5, 0.0, 1.0));
        assert_eq!(controller.generation(), 2);
    }

    #[test]
    fn test_invalid_zoom_is_rejected() {
        let controller = create_controller(4, 4, 20);

        let result = controller.zoom(-1.0, Complex::ZERO);

        assert_eq!(
            result,
            Err(ControllerError::InvalidViewport(ViewportError::InvalidZoom { factor: -1.0 }))
        );
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_newer_viewport_supersedes_in_flight_computation() {
        // Every point of the slow viewport lies inside the main cardioid and
        // runs the full budget, so only cancellation lets it finish quickly.
        let controller = Arc::new(create_controller(400, 400, 1_000_000));
        let frames = record_frames(&controller);

        let slow = {
            let controller = Arc::clone(&controller);
            thread::spawn(move || controller.set_viewport(Bounds::new(-0.1, 0.1, -0.1, 0.1)))
        };

        wait_for_generation(&controller, 1);
        let fast = controller.set_viewport(Bounds::new(10.0, 11.0, 10.0, 11.0));

        assert!(fast.is_ok());
        assert_eq!(
            slow.join().unwrap(),
            Err(ControllerError::Superseded {
                generation: 1,
                current: 2
            })
        );
        assert_eq!(generations(&frames), vec![2]);
    }

    #[test]
    fn test_cancel_in_flight_aborts_without_changing_viewport() {
        let controller = Arc::new(create_controller(400, 400, 1_000_000));
        let bounds = Bounds::new(-0.1, 0.1, -0.1, 0.1);

        let slow = {
            let controller = Arc::clone(&controller);
            thread::spawn(move || controller.set_viewport(bounds))
        };

        wait_for_generation(&controller, 1);
        controller.cancel_in_flight();

        assert_eq!(slow.join().unwrap(), Err(ControllerError::Cancelled { generation: 1 }));
        assert_eq!(controller.viewport().bounds(), bounds);
    }

    #[test]
    fn test_from_config() {
        let config = ExplorerConfig {
            width: 8,
            height: 6,
            max_iterations: 30,
            ..ExplorerConfig::default()
        };

        let controller = ViewportController::from_config(&config).unwrap();

        assert_eq!(controller.resolution(), Resolution::new(8, 6).unwrap());
        assert_eq!(controller.budget().max_iterations(), 30);
        assert_eq!(controller.viewport().bounds(), config.bounds);
    }
}
