//! Eased viewport transitions.
//!
//! An animation never blocks and never schedules itself. The host calls
//! [`AnimationDriver::tick`] with its frame timestamp; a `Pending` result is
//! the suspend point and means "call me again next frame". Only one
//! transition exists at a time: starting a new one bumps the generation
//! counter, which invalidates every previously issued [`AnimationHandle`].

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::viewport::{Point, Viewport};

/// Quadratic ease-out over `t ∈ [0, 1]`.
#[must_use]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Linear interpolation from `start` toward `end`.
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}

#[must_use]
pub fn lerp_point(start: Point, end: Point, t: f64) -> Point {
    Point::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
}

/// Where a transition should leave the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTarget {
    pub offset: Point,
    pub zoom: f64,
}

/// Cancellation token for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle(u64);

/// Outcome of a single [`AnimationDriver::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Nothing is animating.
    Idle,
    /// The viewport moved and another tick is wanted.
    Pending,
    /// The viewport reached its target exactly; nothing is left to schedule.
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    handle: AnimationHandle,
    from: ViewTarget,
    to: ViewTarget,
    start_ms: f64,
    duration_ms: f64,
}

impl Transition {
    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// Owns the single in-flight viewport transition, if any.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    active: Option<Transition>,
    generation: u64,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `viewport` toward `target`, superseding any transition
    /// already running.
    pub fn animate_to(&mut self, viewport: &Viewport, target: ViewTarget, duration_ms: f64, now_ms: f64) -> AnimationHandle {
        self.generation += 1;
        let handle = AnimationHandle(self.generation);
        if self.active.is_some() {
            tracing::debug!(generation = self.generation, "superseding viewport animation");
        }
        self.active = Some(Transition {
            handle,
            from: ViewTarget { offset: viewport.offset(), zoom: viewport.zoom() },
            to: target,
            start_ms: now_ms,
            duration_ms,
        });
        handle
    }

    /// Cancel the transition identified by `handle`. Stale handles are ignored.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        if self.active.is_some_and(|t| t.handle == handle) {
            self.active = None;
            return true;
        }
        false
    }

    /// Move the target offset of the transition identified by `handle`.
    ///
    /// The transition keeps its start time and duration, so the eased path
    /// bends toward the new target from wherever it is now. Stale handles are
    /// ignored.
    pub fn retarget_offset(&mut self, handle: AnimationHandle, offset: Point) -> bool {
        match self.active.as_mut() {
            Some(t) if t.handle == handle => {
                t.to.offset = offset;
                true
            }
            _ => false,
        }
    }

    /// Drop whatever transition is running. Returns whether one was.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Handle of the running transition, if any.
    #[must_use]
    pub fn current(&self) -> Option<AnimationHandle> {
        self.active.map(|t| t.handle)
    }

    /// Advance the running transition to `now_ms` and write the result into `viewport`.
    pub fn tick(&mut self, now_ms: f64, viewport: &mut Viewport) -> AnimationStep {
        let Some(transition) = self.active else {
            return AnimationStep::Idle;
        };
        let t = transition.progress(now_ms);
        if t >= 1.0 {
            viewport.set_view(transition.to.offset, transition.to.zoom);
            self.active = None;
            return AnimationStep::Finished;
        }
        let eased = ease_out_quad(t);
        viewport.set_view(
            lerp_point(transition.from.offset, transition.to.offset, eased),
            lerp(transition.from.zoom, transition.to.zoom, eased),
        );
        AnimationStep::Pending
    }
}
