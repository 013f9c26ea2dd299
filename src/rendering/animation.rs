// src/rendering/animation.rs

use crate::config::{MAX_FRAME_RATE, MIN_FRAME_RATE};
use gtk4::glib;
use std::time::Duration;

/// A scheduled periodic callback that can be cancelled exactly once.
pub trait FrameSource {
    fn cancel(self);
}

impl FrameSource for glib::SourceId {
    fn cancel(self) {
        self.remove();
    }
}

/// Owns at most one running frame source. Installing a new source cancels the
/// previous one first; dropping the handle cancels whatever is running.
pub struct AnimationLoop<S: FrameSource = glib::SourceId> {
    source: Option<S>,
}

impl<S: FrameSource> AnimationLoop<S> {
    pub fn new() -> Self {
        Self { source: None }
    }

    pub fn is_running(&self) -> bool {
        self.source.is_some()
    }

    pub fn install(&mut self, source: S) {
        self.stop();
        self.source = Some(source);
    }

    /// Returns true if a source was cancelled.
    pub fn stop(&mut self) -> bool {
        match self.source.take() {
            Some(source) => {
                source.cancel();
                true
            }
            None => false,
        }
    }
}

impl<S: FrameSource> Default for AnimationLoop<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FrameSource> Drop for AnimationLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl AnimationLoop<glib::SourceId> {
    /// Runs `tick` on the GTK main loop at `frame_rate` frames per second,
    /// replacing any loop already running on this handle.
    pub fn start<F>(&mut self, frame_rate: u32, mut tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        let id = glib::timeout_add_local(frame_interval(frame_rate), move || {
            tick();
            glib::ControlFlow::Continue
        });
        self.source = Some(id);
    }
}

pub fn frame_interval(frame_rate: u32) -> Duration {
    let fps = frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE) as u64;
    Duration::from_micros(1_000_000 / fps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live sources so tests can see overlapping loops.
    struct Probe(Rc<Cell<usize>>);

    impl Probe {
        fn spawn(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Probe(live.clone())
        }
    }

    impl FrameSource for Probe {
        fn cancel(self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_install_replaces_running_source() {
        let live = Rc::new(Cell::new(0));
        let mut anim: AnimationLoop<Probe> = AnimationLoop::new();

        anim.install(Probe::spawn(&live));
        anim.install(Probe::spawn(&live));
        anim.install(Probe::spawn(&live));

        assert_eq!(live.get(), 1);
        assert!(anim.is_running());
    }

    #[test]
    fn test_drop_cancels() {
        let live = Rc::new(Cell::new(0));
        {
            let mut anim: AnimationLoop<Probe> = AnimationLoop::new();
            anim.install(Probe::spawn(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let live = Rc::new(Cell::new(0));
        let mut anim: AnimationLoop<Probe> = AnimationLoop::new();
        assert!(!anim.stop());

        anim.install(Probe::spawn(&live));
        assert!(anim.stop());
        assert!(!anim.stop());
        assert!(!anim.is_running());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_switching_views_never_overlaps() {
        // One handle per displayed element; the old one goes before the new one runs.
        let live = Rc::new(Cell::new(0));
        let mut current: Option<AnimationLoop<Probe>> = None;

        for _ in 0..5 {
            current.take();
            assert_eq!(live.get(), 0);

            let mut anim = AnimationLoop::new();
            anim.install(Probe::spawn(&live));
            current = Some(anim);
            assert_eq!(live.get(), 1);
        }

        drop(current);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(30), Duration::from_micros(33_333));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
        assert_eq!(frame_interval(10_000), frame_interval(MAX_FRAME_RATE));
    }
}
