use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info};
use yew::prelude::*;

use crate::config;

/// What a stat card counts up to and how long it takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub target_value: u32,
    pub target_progress: f64,
    pub duration_ms: u32,
    pub steps: u32,
}

impl RevealSpec {
    pub fn new(target_value: u32, target_progress: f64) -> Self {
        Self::with_timing(target_value, target_progress, config::REVEAL_DURATION_MS, config::REVEAL_STEPS)
    }

    pub fn with_timing(target_value: u32, target_progress: f64, duration_ms: u32, steps: u32) -> Self {
        let target_progress = if target_progress.is_finite() {
            target_progress.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            target_value,
            target_progress,
            duration_ms,
            steps,
        }
    }

    /// Milliseconds between two ticks.
    pub fn tick_interval_ms(&self) -> u32 {
        if self.steps == 0 {
            0
        } else {
            self.duration_ms / self.steps
        }
    }

    // Nothing to count towards, or no steps to count in.
    fn snaps_immediately(&self) -> bool {
        self.steps == 0 || self.target_value == 0
    }
}

/// One observable point of a reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealFrame {
    pub value: u32,
    pub progress: f64,
    pub tick: u32,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Armed { tick: u32 },
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmOutcome {
    /// Ticks should now be driven every `tick_interval_ms`.
    Started,
    /// Degenerate spec, the frame jumped straight to the targets.
    Snapped,
    /// Already armed, completed or torn down.
    Ignored,
}

/// Drives the counter and the ring from a single step index.
#[derive(Debug)]
pub struct RevealAnimator {
    spec: RevealSpec,
    phase: RevealPhase,
    frame: RevealFrame,
    detached: bool,
}

impl RevealAnimator {
    pub fn new(spec: RevealSpec) -> Self {
        Self {
            spec,
            phase: RevealPhase::Idle,
            frame: RevealFrame::default(),
            detached: false,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn frame(&self) -> RevealFrame {
        self.frame
    }

    pub fn is_completed(&self) -> bool {
        self.phase == RevealPhase::Completed
    }

    pub fn arm(&mut self) -> ArmOutcome {
        if self.detached || self.phase != RevealPhase::Idle {
            return ArmOutcome::Ignored;
        }
        if self.spec.snaps_immediately() {
            self.complete();
            return ArmOutcome::Snapped;
        }
        self.phase = RevealPhase::Armed { tick: 0 };
        ArmOutcome::Started
    }

    /// Advances one step. Returns the new frame, or `None` when there was
    /// nothing to advance.
    pub fn tick(&mut self) -> Option<RevealFrame> {
        if self.detached {
            return None;
        }
        let tick = match self.phase {
            RevealPhase::Armed { tick } => tick + 1,
            RevealPhase::Idle | RevealPhase::Completed => return None,
        };

        if tick >= self.spec.steps {
            self.complete();
            return Some(self.frame);
        }

        let steps = u64::from(self.spec.steps);
        let value = u64::from(self.spec.target_value) * u64::from(tick) / steps;
        let progress = self.spec.target_progress * f64::from(tick) / f64::from(self.spec.steps);

        self.phase = RevealPhase::Armed { tick };
        self.frame = RevealFrame {
            // floor(target * tick / steps) with tick < steps stays below target
            value: (value as u32).min(self.spec.target_value),
            progress: progress.min(self.spec.target_progress),
            tick,
            completed: false,
        };
        Some(self.frame)
    }

    /// Marks the owning region as gone. Nothing changes after this.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    fn complete(&mut self) {
        self.phase = RevealPhase::Completed;
        self.frame = RevealFrame {
            value: self.spec.target_value,
            progress: self.spec.target_progress,
            tick: self.spec.steps,
            completed: true,
        };
    }
}

/// Runs a reveal once `armed` flips to true and returns the frame to render.
///
/// One `Interval` per card drives both the number and the ring. It is dropped
/// as soon as the reveal completes, and on unmount if it never did.
#[hook]
pub fn use_reveal(spec: RevealSpec, armed: bool) -> RevealFrame {
    let animator = use_mut_ref(|| RevealAnimator::new(spec));
    let interval_handle: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);
    let frame = use_state(RevealFrame::default);

    {
        let animator = animator.clone();
        let interval_handle = interval_handle.clone();
        let frame_setter = frame.setter();
        use_effect_with_deps(
            move |armed| {
                if *armed {
                    let outcome = animator.borrow_mut().arm();
                    match outcome {
                        ArmOutcome::Started => {
                            let period = spec.tick_interval_ms();
                            info!(
                                "Revealing {} over {} ticks of {}ms",
                                spec.target_value, spec.steps, period
                            );
                            let animator = animator.clone();
                            let interval = Interval::new(period, move || {
                                let (next, completed) = {
                                    let mut animator = animator.borrow_mut();
                                    (animator.tick(), animator.is_completed())
                                };
                                if let Some(next) = next {
                                    debug!("reveal tick {} -> {}", next.tick, next.value);
                                    if completed {
                                        info!("Reveal of {} reached its target", next.value);
                                    }
                                    frame_setter.set(next);
                                }
                            });
                            *interval_handle.borrow_mut() = Some(interval);
                        }
                        ArmOutcome::Snapped => {
                            info!("Reveal of {} snapped to target", spec.target_value);
                            frame_setter.set(animator.borrow().frame());
                        }
                        ArmOutcome::Ignored => {
                            debug!("Reveal arm ignored in {:?}", animator.borrow().phase());
                        }
                    }
                }
                || ()
            },
            armed,
        );
    }

    // The last tick's render can run inside the interval's own callback, so the
    // handle is dropped on a fresh task instead of in place.
    {
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |completed| {
                if *completed {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        Timeout::new(0, move || {
                            drop(interval);
                            debug!("Reveal timer released");
                        })
                        .forget();
                    }
                }
                || ()
            },
            frame.completed,
        );
    }

    {
        let animator = animator.clone();
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    animator.borrow_mut().detach();
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    *frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animator: &mut RevealAnimator) -> Vec<RevealFrame> {
        let mut frames = Vec::new();
        while let Some(frame) = animator.tick() {
            frames.push(frame);
        }
        frames
    }

    #[test]
    fn test_default_timing() {
        let spec = RevealSpec::new(400, 100.0);
        assert_eq!(spec.duration_ms, 2000);
        assert_eq!(spec.steps, 60);
        assert_eq!(spec.tick_interval_ms(), 33);
    }

    #[test]
    fn test_full_run_reaches_targets() {
        let mut animator = RevealAnimator::new(RevealSpec::with_timing(400, 100.0, 2000, 60));
        assert_eq!(animator.arm(), ArmOutcome::Started);

        let frames = run_to_end(&mut animator);
        assert_eq!(frames.len(), 60);

        let last = frames.last().unwrap();
        assert_eq!(last.value, 400);
        assert_eq!(last.progress, 100.0);
        assert_eq!(last.tick, 60);
        assert!(last.completed);
        assert_eq!(animator.phase(), RevealPhase::Completed);
    }

    #[test]
    fn test_final_tick_snaps_without_overshoot() {
        let mut animator = RevealAnimator::new(RevealSpec::new(98, 98.0));
        animator.arm();
        let frames = run_to_end(&mut animator);

        for frame in &frames {
            assert!(frame.value <= 98);
            assert!(frame.progress <= 98.0);
        }
        let last = frames.last().unwrap();
        assert_eq!(last.value, 98);
        assert_eq!(last.progress, 98.0);
    }

    #[test]
    fn test_values_never_decrease() {
        for (target, progress) in [(400, 100.0), (150, 100.0), (98, 98.0), (24, 100.0), (1, 3.5), (7, 0.0)] {
            let mut animator = RevealAnimator::new(RevealSpec::new(target, progress));
            animator.arm();
            let frames = run_to_end(&mut animator);

            let mut previous = RevealFrame::default();
            for frame in &frames {
                assert!(frame.value >= previous.value, "value went back for {}", target);
                assert!(frame.progress >= previous.progress, "progress went back for {}", target);
                previous = *frame;
            }
            assert_eq!(previous.value, target);
            assert_eq!(previous.progress, progress);
        }
    }

    #[test]
    fn test_both_targets_reached_on_same_tick() {
        let mut animator = RevealAnimator::new(RevealSpec::with_timing(24, 100.0, 1000, 7));
        animator.arm();
        let frames = run_to_end(&mut animator);

        let value_done = frames.iter().position(|f| f.value == 24).unwrap();
        let progress_done = frames.iter().position(|f| f.progress == 100.0).unwrap();
        assert_eq!(value_done, progress_done);
        assert_eq!(frames[value_done].tick, 7);
    }

    #[test]
    fn test_value_and_progress_share_schedule() {
        let mut animator = RevealAnimator::new(RevealSpec::with_timing(150, 100.0, 2000, 60));
        animator.arm();
        let frame = (0..30).filter_map(|_| animator.tick()).last().unwrap();

        assert_eq!(frame.tick, 30);
        assert_eq!(frame.value, 75);
        assert_eq!(frame.progress, 50.0);
    }

    #[test]
    fn test_arm_is_idempotent() {
        let mut animator = RevealAnimator::new(RevealSpec::new(150, 100.0));
        assert_eq!(animator.arm(), ArmOutcome::Started);
        animator.tick();
        animator.tick();
        let before = animator.frame();

        assert_eq!(animator.arm(), ArmOutcome::Ignored);
        assert_eq!(animator.frame(), before);
        assert_eq!(animator.phase(), RevealPhase::Armed { tick: 2 });

        run_to_end(&mut animator);
        let done = animator.frame();
        assert_eq!(animator.arm(), ArmOutcome::Ignored);
        assert_eq!(animator.frame(), done);
        assert!(animator.tick().is_none());
    }

    #[test]
    fn test_detach_stops_updates() {
        let mut animator = RevealAnimator::new(RevealSpec::new(400, 100.0));
        animator.arm();
        for _ in 0..10 {
            animator.tick();
        }
        let before = animator.frame();

        animator.detach();
        assert!(animator.tick().is_none());
        assert_eq!(animator.arm(), ArmOutcome::Ignored);
        assert_eq!(animator.frame(), before);
        assert!(!animator.is_completed());
    }

    #[test]
    fn test_unarmed_stays_at_zero() {
        let mut animator = RevealAnimator::new(RevealSpec::new(400, 100.0));
        for _ in 0..100 {
            assert!(animator.tick().is_none());
        }
        assert_eq!(animator.phase(), RevealPhase::Idle);
        assert_eq!(animator.frame().value, 0);
        assert_eq!(animator.frame().progress, 0.0);
    }

    #[test]
    fn test_zero_target_snaps() {
        let mut animator = RevealAnimator::new(RevealSpec::new(0, 40.0));
        assert_eq!(animator.arm(), ArmOutcome::Snapped);
        assert!(animator.is_completed());
        assert_eq!(animator.frame().value, 0);
        assert_eq!(animator.frame().progress, 40.0);
    }

    #[test]
    fn test_zero_steps_snaps() {
        let spec = RevealSpec::with_timing(98, 98.0, 2000, 0);
        assert_eq!(spec.tick_interval_ms(), 0);

        let mut animator = RevealAnimator::new(spec);
        assert_eq!(animator.arm(), ArmOutcome::Snapped);
        assert_eq!(animator.frame().value, 98);
        assert_eq!(animator.frame().progress, 98.0);
        assert!(animator.tick().is_none());
    }

    #[test]
    fn test_progress_target_clamped() {
        assert_eq!(RevealSpec::new(10, 250.0).target_progress, 100.0);
        assert_eq!(RevealSpec::new(10, -5.0).target_progress, 0.0);
        assert_eq!(RevealSpec::new(10, f64::NAN).target_progress, 0.0);
    }
}
