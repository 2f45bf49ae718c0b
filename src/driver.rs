//! Blocking frame loop
//!
//! Each iteration: measure dt, poll for stop, step, hand the frame off.
//! Callback-driven front ends (the browser) call [`step`] themselves instead.

use crate::consts::MAX_STEP_DT;
use crate::platform::{FrameClock, FrameSink, StopSource};
use crate::sim::{SimState, TickInput, TickOutcome, tick};

/// Number of equal ticks a frame of `dt` is split into, each at most [`MAX_STEP_DT`]
#[inline]
pub fn substeps(dt: f32) -> u32 {
    ((dt / MAX_STEP_DT).ceil() as u32).max(1)
}

/// Advance one rendered frame of `dt` reference frames
///
/// Frames longer than [`MAX_STEP_DT`] run as several shorter ticks so the ball
/// cannot move far enough in one tick to pass a wall. Only the last tick's
/// snapshot is returned.
pub fn step(state: &mut SimState, input: &TickInput, dt: f32) -> TickOutcome {
    let n = substeps(dt);
    let sub_dt = dt / n as f32;

    let mut outcome = TickOutcome::Stopped;
    for _ in 0..n {
        outcome = tick(state, input, sub_dt);
        if outcome == TickOutcome::Stopped {
            break;
        }
    }
    outcome
}

/// Run until `stop` asks to quit, returning the number of ticks completed
///
/// `stop` is polled once per frame; a long frame may complete several ticks.
pub fn run<C, S, K>(state: &mut SimState, clock: &mut C, stop: &mut S, sink: &mut K) -> u64
where
    C: FrameClock,
    S: StopSource,
    K: FrameSink,
{
    let start_tick = state.time_ticks;
    log::info!(
        "Simulation running from tick {} (ball at ({:.1}, {:.1}))",
        start_tick,
        state.ball.pos.x,
        state.ball.pos.y
    );

    loop {
        let dt = clock.next_dt();
        let input = TickInput {
            stop_requested: stop.stop_requested(),
        };

        match step(state, &input, dt) {
            TickOutcome::Frame(frame) => sink.present(&frame),
            TickOutcome::Stopped => break,
        }
    }

    let ticks = state.time_ticks - start_tick;
    log::info!("Stop requested after {} ticks", ticks);
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{LogSink, TickBudget};
    use crate::sim::FrameSnapshot;

    /// Clock that always reports exactly one reference frame
    struct FixedClock {
        calls: u32,
    }

    impl FrameClock for FixedClock {
        fn next_dt(&mut self) -> f32 {
            self.calls += 1;
            1.0
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<FrameSnapshot>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, frame: &FrameSnapshot) {
            self.frames.push(frame.clone());
        }
    }

    /// Clock stuck at a slow frame rate
    struct SlowClock(f32);

    impl FrameClock for SlowClock {
        fn next_dt(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_substeps() {
        assert_eq!(substeps(0.0), 1);
        assert_eq!(substeps(0.5), 1);
        assert_eq!(substeps(1.0), 1);
        assert_eq!(substeps(1.2), 2);
        assert_eq!(substeps(4.0), 4);
    }

    #[test]
    fn test_short_frame_is_one_tick() {
        let mut stepped = SimState::default();
        let mut ticked = SimState::default();
        step(&mut stepped, &TickInput::default(), 0.8);
        tick(&mut ticked, &TickInput::default(), 0.8);
        assert_eq!(stepped.ball, ticked.ball);
        assert_eq!(stepped.time_ticks, 1);
    }

    #[test]
    fn test_long_frame_splits_into_unit_ticks() {
        let mut stepped = SimState::default();
        let outcome = step(&mut stepped, &TickInput::default(), 3.0);

        let mut ticked = SimState::default();
        for _ in 0..3 {
            tick(&mut ticked, &TickInput::default(), 1.0);
        }
        assert_eq!(stepped.ball, ticked.ball);
        assert_eq!(stepped.time_ticks, 3);
        assert_eq!(outcome, TickOutcome::Frame(FrameSnapshot::capture(&ticked)));
    }

    #[test]
    fn test_stopped_step_runs_nothing() {
        let mut state = SimState::default();
        let input = TickInput { stop_requested: true };
        assert_eq!(step(&mut state, &input, 4.0), TickOutcome::Stopped);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_slow_frames_keep_ball_inside() {
        // 15 fps: dt = 4 per frame, at the stall cap
        let mut state = SimState::default();
        let mut sink = Recorder::default();
        let ticks = run(&mut state, &mut SlowClock(4.0), &mut TickBudget::new(500), &mut sink);
        assert_eq!(ticks, 2000);
        assert_eq!(sink.frames.len(), 500);

        for frame in &sink.frames {
            for i in 0..frame.vertices.len() {
                let a = frame.vertices[i];
                let b = frame.vertices[(i + 1) % frame.vertices.len()];
                let inward = crate::perp(b - a).normalize();
                let depth = (frame.ball_pos - a).dot(inward);
                assert!(depth >= frame.ball_radius - 1e-2, "ball left the arena at tick {}", frame.tick);
            }
        }
    }

    #[test]
    fn test_run_honours_budget() {
        let mut state = SimState::default();
        let mut clock = FixedClock { calls: 0 };
        let mut sink = Recorder::default();

        let ticks = run(&mut state, &mut clock, &mut TickBudget::new(30), &mut sink);

        assert_eq!(ticks, 30);
        assert_eq!(state.time_ticks, 30);
        assert_eq!(sink.frames.len(), 30);
        // The stopping iteration still measured time, but ran no tick
        assert_eq!(clock.calls, 31);
        let ticks_seen: Vec<u64> = sink.frames.iter().map(|f| f.tick).collect();
        assert_eq!(ticks_seen, (1..=30).collect::<Vec<_>>());
        assert_eq!(sink.frames.last().unwrap().ball_pos, state.ball.pos);
    }

    #[test]
    fn test_immediate_stop_runs_nothing() {
        let mut state = SimState::default();
        let before = state.ball;
        let mut sink = LogSink::new(60);

        let ticks = run(&mut state, &mut FixedClock { calls: 0 }, &mut || true, &mut sink);

        assert_eq!(ticks, 0);
        assert_eq!(state.ball, before);
        assert_eq!(sink.presented(), 0);
    }

    #[test]
    fn test_run_matches_manual_ticks() {
        let mut looped = SimState::default();
        run(&mut looped, &mut FixedClock { calls: 0 }, &mut TickBudget::new(120), &mut LogSink::new(60));

        let mut manual = SimState::default();
        for _ in 0..120 {
            tick(&mut manual, &TickInput::default(), 1.0);
        }
        assert_eq!(looped.ball, manual.ball);
        assert_eq!(looped.hexagon.angle, manual.hexagon.angle);
    }
}
