//! Frame scheduling
//!
//! The simulation never owns a loop of its own. Callback-driven hosts
//! (the browser's animation frame) call [`Session::frame`] once per
//! callback; hosts that own the thread use [`run`] with a stop condition.

use super::state::{GameEvent, GameState, InputState};
use super::tick::tick;

/// Decides, before each frame, whether scheduling should stop
pub trait StopCondition {
    /// `frames_run` is the number of frames completed so far
    fn should_stop(&mut self, frames_run: u64) -> bool;
}

impl<F> StopCondition for F
where
    F: FnMut(u64) -> bool,
{
    fn should_stop(&mut self, frames_run: u64) -> bool {
        self(frames_run)
    }
}

/// Never stop; the host tears the process down
pub fn never() -> impl StopCondition {
    |_frames_run: u64| false
}

/// Stop once `limit` frames have run
pub fn after_frames(limit: u64) -> impl StopCondition {
    move |frames_run: u64| frames_run >= limit
}

/// Invoke `tick_fn` once per frame until `stop` says otherwise
///
/// Returns the number of frames run.
pub fn run<F, S>(mut tick_fn: F, mut stop: S) -> u64
where
    F: FnMut(),
    S: StopCondition,
{
    let mut frames = 0;
    while !stop.should_stop(frames) {
        tick_fn();
        frames += 1;
    }
    frames
}

/// A game session: simulation state plus the latest input snapshot
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: GameState,
    pub input: InputState,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            input: InputState::default(),
        }
    }

    /// Run one frame with the current input snapshot
    pub fn frame(&mut self) -> &GameState {
        let input = self.input;
        tick(&mut self.state, &input);
        &self.state
    }

    /// Events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Run frames until `stop` fires, letting `script` set input first
    ///
    /// `script` sees the frame index and may rewrite the input snapshot
    /// before the frame runs. Returns the number of frames run.
    pub fn run_until<S, I>(&mut self, stop: S, mut script: I) -> u64
    where
        S: StopCondition,
        I: FnMut(u64, &mut InputState),
    {
        let mut frame = 0;
        run(
            || {
                script(frame, &mut self.input);
                self.frame();
                frame += 1;
            },
            stop,
        )
    }
}
