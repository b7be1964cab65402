//! Host frame loop
//!
//! Per frame, strictly in sequence: wait for the frame slot, apply input,
//! tick once, present.

use std::io;

use super::{FrameClock, InputSource, Presenter};
use crate::sim::{GameEvent, GameState, InputResponse, handle_input, tick};

/// Run until the input source asks to quit
pub fn run(
    state: &mut GameState,
    input: &mut impl InputSource,
    presenter: &mut impl Presenter,
    clock: &mut FrameClock,
) -> io::Result<()> {
    presenter.present(&state.snapshot())?;

    loop {
        let elapsed = clock.wait();

        for event in input.poll_events()? {
            if handle_input(state, event) == InputResponse::Quit {
                log::info!("Quit requested at score {}", state.score());
                return Ok(());
            }
        }

        tick(state, elapsed);

        for event in state.drain_events() {
            if let GameEvent::Crashed { cause } = event {
                log::debug!("Crash cause {:?}", cause);
            } else {
                log::trace!("{:?}", event);
            }
        }

        presenter.present(&state.snapshot())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, InputEvent, Snapshot};
    use crate::tuning::Tuning;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays one batch of events per frame, then quits
    struct Scripted(VecDeque<Vec<InputEvent>>);

    impl InputSource for Scripted {
        fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
            Ok(self.0.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<Snapshot>);

    impl Presenter for Recorder {
        fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
            self.0.push(snapshot.clone());
            Ok(())
        }
    }

    #[test]
    fn test_loop_presents_every_frame_until_quit() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut input = Scripted(VecDeque::from(vec![
            vec![],
            vec![InputEvent::Activate],
            vec![],
            vec![],
        ]));
        let mut presenter = Recorder::default();
        let mut clock = FrameClock::new(Duration::ZERO);

        run(&mut state, &mut input, &mut presenter, &mut clock).unwrap();

        // Initial frame plus one per scripted frame
        assert_eq!(presenter.0.len(), 5);
        assert_eq!(presenter.0[0].phase, GamePhase::Inactive);
        assert_eq!(presenter.0[1].phase, GamePhase::Inactive);
        assert_eq!(presenter.0[2].phase, GamePhase::Active);
        // Flap then two more ticks of gravity: the bird is rising
        assert!(presenter.0[4].bird.pos.y < 300.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_quit_stops_before_tick() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut input = Scripted(VecDeque::from(vec![vec![
            InputEvent::Activate,
            InputEvent::Quit,
        ]]));
        let mut presenter = Recorder::default();
        let mut clock = FrameClock::new(Duration::ZERO);

        run(&mut state, &mut input, &mut presenter, &mut clock).unwrap();
        assert_eq!(presenter.0.len(), 1);
        assert_eq!(state.time_ticks(), 0);
    }
}
