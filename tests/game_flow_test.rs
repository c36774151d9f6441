//! End-to-end flow tests: a whole game driven through the state
//! machine with scripted input, no window and no audio device.

use rand::SeedableRng;
use rand::rngs::StdRng;

use stick_bop::app::StateController;
use stick_bop::audio::AudioSystem;
use stick_bop::config::GameConfig;
use stick_bop::game::GameContext;
use stick_bop::game::task::TaskId;
use stick_bop::input::{GameKey, KeyEvent, ScriptedInput};
use stick_bop::state::{self, StateId};

const FRAME: f32 = 0.05;

/// Build a machine with every state except Loading registered, starting
/// at the menu (asset loading needs a real window, everything else runs
/// headless).
fn build_game(seed: u64) -> (StateController, GameContext) {
    let mut ctx = GameContext::new(
        GameConfig::default(),
        AudioSystem::disabled(),
        StdRng::seed_from_u64(seed),
    );

    let mut machine = StateController::new();
    machine.register(StateId::Menu, Box::new(state::Menu::new()));
    machine.register(StateId::Start, Box::new(state::Start::new()));
    machine.register(StateId::TaskDone, Box::new(state::TaskDone::new()));
    machine.register(StateId::Loss, Box::new(state::Loss::new()));
    machine.register(StateId::Win, Box::new(state::Win::new()));
    for task in TaskId::ALL {
        machine.register(StateId::Task(task), Box::new(state::TaskRound::new(task)));
    }
    machine.set_initial(StateId::Menu, &mut ctx).unwrap();

    (machine, ctx)
}

fn cycle(key: GameKey) -> Vec<KeyEvent> {
    vec![KeyEvent::down(key), KeyEvent::up(key)]
}

/// The exact event stream that completes one round of `task`.
fn winning_events(task: TaskId) -> Vec<KeyEvent> {
    use stick_bop::input::GameKey::*;

    let repeat = |key: GameKey, reps: usize| -> Vec<KeyEvent> {
        (0..reps).flat_map(|_| cycle(key)).collect()
    };
    let alternate = |windup: GameKey, strike: GameKey, reps: usize| -> Vec<KeyEvent> {
        (0..reps)
            .flat_map(|_| {
                let mut pair = cycle(windup);
                pair.extend(cycle(strike));
                pair
            })
            .collect()
    };

    match task {
        TaskId::Drilling => repeat(Space, 5),
        TaskId::Hammering => repeat(Space, 10),
        TaskId::Mining | TaskId::Woodchopping => alternate(Right, Left, 5),
        TaskId::Flagraising | TaskId::Tirepumping => alternate(Down, Up, 5),
        TaskId::Excalibur1 | TaskId::Excalibur2 | TaskId::Excalibur3 | TaskId::Excalibur4 => {
            let mut events = cycle(Up);
            events.extend(cycle(Down));
            for _ in 0..2 {
                events.push(KeyEvent::down(Left));
                events.push(KeyEvent::down(Right));
                events.push(KeyEvent::up(Left));
                events.push(KeyEvent::up(Right));
            }
            events.extend(cycle(Space));
            events
        }
    }
}

fn feed(machine: &mut StateController, input: &mut ScriptedInput, events: Vec<KeyEvent>) {
    input.push_frame(events);
    machine.pump_events(input).unwrap();
}

/// From the menu, press Enter and sit through the countdown until the
/// first task comes up.
fn start_game(machine: &mut StateController, input: &mut ScriptedInput, ctx: &mut GameContext) {
    feed(machine, input, vec![KeyEvent::down(GameKey::Enter)]);
    machine.advance(FRAME, ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Start);

    machine.advance(3.0, ctx).unwrap();
    machine.advance(FRAME, ctx).unwrap();
    assert!(matches!(machine.current_id(), StateId::Task(_)));
    assert_eq!(ctx.session.score(), 0);
}

#[test]
fn test_hundred_wins_reach_win_exactly_once() {
    let (mut machine, mut ctx) = build_game(42);
    let mut input = ScriptedInput::new();
    start_game(&mut machine, &mut input, &mut ctx);

    let mut wins = 0;
    let mut excalibur_rounds = 0;
    for _ in 0..5000 {
        match machine.current_id() {
            StateId::Task(task) => {
                if !TaskId::BASE_TASKS.contains(&task) {
                    excalibur_rounds += 1;
                }
                feed(&mut machine, &mut input, winning_events(task));
                machine.advance(FRAME, &mut ctx).unwrap();
                wins += 1;
                // The flip out of the finished round happens next frame.
                assert_eq!(machine.current_id(), StateId::Task(task));
                machine.advance(FRAME, &mut ctx).unwrap();
                assert_eq!(machine.current_id(), StateId::TaskDone);
            }
            StateId::TaskDone => {
                machine.advance(0.5, &mut ctx).unwrap();
            }
            StateId::Win => break,
            other => panic!("unexpected state {other}"),
        }
    }

    assert_eq!(machine.current_id(), StateId::Win);
    assert_eq!(ctx.session.score(), 100);
    assert_eq!(wins, 100);
    // Every milestone routed through its bonus stage exactly once.
    assert_eq!(excalibur_rounds, 4);
}

#[test]
fn test_timeout_routes_to_loss_and_back_to_menu() {
    let (mut machine, mut ctx) = build_game(7);
    let mut input = ScriptedInput::new();
    start_game(&mut machine, &mut input, &mut ctx);

    // Let the round run dry: 5 seconds is the starting budget.
    machine.advance(5.0, &mut ctx).unwrap();
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Loss);
    assert_eq!(ctx.session.score(), 0);

    // Enter returns to the menu for another game.
    feed(&mut machine, &mut input, vec![KeyEvent::down(GameKey::Enter)]);
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Menu);
}

#[test]
fn test_partial_progress_does_not_survive_a_revisit() {
    let (mut machine, mut ctx) = build_game(3);
    let mut input = ScriptedInput::new();
    start_game(&mut machine, &mut input, &mut ctx);

    let StateId::Task(first) = machine.current_id() else {
        panic!("expected a task");
    };

    // Half-finish the round, then time out and start a new game.
    let events = winning_events(first);
    let half = events.len() / 2;
    feed(&mut machine, &mut input, events[..half].to_vec());
    machine.advance(5.0, &mut ctx).unwrap();
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Loss);

    feed(&mut machine, &mut input, vec![KeyEvent::down(GameKey::Enter)]);
    machine.advance(FRAME, &mut ctx).unwrap();
    start_game(&mut machine, &mut input, &mut ctx);

    // Revisits of the same task start from scratch: the previous
    // partial progress must not shorten the new round.
    for _ in 0..600 {
        if machine.current_id() == StateId::Task(first) {
            break;
        }
        match machine.current_id() {
            StateId::Task(task) => {
                feed(&mut machine, &mut input, winning_events(task));
                machine.advance(FRAME, &mut ctx).unwrap();
                machine.advance(FRAME, &mut ctx).unwrap();
            }
            StateId::TaskDone => machine.advance(0.5, &mut ctx).unwrap(),
            other => panic!("unexpected state {other}"),
        }
    }
    let StateId::Task(task) = machine.current_id() else {
        panic!("never revisited a task");
    };
    assert_eq!(task, first);

    // Completing it still takes the full gesture count.
    let events = winning_events(task);
    let half = events.len() / 2;
    feed(&mut machine, &mut input, events[..half].to_vec());
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Task(task));
    feed(&mut machine, &mut input, events[half..].to_vec());
    machine.advance(FRAME, &mut ctx).unwrap();
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::TaskDone);
}

#[test]
fn test_escape_quits_from_the_menu() {
    let (mut machine, mut ctx) = build_game(1);
    let mut input = ScriptedInput::new();

    feed(
        &mut machine,
        &mut input,
        vec![KeyEvent::down(GameKey::Escape)],
    );
    machine.advance(FRAME, &mut ctx).unwrap();

    assert!(machine.quitting());
    assert_eq!(machine.current_id(), StateId::Menu);
}

#[test]
fn test_countdown_holds_for_three_seconds() {
    let (mut machine, mut ctx) = build_game(5);
    let mut input = ScriptedInput::new();

    feed(&mut machine, &mut input, vec![KeyEvent::down(GameKey::Enter)]);
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Start);

    machine.advance(1.0, &mut ctx).unwrap();
    machine.advance(1.0, &mut ctx).unwrap();
    machine.advance(FRAME, &mut ctx).unwrap();
    assert_eq!(machine.current_id(), StateId::Start);

    machine.advance(1.0, &mut ctx).unwrap();
    machine.advance(FRAME, &mut ctx).unwrap();
    assert!(matches!(machine.current_id(), StateId::Task(_)));
}

#[test]
fn test_window_close_request_stops_the_machine() {
    let (mut machine, mut ctx) = build_game(9);
    let mut input = ScriptedInput::new();
    start_game(&mut machine, &mut input, &mut ctx);

    input.request_quit();
    machine.pump_events(&mut input).unwrap();
    machine.advance(FRAME, &mut ctx).unwrap();
    assert!(machine.quitting());
}
