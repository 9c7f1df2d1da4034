use tile_snake::body::Cell;
use tile_snake::config::{GameConfig, GridSize, SpeedCurve};
use tile_snake::game::{GameState, GameStatus};
use tile_snake::input::{Direction, GameInput};
use tile_snake::pickup::Pickup;

#[test]
fn stepwise_growth_then_wall_collision() {
    let config = GameConfig {
        grid: GridSize {
            width: 12,
            height: 8,
        },
        speed: SpeedCurve::default(),
    };
    let mut state = GameState::new_with_seed(config, 42);
    state.pickup = Pickup::at(Cell::new(8, 3));

    state.apply_input(GameInput::StartPause);
    assert_eq!(state.status, GameStatus::Running);

    // First tick lands on the pickup; growth shows up one tick later.
    assert!(state.update(250).is_some_and(|outcome| outcome.ate_pickup));
    assert_eq!(state.body.len(), 4);
    assert_eq!(state.body.pending_growth(), 1);

    state.pickup = Pickup::at(Cell::new(1, 6));
    state.update(250);
    assert_eq!(state.body.len(), 5);
    assert_eq!(state.body.head(), Cell::new(9, 3));
    assert_eq!(state.time_till_next_move(), 246);

    state.update(246);
    assert_eq!(state.body.head(), Cell::new(10, 3));
    assert_eq!(state.status, GameStatus::Running);

    state.update(246);
    assert_eq!(state.body.head(), Cell::new(11, 3));
    assert_eq!(state.status, GameStatus::Lost);

    state.apply_input(GameInput::StartPause);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.body.head(), Cell::new(7, 3));
    assert_eq!(state.body.len(), 4);
}

#[test]
fn every_consumed_pickup_becomes_one_segment() {
    // Fresh body heads right from (7, 3); 25 straight steps stay clear of the wall.
    let mut state = GameState::new_with_seed(GameConfig::default(), 9);
    state.apply_input(GameInput::StartPause);

    let mut eaten = 0;
    let mut last_speed = state.body.speed();
    for step in 0..25 {
        // Put the pickup directly in the path every other tick.
        if step % 2 == 0 {
            let head = state.body.head();
            state.pickup = Pickup::at(Cell::new(head.x + 1, head.y));
        } else {
            state.pickup = Pickup::at(Cell::new(1, 1));
        }

        let outcome = state.tick().expect("body should still be running");
        if outcome.ate_pickup {
            eaten += 1;
        }

        assert!(state.body.speed() <= last_speed);
        last_speed = state.body.speed();
        assert_eq!(
            state.body.len() + state.body.pending_growth() as usize,
            4 + eaten
        );
    }

    assert_eq!(eaten, 13);
    assert_eq!(state.status, GameStatus::Running);
}

#[test]
fn quit_ends_the_session_from_any_state() {
    let mut state = GameState::new_with_seed(GameConfig::default(), 1);

    state.apply_input(GameInput::Direction(Direction::Down));
    state.apply_input(GameInput::Quit);

    assert!(state.quit_requested());
    assert_eq!(state.update(1_000), None);
}
