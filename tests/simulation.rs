use grid_snake::game::{
    BOARD_HEIGHT, BOARD_WIDTH, Direction, GameConfig, GameEngine, GameState, Position,
    RESTART_HEAD, Simulation, SnapshotReceiver, TickOutcome,
};
use grid_snake::input::InputHandler;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

async fn next_snapshot(rx: &mut SnapshotReceiver) -> Option<GameState> {
    rx.changed().await.ok()?;
    rx.borrow_and_update().clone()
}

#[tokio::test(start_paused = true)]
async fn wraps_over_the_top_edge() {
    let sim = Simulation::new(&GameConfig::default().with_seed(11));
    let mut rx = sim.subscribe();
    let mut input = InputHandler::new(sim.direction());
    assert!(input.request(Direction::Up));
    let handle = sim.spawn();

    let initial = next_snapshot(&mut rx).await.unwrap();
    assert_eq!(initial.head(), Position::new(7, 7));

    let mut state = initial;
    for _ in 0..8 {
        state = next_snapshot(&mut rx).await.unwrap();
    }

    assert_eq!(state.head(), Position::new(7, BOARD_HEIGHT - 1));
    assert_eq!(
        state.snake,
        vec![
            Position::new(7, 23),
            Position::new(7, 0),
            Position::new(7, 1),
            Position::new(7, 2),
        ]
    );

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn snapshots_stay_on_the_board() {
    let sim = Simulation::new(&GameConfig::default().with_seed(21).with_max_ticks(300));
    let mut rx = sim.subscribe();
    let mut input = InputHandler::new(sim.direction());
    let handle = sim.spawn();
    let mut steering = ChaCha8Rng::seed_from_u64(22);

    let mut seen = 0;
    while let Some(state) = next_snapshot(&mut rx).await {
        assert!(!state.snake.is_empty());
        for cell in &state.snake {
            assert!((0..BOARD_WIDTH).contains(&cell.x));
            assert!((0..BOARD_HEIGHT).contains(&cell.y));
        }
        assert!(state.food.is_in_bounds());

        input.request(Direction::ALL[steering.gen_range(0..4)]);
        seen += 1;
    }

    let metrics = handle.join().await.unwrap();
    assert_eq!(metrics.ticks, 300);
    assert!(seen > 0);
}

#[test]
fn eating_then_colliding_in_one_run() {
    let mut engine = GameEngine::new(Some(4));
    let state = GameState::new(
        vec![
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 3),
            Position::new(0, 3),
        ],
        Position::new(4, 3),
        6,
    );

    let (state, outcome) = engine.tick(&state, Direction::Right);
    assert_eq!(outcome, TickOutcome::Ate);
    assert_eq!(state.score, 7);
    assert_eq!(state.len(), 5);

    let (mut state, outcome) = engine.tick(&state, Direction::Left);
    assert_eq!(outcome, TickOutcome::Collided);
    assert_eq!(state.snake, vec![RESTART_HEAD]);
    assert_eq!(state.score, 0);

    state.food = Position::new(0, 0);

    let (state, outcome) = engine.tick(&state, Direction::Right);
    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(state.snake, vec![Position::new(9, 12), RESTART_HEAD]);
}
