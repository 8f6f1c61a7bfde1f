//! Game loop tests - Running/Over transitions driven by optional input

use tui_snake::core::{Board, Game, GameState, SnakeChain, Violation};
use tui_snake::term::{show_message, FrameBuffer};
use tui_snake::types::{Direction, BOARD_HEIGHT, BOARD_WIDTH};

fn new_game() -> Game<FrameBuffer> {
    let board = Board::new(
        SnakeChain::new(),
        FrameBuffer::default(),
        BOARD_WIDTH,
        BOARD_HEIGHT,
    )
    .unwrap();
    Game::new(board)
}

#[test]
fn test_no_input_runs_straight_into_the_right_wall() {
    let mut game = new_game();

    // Head starts at x = 10; x = 149 is the last column.
    for _ in 0..139 {
        assert_eq!(*game.cycle(None).unwrap(), GameState::Running);
    }
    assert_eq!(game.board().chain().head().unwrap().position.x, 149);

    assert_eq!(
        *game.cycle(None).unwrap(),
        GameState::Over(Violation::Boundary { x: 150, y: 1 })
    );
    assert_eq!(game.ticks(), 139);
}

#[test]
fn test_reverse_input_is_ignored() {
    let mut game = new_game();
    game.cycle(Some(Direction::Left)).unwrap();

    let head = game.board().chain().head().unwrap().position;
    assert_eq!((head.x, head.y, head.facing), (11, 1, Direction::Right));
    assert!(!game.is_over());
}

#[test]
fn test_over_is_terminal() {
    let mut game = new_game();
    let violation = loop {
        if let GameState::Over(v) = *game.cycle(Some(Direction::Up)).unwrap() {
            break v;
        }
    };
    assert_eq!(violation, Violation::Boundary { x: 10, y: -1 });

    let ticks = game.ticks();
    let chain = game.board().chain().clone();
    for dir in [None, Some(Direction::Down), Some(Direction::Right)] {
        assert_eq!(*game.cycle(dir).unwrap(), GameState::Over(violation));
    }
    assert_eq!(game.ticks(), ticks);
    assert_eq!(game.board().chain(), &chain);
}

#[test]
fn test_game_over_banner_is_drawn() {
    let mut game = new_game();
    while !game.is_over() {
        game.cycle(Some(Direction::Up)).unwrap();
    }

    let board = game.board_mut();
    let (w, h) = (board.width(), board.height());
    let rect = show_message(board.surface_mut(), w, h, &["GAME OVER"]).unwrap();

    let fb = game.board().surface();
    assert!(fb.row_string(rect.y + 2).contains("GAME OVER"));
}
