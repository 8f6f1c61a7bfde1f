//! Property tests for the step rule and chain movement.

use proptest::prelude::*;

use tui_snake::core::{Position, SnakeChain};
use tui_snake::types::Direction;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn step_turns_unless_reversing(
        x in -500i16..500,
        y in -500i16..500,
        facing in direction(),
        requested in direction(),
    ) {
        let next = Position::new(x, y, facing).step(requested);
        let expected = if requested == facing.opposite() { facing } else { requested };
        let (dx, dy) = expected.delta();

        prop_assert_eq!(next.facing, expected);
        prop_assert_eq!(next.cell(), (x + dx, y + dy));
    }

    #[test]
    fn chain_stays_contiguous(
        len in 1usize..20,
        moves in prop::collection::vec(direction(), 0..60),
    ) {
        let mut chain = SnakeChain::straight(1000, 1000, Direction::Right, len).unwrap();
        for dir in moves {
            let before: Vec<(i16, i16)> = chain.iter().map(|s| s.position.cell()).collect();
            chain.advance(dir);
            let after: Vec<(i16, i16)> = chain.iter().map(|s| s.position.cell()).collect();

            prop_assert_eq!(after.len(), len);
            prop_assert_eq!(&after[1..], &before[..len - 1]);
        }
    }

    #[test]
    fn constant_direction_is_a_translation(n in 0i16..50, facing in direction()) {
        let start = SnakeChain::straight(100, 100, facing, 8).unwrap();
        let mut chain = start.clone();
        for _ in 0..n {
            chain.advance(facing);
        }

        let (dx, dy) = facing.delta();
        for (a, b) in start.iter().zip(chain.iter()) {
            prop_assert_eq!(b.position.cell(), (a.position.x + dx * n, a.position.y + dy * n));
        }
    }
}
