//! Base-world behavior over synthetic datasets.

use numgrid_core::{Action, Observation, Vec2, NO_GUESS};
use numgrid_env::{Environment, NumGrid, WorldConfig, WorldError};
use numgrid_test_utils::{digit_dataset, pixel_for};
use std::io::Cursor;

/// A 2x2-tile world from a 4-record dataset with labels [0, 1, 2, 3] and
/// 4x4-pixel tiles.
fn two_by_two(config: WorldConfig) -> NumGrid {
    let (images, labels) = digit_dataset(&[0, 1, 2, 3], 4, 4);
    NumGrid::from_readers(&config, Cursor::new(images), Cursor::new(labels)).unwrap()
}

fn small_config() -> WorldConfig {
    WorldConfig {
        size: (2, 2),
        cursor_size: (4, 4),
        num_steps: Some(100),
        seed: 42,
        ..Default::default()
    }
}

#[test]
fn mosaic_tiles_land_row_major() {
    let world = two_by_two(small_config());
    assert_eq!(world.mosaic().dim(), (8, 8));
    assert_eq!(world.labels()[[0, 0]], 0);
    assert_eq!(world.labels()[[0, 1]], 1);
    assert_eq!(world.labels()[[1, 0]], 2);
    assert_eq!(world.labels()[[1, 1]], 3);

    assert_eq!(world.mosaic()[[0, 0]], pixel_for(0));
    assert_eq!(world.mosaic()[[0, 4]], pixel_for(1));
    assert_eq!(world.mosaic()[[4, 0]], pixel_for(2));
    assert_eq!(world.mosaic()[[7, 7]], pixel_for(3));
}

#[test]
fn correct_guess_at_reset_position_earns_the_reward() {
    let mut world = two_by_two(small_config());
    let observation = world.reset().unwrap();
    let Observation::Position(pos) = observation else {
        panic!("base world must emit position observations");
    };
    assert_eq!(pos, world.cursor_pos());

    let digit = world.current_digit();
    let step = world
        .step(Action::DigitPosition { digit, pos })
        .unwrap();
    assert_eq!(step.reward, 3.0);
    assert_eq!(step.info.digit, digit);
    assert!(!step.info.out_of_bounds);
}

#[test]
fn wrong_guess_and_no_guess_rewards() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();
    let pos = world.cursor_pos();
    let digit = world.current_digit();

    let wrong = world
        .step(Action::DigitPosition {
            digit: (digit + 1) % 10,
            pos,
        })
        .unwrap();
    assert_eq!(wrong.reward, -3.0);

    let none = world
        .step(Action::DigitPosition {
            digit: NO_GUESS,
            pos,
        })
        .unwrap();
    assert_eq!(none.reward, 0.0);
}

#[test]
fn out_of_bounds_target_is_flagged_and_cursor_stays() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();
    let before = world.cursor_pos();

    let step = world
        .step(Action::DigitPosition {
            digit: NO_GUESS,
            pos: Vec2::new(100, 0),
        })
        .unwrap();
    assert!(step.info.out_of_bounds);
    assert_eq!(world.cursor_pos(), before);
    assert_eq!(step.observation, Observation::Position(before));
}

#[test]
fn accepted_position_moves_the_cursor() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();

    let target = Vec2::new(4, 0);
    let step = world
        .step(Action::DigitPosition {
            digit: NO_GUESS,
            pos: target,
        })
        .unwrap();
    assert!(!step.info.out_of_bounds);
    assert_eq!(world.cursor_pos(), target);

    // Center (6, 2) lands in the top-right tile.
    assert_eq!(world.current_digit(), 1);
}

#[test]
fn info_reports_the_digit_before_the_move() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();
    world
        .step(Action::DigitPosition {
            digit: NO_GUESS,
            pos: Vec2::new(0, 0),
        })
        .unwrap();

    // Moving to the bottom-right tile still reports the pre-move digit.
    let step = world
        .step(Action::DigitPosition {
            digit: NO_GUESS,
            pos: Vec2::new(4, 4),
        })
        .unwrap();
    assert_eq!(step.info.digit, 0);
    assert_eq!(world.current_digit(), 3);
}

#[test]
fn episode_ends_after_num_steps() {
    let mut world = two_by_two(WorldConfig {
        num_steps: Some(3),
        ..small_config()
    });
    world.reset().unwrap();
    let action = |world: &NumGrid| Action::DigitPosition {
        digit: NO_GUESS,
        pos: world.cursor_pos(),
    };

    assert!(!world.step(action(&world)).unwrap().done);
    assert!(!world.step(action(&world)).unwrap().done);
    assert!(world.step(action(&world)).unwrap().done);

    // Reset starts a fresh episode.
    world.reset().unwrap();
    assert!(!world.step(action(&world)).unwrap().done);
}

#[test]
fn continuing_variant_never_signals_done() {
    let mut world = two_by_two(WorldConfig {
        num_steps: None,
        ..small_config()
    });
    world.reset().unwrap();
    for _ in 0..10 {
        let action = Action::DigitPosition {
            digit: NO_GUESS,
            pos: world.cursor_pos(),
        };
        assert!(!world.step(action).unwrap().done);
    }
}

#[test]
fn same_seed_replays_the_same_reset_sequence() {
    let mut a = two_by_two(small_config());
    let mut b = two_by_two(small_config());
    for _ in 0..5 {
        assert_eq!(a.reset().unwrap(), b.reset().unwrap());
    }
}

#[test]
fn cursor_view_tracks_the_cursor() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();
    world
        .step(Action::DigitPosition {
            digit: NO_GUESS,
            pos: Vec2::new(0, 0),
        })
        .unwrap();

    let view = world.cursor_view();
    assert_eq!(view.dim(), (4, 4));
    assert!(view.iter().all(|&p| p == pixel_for(0)));
}

#[test]
fn cursor_move_is_pure_and_tolerates_invalid_directions() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();
    let pos = world.cursor_pos();

    assert_eq!(world.cursor_move(Vec2::new(1, 0), 2), pos + Vec2::new(2, 0));
    assert_eq!(world.cursor_move(Vec2::new(1, 1), 2), pos);
    // No state was touched either way.
    assert_eq!(world.cursor_pos(), pos);
}

#[test]
fn malformed_actions_are_errors() {
    let mut world = two_by_two(small_config());
    world.reset().unwrap();

    assert!(world.step(Action::Index(3)).is_err());
    assert!(world
        .step(Action::DigitPosition {
            digit: 11,
            pos: world.cursor_pos(),
        })
        .is_err());
}

#[test]
fn digit_filter_selects_matching_records() {
    let (images, labels) = digit_dataset(&[7, 1, 7, 2, 7, 7, 3, 7], 4, 4);
    let config = WorldConfig {
        digits: Some([7].into_iter().collect()),
        ..small_config()
    };
    let world =
        NumGrid::from_readers(&config, Cursor::new(images), Cursor::new(labels)).unwrap();
    assert!(world.labels().iter().all(|&l| l == 7));
    assert!(world.mosaic().iter().all(|&p| p == pixel_for(7)));
}

#[test]
fn too_few_eligible_records_fails_construction() {
    let (images, labels) = digit_dataset(&[7, 1, 7, 2], 4, 4);
    let config = WorldConfig {
        digits: Some([9].into_iter().collect()),
        ..small_config()
    };
    let err =
        NumGrid::from_readers(&config, Cursor::new(images), Cursor::new(labels)).unwrap_err();
    assert!(matches!(
        err,
        WorldError::NotEnoughRecords {
            needed: 4,
            available: 0
        }
    ));
}

#[test]
fn oversized_cursor_fails_construction() {
    let (images, labels) = digit_dataset(&[0, 1, 2, 3], 4, 4);
    let config = WorldConfig {
        cursor_size: (9, 9),
        ..small_config()
    };
    let err =
        NumGrid::from_readers(&config, Cursor::new(images), Cursor::new(labels)).unwrap_err();
    assert!(matches!(err, WorldError::CursorTooLarge { .. }));
}

#[test]
fn position_bounds_are_mosaic_minus_cursor() {
    let world = two_by_two(small_config());
    assert_eq!(world.position_space().high(), &[4, 4]);
    assert!(world.position_space().contains_pos(Vec2::new(4, 4)));
    assert!(!world.position_space().contains_pos(Vec2::new(5, 4)));
}
