use super::*;
use nalgebra::Matrix3;
use proptest::prelude::*;

fn at(x: i64, y: i64, z: i64) -> Vec3 {
    Vec3::new(x as f64, y as f64, z as f64)
}

fn lying_x(x: i64, y: i64) -> BlockState {
    BlockState::new(at(x, y, 0), at(x + 1, y, 0))
}

fn lying_y(x: i64, y: i64) -> BlockState {
    BlockState::new(at(x, y, 0), at(x, y + 1, 0))
}

fn upright(x: i64, y: i64) -> BlockState {
    BlockState::new(at(x, y, 0), at(x, y, -1))
}

/// Footprint shape with the translation removed.
fn shape(s: &BlockState) -> [[i64; 3]; 2] {
    let [a, b] = s.key().0;
    [[0, 0, 0], [b[0] - a[0], b[1] - a[1], b[2] - a[2]]]
}

#[test]
fn standing_block_tips_over_in_each_direction() {
    let s = BlockState::standing(1, 1);
    assert_eq!(roll(&s, Direction::Down), BlockState::new(at(1, 2, 0), at(1, 3, 0)));
    assert_eq!(roll(&s, Direction::Up), BlockState::new(at(1, 0, 0), at(1, -1, 0)));
    assert_eq!(roll(&s, Direction::Right), BlockState::new(at(2, 1, 0), at(3, 1, 0)));
    assert_eq!(roll(&s, Direction::Left), BlockState::new(at(0, 1, 0), at(-1, 1, 0)));
}

#[test]
fn lying_block_stands_up_or_rolls_sideways() {
    let s = lying_x(2, 1);
    // along its long axis: stands up on the next cell
    assert_eq!(roll(&s, Direction::Right), upright(4, 1));
    assert_eq!(roll(&s, Direction::Left), upright(1, 1));
    // across its long axis: stays lying, shifts one row
    assert_eq!(roll(&s, Direction::Down), lying_x(2, 2));
    assert_eq!(roll(&s, Direction::Up), lying_x(2, 0));

    let v = lying_y(3, 3);
    assert_eq!(roll(&v, Direction::Down), upright(3, 5));
    assert_eq!(roll(&v, Direction::Up), upright(3, 2));
    assert_eq!(roll(&v, Direction::Left), lying_y(2, 3));
}

#[test]
fn pivot_follows_bounding_extents() {
    let s = lying_x(2, 1);
    assert_eq!(pivot(&s, Direction::Down), Vec3::new(3.5, 1.5, 0.5));
    assert_eq!(pivot(&s, Direction::Right), Vec3::new(3.5, 1.5, 0.5));
    assert_eq!(pivot(&s, Direction::Up), Vec3::new(1.5, 0.5, 0.5));
    assert_eq!(pivot(&s, Direction::Left), Vec3::new(1.5, 0.5, 0.5));
}

#[test]
fn apply_appends_unit_coordinate() {
    // pure translation by (2, -1, 0)
    let mut m = nalgebra::Matrix4::<f64>::identity();
    m[(0, 3)] = 2.0;
    m[(1, 3)] = -1.0;
    assert_eq!(apply(&m, at(1, 1, -1)), at(3, 0, -1));
}

#[test]
fn linear_parts_have_order_four() {
    for d in Direction::ALL {
        let r = linear_part(d);
        assert_eq!(r * r * r * r, Matrix3::identity(), "{d}");
        assert_ne!(r * r, Matrix3::identity(), "{d}");
        // opposite directions are inverse rotations
        assert_eq!(r * linear_part(d.opposite()), Matrix3::identity(), "{d}");
    }
}

#[test]
fn key_is_order_independent() {
    let a = BlockState::new(at(0, 0, 0), at(1, 0, -1));
    let b = BlockState::new(at(1, 0, -1), at(0, 0, 0));
    assert_eq!(a.key(), b.key());
    assert_eq!(a, b);
    assert_ne!(a.key(), upright(0, 0).key());
}

#[test]
fn direction_symbols_parse_back() {
    for d in Direction::ALL {
        assert_eq!(Direction::try_from(d.symbol()), Ok(d));
    }
    assert_eq!(
        Direction::try_from('x'),
        Err(crate::RollError::InvalidDirection('x'))
    );
}

fn arb_state() -> impl Strategy<Value = BlockState> {
    (-20i64..20, -20i64..20, 0u8..3).prop_map(|(x, y, o)| match o {
        0 => upright(x, y),
        1 => lying_x(x, y),
        _ => lying_y(x, y),
    })
}

fn arb_dir() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn opposite_roll_restores_state(s in arb_state(), d in arb_dir()) {
        let back = roll(&roll(&s, d), d.opposite());
        prop_assert_eq!(back, s);
    }

    #[test]
    fn four_rolls_restore_orientation(s in arb_state(), d in arb_dir()) {
        let s4 = roll_all(&s, [d; 4]);
        prop_assert_eq!(s4.is_standing(), s.is_standing());
        prop_assert_eq!(shape(&s4), shape(&s));
    }

    #[test]
    fn rolled_block_rests_on_floor(s in arb_state(), d in arb_dir()) {
        let r = roll(&s, d);
        let zs: Vec<i64> = r.key().0.iter().map(|c| c[2]).collect();
        prop_assert!(zs.contains(&0));
        prop_assert!(zs.iter().all(|&z| z == 0 || z == -1));
        for c in r.cubes {
            prop_assert_eq!(c.x.fract(), 0.0);
            prop_assert_eq!(c.y.fract(), 0.0);
        }
    }

    #[test]
    fn roll_moves_centre_at_most_one_and_a_half(s in arb_state(), d in arb_dir()) {
        let (cx, cy) = s.centre();
        let (nx, ny) = roll(&s, d).centre();
        let shift = (nx - cx).abs() + (ny - cy).abs();
        prop_assert!(shift == 1.0 || shift == 1.5);
    }
}
