use glam::Vec3;
use scene_lab::fireball::{Fireball, TravelPhase};
use scene_lab::mesh::MeshId;

const LOWER: f32 = 1.0;
const UPPER: f32 = 9.0;
const SPEED: f32 = 2.0;
const DELTA: f32 = 1.0 / 60.0;

fn fireball(start_height: f32) -> Fireball {
    Fireball::new(MeshId(0), Vec3::new(0.0, start_height, 0.0), LOWER, UPPER).with_speed(SPEED)
}

#[test]
fn test_height_stays_within_bounds_for_many_frames() {
    let epsilon = SPEED * DELTA;
    let mut fb = fireball(2.0);

    for frame in 0..100_000 {
        fb.update(DELTA);
        assert!(
            fb.position.y >= LOWER - epsilon && fb.position.y <= UPPER + epsilon,
            "height {} escaped bounds at frame {}",
            fb.position.y,
            frame
        );
    }
}

#[test]
fn test_direction_flips_once_per_threshold_crossing() {
    let mut fb = fireball(2.0);
    let mut flips = 0;
    let mut crossings = 0;
    let mut last_phase = fb.phase;
    let mut last_y = fb.position.y;

    for _ in 0..50_000 {
        fb.update(DELTA);
        if fb.phase != last_phase {
            flips += 1;
            last_phase = fb.phase;
        }
        let crossed_up = last_y <= UPPER && fb.position.y > UPPER;
        let crossed_down = last_y >= LOWER && fb.position.y < LOWER;
        if crossed_up || crossed_down {
            crossings += 1;
        }
        last_y = fb.position.y;
    }

    assert!(flips > 10, "expected several half-cycles, got {flips} flips");
    assert_eq!(
        flips, crossings,
        "each threshold crossing must produce exactly one flip"
    );
}

#[test]
fn test_no_flicker_at_the_bound() {
    // Park the fireball just past the upper bound: it must flip exactly once
    // and keep descending, not oscillate frame to frame.
    let mut fb = fireball(UPPER + 0.001);

    fb.update(DELTA);
    assert_eq!(fb.phase, TravelPhase::Descending);

    let y_after_flip = fb.position.y;
    fb.update(DELTA);
    assert_eq!(fb.phase, TravelPhase::Descending);
    assert!(fb.position.y < y_after_flip);
}

#[test]
fn test_two_fireballs_match_closed_form_accumulation() {
    // Independent reference: same hysteresis rules, written as a plain
    // scalar recurrence.
    fn reference(mut y: f32, frames: usize) -> f32 {
        let mut ascending = true;
        for _ in 0..frames {
            if ascending && y > UPPER {
                ascending = false;
            } else if !ascending && y < LOWER {
                ascending = true;
            }
            y += if ascending { SPEED * DELTA } else { -SPEED * DELTA };
        }
        y
    }

    let starts = [2.0_f32, 3.5];
    let frames = 12_345;

    for start in starts {
        let mut fb = fireball(start);
        for _ in 0..frames {
            fb.update(DELTA);
        }
        let expected = reference(start, frames);
        assert!(
            (fb.position.y - expected).abs() < 1e-3,
            "start {start}: got {}, reference {expected}",
            fb.position.y
        );
    }
}
