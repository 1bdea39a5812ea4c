//! Behavioural tests for the particle field.
//!
//! These drive a field on a `RecordingSurface` the way a host would:
//! pointer events in, one `frame()` per display refresh.

use sparkfield::prelude::*;
use sparkfield::{DrawCall, SurfaceError};

type TestField<R> = ParticleField<RecordingSurface, R>;

fn attach<R: RandomSource>(config: FieldConfig, rng: R) -> TestField<R> {
    let mut field = ParticleField::new(config, rng);
    let state = field.attach(|| Ok(RecordingSurface::new(800, 600)));
    assert_eq!(state, FieldState::Attached);
    field
}

/// Always spawns on move, and every drawn value sits mid-range.
fn always_spawn() -> SequenceRandom {
    SequenceRandom::constant(0.0)
}

// ============================================================================
// Lifetime and aging
// ============================================================================

#[test]
fn test_particles_gone_after_lifetime() {
    let mut field = attach(FieldConfig::default(), SeededRandom::from_seed(1));
    field.clicked(400.0, 300.0);
    assert_eq!(field.len(), 10);

    for _ in 0..59 {
        field.frame();
    }
    assert_eq!(field.len(), 10, "still alive one frame before expiry");

    field.frame();
    assert!(field.is_empty());
}

#[test]
fn test_age_increases_by_one_per_frame() {
    let mut field = attach(FieldConfig::default(), always_spawn());
    field.pointer_moved(10.0, 10.0);

    let mut last_age = field.particles()[0].age();
    assert_eq!(last_age, 0);
    while !field.is_empty() {
        field.frame();
        if let Some(p) = field.particles().first() {
            assert_eq!(p.age(), last_age + 1);
            assert!(p.age() < p.lifetime());
            last_age = p.age();
        }
    }
    assert_eq!(last_age, 59);
}

#[test]
fn test_velocity_decays_geometrically() {
    let config = FieldConfig::default();
    let damping = config.damping;
    let mut field = attach(config, SeededRandom::from_seed(7));
    field.clicked(0.0, 0.0);

    let initial: Vec<f32> = field.particles().iter().map(|p| p.velocity.length()).collect();
    let mut previous = initial.clone();

    for n in 1..=30 {
        field.frame();
        for (i, p) in field.particles().iter().enumerate() {
            let speed = p.velocity.length();
            assert!(speed <= previous[i] + 1e-6);
            assert!(speed <= initial[i] * damping.powi(n) + 1e-4);
            previous[i] = speed;
        }
    }
}

// ============================================================================
// Spawning
// ============================================================================

/// Scripted source: roll hit, four spawn draws, then two misses. Repeats.
fn one_in_three() -> SequenceRandom {
    SequenceRandom::new(vec![0.1, 0.5, 0.5, 0.5, 0.5, 0.9, 0.9])
}

#[test]
fn test_move_spawn_is_probabilistic_exact() {
    let mut field = attach(FieldConfig::default(), one_in_three());
    for i in 0..30 {
        field.pointer_moved(i as f32, 0.0);
    }
    assert_eq!(field.len(), 10);
}

#[test]
fn test_move_spawn_rate_matches_probability() {
    let config = FieldConfig::default().with_lifetime(u32::MAX);
    let p = config.spawn_probability as f64;
    let mut field = attach(config, SeededRandom::from_seed(2024));

    let m = 10_000;
    for i in 0..m {
        field.pointer_moved((i % 800) as f32, 300.0);
    }

    let expected = m as f64 * p;
    let sigma = (m as f64 * p * (1.0 - p)).sqrt();
    let spawned = field.len() as f64;
    assert!(
        (spawned - expected).abs() < 5.0 * sigma,
        "spawned {spawned}, expected {expected} +- {sigma}"
    );
    assert!(field.len() < m);
}

#[test]
fn test_click_spawns_exact_burst() {
    let mut field = attach(FieldConfig::default(), SeededRandom::from_seed(3));
    for i in 0..25 {
        field.pointer_moved(i as f32 * 4.0, 80.0);
    }
    let before = field.len();

    field.clicked(200.0, 200.0);
    assert_eq!(field.len() - before, 10);
}

#[test]
fn test_custom_burst_count() {
    let config = FieldConfig::default().with_burst_count(25);
    let mut field = attach(config, SeededRandom::from_seed(4));
    field.clicked(1.0, 1.0);
    assert_eq!(field.len(), 25);
}

// ============================================================================
// Steady state
// ============================================================================

#[test]
fn test_no_leak_under_sustained_input() {
    let config = FieldConfig::default().with_spawn_probability(1.0);
    let lifetime = config.lifetime as usize;
    let mut field = attach(config, SeededRandom::from_seed(5));

    let mut max_seen = 0;
    for t in 0..lifetime * 5 {
        field.pointer_moved((t % 800) as f32, 100.0);
        field.frame();
        max_seen = max_seen.max(field.len());
        if t >= lifetime {
            assert_eq!(field.len(), lifetime - 1);
        }
    }
    assert!(max_seen < lifetime);
}

// ============================================================================
// Attach / detach
// ============================================================================

#[test]
fn test_no_draws_after_detach() {
    let mut field = attach(FieldConfig::default(), always_spawn());
    field.clicked(10.0, 10.0);
    assert_eq!(field.frame(), FrameRequest::Next);

    let surface = field.detach().expect("surface handed back");
    let calls_at_detach = surface.calls().len();

    // A frame callback that was already queued still fires
    assert_eq!(field.frame(), FrameRequest::Stop);
    field.pointer_moved(20.0, 20.0);
    field.clicked(20.0, 20.0);
    field.resized(100, 100);

    assert!(field.is_empty());
    assert_eq!(field.state(), FieldState::Detached);
    assert_eq!(surface.calls().len(), calls_at_detach);
    assert!(field.detach().is_none());
}

#[test]
fn test_unavailable_surface_degrades_to_nothing() {
    let mut field: TestField<_> = ParticleField::new(FieldConfig::default(), always_spawn());
    let state = field.attach(|| Err(SurfaceError::Unsupported("no canvas".into())));
    assert_eq!(state, FieldState::Disabled);

    field.pointer_moved(1.0, 1.0);
    field.clicked(1.0, 1.0);
    assert!(field.is_empty());
    assert_eq!(field.frame(), FrameRequest::Stop);
    assert_eq!(field.stats().spawned, 0);
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_single_move_fades_out_completely() {
    let mut field = attach(FieldConfig::default(), always_spawn());
    assert_eq!(field.surface().unwrap().size(), (800, 600));

    field.pointer_moved(100.0, 100.0);
    assert_eq!(field.len(), 1);

    for _ in 0..59 {
        field.frame();
    }
    assert_eq!(field.surface().unwrap().last_frame().len(), 1);

    field.frame();
    assert!(field.is_empty());

    let surface = field.surface().unwrap();
    assert!(surface.ended_with_clear());
    assert_eq!(surface.clear_count(), 60);
    assert_eq!(surface.calls().last(), Some(&DrawCall::Present));
}

#[test]
fn test_click_burst_at_point() {
    let mut field = attach(FieldConfig::default(), SeededRandom::from_seed(6));
    field.clicked(50.0, 50.0);

    assert_eq!(field.len(), 10);
    assert!(field
        .particles()
        .iter()
        .all(|p| p.position == Vec2::new(50.0, 50.0) && p.age() == 0));
}

#[test]
fn test_drawn_alpha_follows_age() {
    let mut field = attach(FieldConfig::default().with_lifetime(10), always_spawn());
    field.pointer_moved(0.0, 0.0);

    for frame in 1..10 {
        field.frame();
        let drawn = field.surface().unwrap().last_frame();
        assert_eq!(drawn.len(), 1);
        let expected = 1.0 - frame as f32 / 10.0;
        assert!((drawn[0].alpha - expected).abs() < 1e-6);
    }
}
