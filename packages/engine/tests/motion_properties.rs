use animata_engine::geometry::{between, ranges_overlap, to_degrees, Range, Vector};
use animata_engine::{ActorConfig, BoundingBox, StageCore};

const EPS: f32 = 1e-3;

#[test]
fn vector_components_follow_heading() {
    let v = Vector::new(10.0, 90.0);
    assert!(v.x().abs() < EPS);
    assert!((v.y() - 10.0).abs() < EPS);
}

#[test]
fn direction_normalises_into_range() {
    let mut v = Vector::new(1.0, 0.0);
    v.set_direction(-90.0);
    assert!((v.direction() - 270.0).abs() < EPS);
    v.set_direction(720.0 + 45.0);
    assert!((v.direction() - 45.0).abs() < EPS);
}

#[test]
fn ranges_from_overview() {
    assert!(between(5.0, &Range::new(10.0, 0.0)));
    assert!(ranges_overlap(&Range::new(0.0, 10.0), &Range::new(10.0, 20.0)));
    assert!(!ranges_overlap(&Range::new(0.0, 10.0), &Range::new(11.0, 20.0)));
}

#[test]
fn boxes_from_overview() {
    let a = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
    let b = BoundingBox::new(5.0, 15.0, 5.0, 15.0);
    let c = BoundingBox::new(20.0, 30.0, 20.0, 30.0);
    assert!(a.overlaps(&b) && b.overlaps(&a));
    assert!(!a.overlaps(&c));
}

#[test]
fn radians_to_degrees() {
    assert!((to_degrees(std::f32::consts::PI) - 180.0).abs() < EPS);
}

#[test]
fn wall_bounce_keeps_actor_inside() {
    let mut stage = StageCore::new();
    stage.set_surface(100.0, 100.0);
    let id = stage
        .add_actor(&ActorConfig::default().at(97.0, 40.0).sized(10.0, 10.0).moving(5.0, 0.0))
        .id();
    stage.tick();

    let actor = stage.actor(id).unwrap();
    assert!(actor.x() >= 0.0 && actor.x() <= 90.0);
    assert!(actor.vector().x() < 0.0);
}

#[test]
fn timed_move_snaps_on_last_tick() {
    let mut stage = StageCore::new();
    let id = stage.add_actor(&ActorConfig::default().at(3.0, 9.0).moving(2.0, 45.0)).id();
    assert!(stage.move_actor_to(id, 71.1, 13.7, 0.5));

    let frames = stage.actor(id).and_then(|a| a.moving_to()).map(|m| m.frames_remaining);
    assert_eq!(frames, Some(15));
    for _ in 0..15 {
        stage.tick();
    }

    let actor = stage.actor(id).unwrap();
    assert_eq!((actor.x(), actor.y()), (71.1, 13.7));
    assert!(!actor.is_moving_to_position());
}
