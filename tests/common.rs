//! Test utilities for marga integration tests.
//!
//! Scene builders shared by the property and scenario tests.

#![allow(dead_code)]

use marga::Pathfinder;
use marga::core::Point3;

/// Route logs through env_logger when RUST_LOG is set.
pub fn init_logging() {
    env_logger::try_init().ok();
}

/// Two points of interest 1000 units apart on the X axis.
pub fn two_pois() -> Pathfinder {
    let mut pathfinder = Pathfinder::default();
    pathfinder.add_point_of_interest_at("P0", Point3::new(0.0, 0.0, 0.0));
    pathfinder.add_point_of_interest_at("P1", Point3::new(1000.0, 0.0, 0.0));
    pathfinder
}

/// `two_pois` with an obstacle blocking the straight line between them.
pub fn blocked_pois() -> Pathfinder {
    let mut pathfinder = two_pois();
    pathfinder.add_obstacle_at("rock", Point3::new(500.0, 0.0, 0.0), 50.0);
    pathfinder
}

/// `blocked_pois` plus a third point of interest in front of the rock,
/// whose midpoints give a way around it.
pub fn detour_scene() -> Pathfinder {
    let mut pathfinder = blocked_pois();
    pathfinder.add_point_of_interest_at("P2", Point3::new(500.0, 0.0, 1000.0));
    pathfinder
}

/// A denser scene for structural property checks.
pub fn cluttered_scene() -> Pathfinder {
    let mut pathfinder = Pathfinder::default();
    let pois = [
        ("dock", 0.0, 0.0, 0.0),
        ("shelf", 2000.0, 0.0, 0.0),
        ("table", 1000.0, 0.0, 1500.0),
        ("door", -500.0, 0.0, 1200.0),
    ];
    for (id, x, y, z) in pois {
        pathfinder.add_point_of_interest_at(id, Point3::new(x, y, z));
    }

    let obstacles = [
        ("crate", 1000.0, 0.0, 0.0, 100.0),
        ("chair", 300.0, 0.0, 900.0, 60.0),
        ("plant", 1600.0, 0.0, 1100.0, 40.0),
    ];
    for (id, x, y, z, r) in obstacles {
        pathfinder.add_obstacle_at(id, Point3::new(x, y, z), r);
    }
    pathfinder
}
