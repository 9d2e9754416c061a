//! Preset level pack.
//!
//! Nine levels, roughly in order of difficulty. Each introduces one body
//! kind or combination before the final level mixes all of them.

use bevy::math::DVec2;

use super::{LevelLayout, LevelObject};

/// Planet colors as they appear in level files.
mod color {
    pub const BLUE: [u8; 3] = [50, 50, 255];
    pub const RED: [u8; 3] = [255, 30, 30];
    pub const GREEN: [u8; 3] = [50, 255, 50];
    pub const YELLOW: [u8; 3] = [255, 255, 50];
    pub const PURPLE: [u8; 3] = [200, 50, 200];
}

/// All preset levels, in play order.
pub static LEVELS: &[LevelLayout] = &[
    TUTORIAL,
    HEAVY_RED_PLANET,
    ANTI_GRAVITY_INTRO,
    BLACK_HOLE_GAUNTLET,
    GRAVITY_MAZE,
    OBSTACLE_COURSE,
    PUSH_AND_PULL,
    BLACK_HOLE_BINARY,
    FINAL_CHALLENGE,
];

/// Find a preset by its display name.
pub fn find(name: &str) -> Option<&'static LevelLayout> {
    LEVELS.iter().find(|level| level.name == name)
}

/// Level 1: a single normal planet between ship and goal.
pub static TUTORIAL: LevelLayout = LevelLayout {
    name: "Tutorial: Color-Based Gravity",
    description: "Blue is normal gravity, red is heavy, green is light. Curve around the blue planet.",
    max_shots: 3,
    ship_start: DVec2::new(100.0, 300.0),
    objects: &[
        LevelObject::planet(400.0, 300.0, 80.0, 25.0, color::BLUE),
        LevelObject::goal(700.0, 300.0),
    ],
};

/// Level 2: the goal sits just above a heavy planet.
pub static HEAVY_RED_PLANET: LevelLayout = LevelLayout {
    name: "Heavy Red Planet Challenge",
    description: "Red planets pull twice as hard. Let the heavy pull swing you up to the goal.",
    max_shots: 2,
    ship_start: DVec2::new(100.0, 400.0),
    objects: &[
        LevelObject::planet(400.0, 300.0, 100.0, 35.0, color::RED),
        LevelObject::goal(400.0, 150.0),
    ],
};

/// Level 3: an obstacle blocks the straight line and a well pushes you around it.
pub static ANTI_GRAVITY_INTRO: LevelLayout = LevelLayout {
    name: "Anti-Gravity Introduction",
    description: "Anti-gravity wells push you away. Use one to slip past the obstacle.",
    max_shots: 3,
    ship_start: DVec2::new(100.0, 300.0),
    objects: &[
        LevelObject::obstacle(350.0, 300.0, 20.0),
        LevelObject::anti_gravity(400.0, 250.0, 60.0),
        LevelObject::planet(600.0, 350.0, 80.0, 25.0, color::GREEN),
        LevelObject::goal(750.0, 300.0),
    ],
};

/// Level 4
pub static BLACK_HOLE_GAUNTLET: LevelLayout = LevelLayout {
    name: "Black Hole Gauntlet",
    description: "Skirt the black hole without touching its core.",
    max_shots: 2,
    ship_start: DVec2::new(100.0, 500.0),
    objects: &[
        LevelObject::black_hole(400.0, 300.0, 400.0),
        LevelObject::planet(250.0, 200.0, 60.0, 20.0, color::GREEN),
        LevelObject::goal(650.0, 150.0),
    ],
};

/// Level 5: superheavy, variable and light planets in one field.
pub static GRAVITY_MAZE: LevelLayout = LevelLayout {
    name: "Multi-Color Gravity Maze",
    description: "Purple is superheavy, yellow is variable, green is light. Thread the maze.",
    max_shots: 4,
    ship_start: DVec2::new(50.0, 300.0),
    objects: &[
        LevelObject::planet(200.0, 150.0, 80.0, 28.0, color::PURPLE),
        LevelObject::planet(450.0, 400.0, 90.0, 30.0, color::YELLOW),
        LevelObject::planet(650.0, 200.0, 100.0, 25.0, color::GREEN),
        LevelObject::small_obstacle(400.0, 250.0),
        LevelObject::goal(800.0, 300.0),
    ],
};

/// Level 6
pub static OBSTACLE_COURSE: LevelLayout = LevelLayout {
    name: "The Obstacle Course",
    description: "Dodge the obstacles and use the wells to reach the goal.",
    max_shots: 3,
    ship_start: DVec2::new(80.0, 400.0),
    objects: &[
        LevelObject::obstacle(200.0, 350.0, 18.0),
        LevelObject::obstacle(350.0, 250.0, 15.0),
        LevelObject::obstacle(500.0, 400.0, 20.0),
        LevelObject::planet(300.0, 500.0, 100.0, 30.0, color::BLUE),
        LevelObject::anti_gravity(450.0, 150.0, 70.0),
        LevelObject::goal(700.0, 200.0),
    ],
};

/// Level 7
pub static PUSH_AND_PULL: LevelLayout = LevelLayout {
    name: "Push and Pull Chaos",
    description: "Two wells push while heavy planets pull. Find the path between them.",
    max_shots: 4,
    ship_start: DVec2::new(100.0, 100.0),
    objects: &[
        LevelObject::anti_gravity(250.0, 200.0, 80.0),
        LevelObject::planet(400.0, 300.0, 120.0, 35.0, color::RED),
        LevelObject::anti_gravity(550.0, 150.0, 60.0),
        LevelObject::planet(300.0, 450.0, 90.0, 25.0, color::YELLOW),
        LevelObject::obstacle(450.0, 200.0, 12.0),
        LevelObject::goal(750.0, 400.0),
    ],
};

/// Level 8: two black holes.
pub static BLACK_HOLE_BINARY: LevelLayout = LevelLayout {
    name: "Black Hole Binary System",
    description: "Two black holes bend every path. Expert level.",
    max_shots: 3,
    ship_start: DVec2::new(50.0, 400.0),
    objects: &[
        LevelObject::black_hole(300.0, 200.0, 350.0),
        LevelObject::black_hole(500.0, 400.0, 350.0),
        LevelObject::planet(150.0, 250.0, 60.0, 20.0, color::GREEN),
        LevelObject::anti_gravity(650.0, 300.0, 100.0),
        LevelObject::goal(800.0, 100.0),
    ],
};

/// Level 9: every body kind.
pub static FINAL_CHALLENGE: LevelLayout = LevelLayout {
    name: "The Final Challenge",
    description: "Every body kind in one level.",
    max_shots: 5,
    ship_start: DVec2::new(80.0, 500.0),
    objects: &[
        LevelObject::planet(200.0, 400.0, 100.0, 30.0, color::PURPLE),
        LevelObject::obstacle(300.0, 300.0, 18.0),
        LevelObject::anti_gravity(400.0, 200.0, 80.0),
        LevelObject::black_hole(500.0, 350.0, 400.0),
        LevelObject::planet(350.0, 500.0, 70.0, 22.0, color::GREEN),
        LevelObject::small_obstacle(600.0, 250.0),
        LevelObject::planet(700.0, 400.0, 90.0, 28.0, color::RED),
        LevelObject::anti_gravity(750.0, 150.0, 60.0),
        LevelObject::goal(850.0, 300.0),
    ],
};
