//! Splits the walls around a room and walks the edit through undo/redo.
//!
//! Usage:
//! ```text
//! cargo run --example split_demo
//! RUST_LOG=wallside=debug cargo run --example split_demo
//! ```

use wallside::history::UndoableEdit;
use wallside::math::Point2;
use wallside::operations::modification::{ModifyRooms, RoomModification, WallSidesDefaults};
use wallside::plan::{FloorPlan, Paint, Room, Wall};
use wallside::WallsideError;

fn main() -> Result<(), WallsideError> {
    // Default: WARN for everything, INFO for wallside.
    // Override with RUST_LOG env var (e.g. RUST_LOG=wallside=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("split_demo=info".parse().unwrap_or_default())
        .add_directive("wallside=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut plan = FloorPlan::new();
    let room = plan.add_room(
        Room::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(500.0, 0.0),
            Point2::new(500.0, 500.0),
            Point2::new(0.0, 500.0),
        ])
        .with_name("Living"),
    );
    plan.add_wall(Wall::new(Point2::new(-50.0, 250.0), Point2::new(550.0, 250.0), 10.0));
    plan.add_wall(Wall::new(Point2::new(250.0, 250.0), Point2::new(250.0, 550.0), 10.0));

    let sides = ModifyRooms::bordering_wall_sides(&plan, &[room])?;
    let defaults = WallSidesDefaults::collect(&plan, &sides)?;
    tracing::info!(sides = sides.len(), ?defaults, "bordering wall sides");
    tracing::info!(
        available = ModifyRooms::split_available(&plan, &[room])?,
        "split probe"
    );

    let modification = RoomModification {
        wall_sides_paint: Some(Paint::Color(0x00E0_D0B0)),
        split_surrounding_walls: true,
        ..RoomModification::default()
    };
    let mut edit = ModifyRooms::new(vec![room], modification).execute(&mut plan)?;
    print_walls("after split", &plan);

    edit.undo(&mut plan)?;
    print_walls("after undo", &plan);

    edit.redo(&mut plan)?;
    print_walls("after redo", &plan);
    plan.check_chain()
}

fn print_walls(label: &str, plan: &FloorPlan) {
    tracing::info!("{label}: {} walls", plan.wall_count());
    for (id, wall) in plan.walls() {
        tracing::info!(
            ?id,
            start = ?(wall.start.x, wall.start.y),
            end = ?(wall.end.x, wall.end.y),
            at_start = ?wall.wall_at_start(),
            at_end = ?wall.wall_at_end(),
            "wall"
        );
    }
}
