use clap::Parser;
use pathfinding::prelude::astar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;

use grid_search::config::Config;
use grid_search::{solve_named, CellState, Grid, Position, SearchResult};

fn main() {
    let config = Config::parse();

    if config.rows < 2 || config.cols < 2 {
        eprintln!("Grid must be at least 2x2");
        std::process::exit(1);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Starting grid search...");
    println!("Grid size: {}x{}", config.rows, config.cols);
    println!("Algorithm: {}", config.algorithm);
    println!("Seed: {} (for reproducibility)", seed);
    println!();

    // Start in the top-left quadrant, destination in the bottom-right, so
    // random layouts always leave some distance to cover.
    let start = Position::new(
        rng.gen_range(0..config.rows / 2),
        rng.gen_range(0..config.cols / 2),
    );
    let destination = Position::new(
        rng.gen_range(config.rows / 2..config.rows),
        rng.gen_range(config.cols / 2..config.cols),
    );

    let mut grid = Grid::new(config.rows, config.cols);
    grid.set_state(start, CellState::Start);
    grid.set_state(destination, CellState::Destination);
    let placed = grid.scatter_walls(config.num_walls, &mut rng);
    println!("Walls placed: {placed}");

    grid.print_grid();

    let result = match solve_named(&mut grid, &config.algorithm) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    if !config.no_visualization {
        replay(
            &mut grid,
            &result,
            start,
            Duration::from_millis(config.delay_ms),
        );
    }

    println!("=== RESULTS ===");
    println!("Solved: {}", result.solved);
    println!("Cells examined: {}", result.visited.len());
    println!("Path length: {}", result.path_len());

    match optimal_path_length(&grid, start, destination) {
        Some(optimal) => {
            println!("Optimal path length: {optimal}");
            if result.solved && optimal > 0 {
                println!(
                    "Route efficiency: {:.3}",
                    result.path_len() as f64 / optimal as f64
                );
            }
        }
        None => println!("Cross-check: no path exists on this layout"),
    }
}

/// Shortest path length on the current layout, computed with the
/// `pathfinding` crate as an independent cross-check of the strategies.
fn optimal_path_length(grid: &Grid, start: Position, destination: Position) -> Option<usize> {
    let (path, _) = astar(
        &start,
        |&p| {
            grid.neighbors(p)
                .into_iter()
                .map(|n| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |&p| {
            (p.row.abs_diff(destination.row) + p.col.abs_diff(destination.col)) as u32
        },
        |&p| p == destination,
    )?;
    // The oracle path includes the start cell; ours does not.
    Some(path.len() - 1)
}

/// Steps through a finished search one tick at a time: the cell under
/// examination is shown as `Current`, everything already examined as
/// `Visited`, and finally the route as `Path`. The grid is reset afterwards
/// so the run leaves no trace.
fn replay(grid: &mut Grid, result: &SearchResult, start: Position, delay: Duration) {
    let mut previous: Option<Position> = None;
    for &pos in &result.visited {
        if let Some(prev) = previous {
            grid.set_state(prev, CellState::Visited);
        }
        grid.set_state(pos, CellState::Current);
        previous = Some(pos);
        grid.print_grid();
        thread::sleep(delay);
    }
    if let Some(prev) = previous {
        grid.set_state(prev, CellState::Visited);
    }

    for &pos in &result.path {
        // Keep the destination marker visible at the end of the route.
        if grid.state(pos) != CellState::Destination {
            grid.set_state(pos, CellState::Path);
        }
    }
    grid.print_grid();
    thread::sleep(delay);

    for &pos in &result.path {
        if grid.state(pos) == CellState::Path {
            grid.set_state(pos, CellState::Visited);
        }
    }
    grid.reset_visited(start);
}
