use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use chiton_core::{RiskGrid, expand, parse_grid};
use chiton_paths::{Selection, ShortestPathEngine};

use crate::cli::Part;

pub fn read_grid(path: &Path) -> Result<RiskGrid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read risk map from file({}).", path.display()))?;
    parse_grid(&text)
        .with_context(|| format!("Invalid risk map in file({}).", path.display()))
}

pub fn solve(input_path: &Path, selection: Selection, part: Part, show_path: bool) -> Result<()> {
    let grid = read_grid(input_path)?;
    log::info!(
        "loaded {}x{} map from {}",
        grid.width(),
        grid.height(),
        input_path.display()
    );
    let engine = ShortestPathEngine::new(selection);

    if part.includes_one() {
        report(&engine, &grid, "Part 1", show_path)?;
    }
    if part.includes_two() {
        let tiled = expand(&grid);
        report(&engine, &tiled, "Part 2", show_path)?;
    }
    Ok(())
}

fn report(engine: &ShortestPathEngine, grid: &RiskGrid, label: &str, show_path: bool) -> Result<()> {
    let (w, h) = (grid.width(), grid.height());
    if show_path {
        let path = engine
            .shortest_path(grid)
            .with_context(|| format!("Failed to search {w}x{h} map."))?;
        println!("{label}: {}", path.cost);
        println!("  route: {} cells", path.cells.len());
    } else {
        let cost = engine
            .minimal_cost(grid)
            .with_context(|| format!("Failed to search {w}x{h} map."))?;
        println!("{label}: {cost}");
    }
    Ok(())
}

pub fn cross_check(count: usize, max_size: i32, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let linear = ShortestPathEngine::new(Selection::LinearScan);
    let heap = ShortestPathEngine::new(Selection::BinaryHeap);

    for i in 0..count {
        let w = rng.random_range(1..=max_size);
        let h = rng.random_range(1..=max_size);
        let grid = RiskGrid::random(w, h, &mut rng)?;
        let a = linear.minimal_cost(&grid)?;
        let b = heap.minimal_cost(&grid)?;
        log::debug!("map {i}: {w}x{h} costs {a}");
        if a != b {
            bail!(
                "Strategies disagree on map {i} ({w}x{h}, seed {seed}): linear scan {a}, binary heap {b}."
            );
        }
    }
    println!("cross-check passed: {count} maps up to {max_size}x{max_size} (seed {seed})");
    Ok(())
}
