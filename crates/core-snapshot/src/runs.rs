//! Run coalescer: styled cells → minimal positioned runs.
//!
//! Walks the cell sequence in index order keeping one open run. A newline
//! flushes the open run and never opens one for itself; a style change
//! (structural equality on color+weight) flushes and reopens at the current
//! cell; everything else appends. The result is maximal coalescing: no two
//! adjacent runs on the same row share a style, and replaying the runs by
//! position reproduces the per-cell styling exactly.

use crate::Run;
use core_grid::{Cell, Grid};

/// Coalesce a styled grid into its ordered run sequence.
pub fn coalesce(grid: &Grid) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut open: Option<Run> = None;

    for cell in &grid.cells {
        if cell.ch == '\n' {
            if let Some(run) = open.take() {
                runs.push(run);
            }
            continue;
        }
        open = Some(match open.take() {
            Some(mut run) if run.style == cell.style => {
                run.text.push(cell.ch);
                run
            }
            Some(run) => {
                runs.push(run);
                start_run(cell)
            }
            None => start_run(cell),
        });
    }
    if let Some(run) = open.take() {
        runs.push(run);
    }
    runs
}

fn start_run(cell: &Cell) -> Run {
    Run {
        index: cell.index,
        row: cell.row,
        col: cell.col,
        style: cell.style.clone(),
        text: cell.ch.to_string(),
    }
}
