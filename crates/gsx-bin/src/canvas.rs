//! Terminal layout consumer.
//!
//! Renders a snapshot by placing each run's text at its `(col, row)` grid
//! coordinate with the run's color and weight. A terminal is the degenerate
//! case of the layout contract: the cell size is fixed at one character cell,
//! and weight collapses to the bold attribute. Render failures are logged and
//! swallowed; a paint glitch must never take down the receive loop.

use core_bridge::LayoutConsumer;
use core_snapshot::Snapshot;
use core_style::color::parse_color;
use core_style::weight::is_bold;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};
use tracing::{trace, warn};

pub struct TerminalCanvas {
    out: Stdout,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn paint(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0), ResetColor)?;
        for run in &snapshot.runs {
            let col = run.col.min(u16::MAX as usize) as u16;
            let row = run.row.min(u16::MAX as usize) as u16;
            queue!(self.out, MoveTo(col, row))?;
            if run.style.color.is_empty() {
                queue!(self.out, ResetColor)?;
            } else {
                let rgb = parse_color(&run.style.color);
                queue!(
                    self.out,
                    SetForegroundColor(Color::Rgb {
                        r: rgb.r,
                        g: rgb.g,
                        b: rgb.b,
                    })
                )?;
            }
            if is_bold(&run.style.weight) {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            queue!(self.out, Print(&run.text), SetAttribute(Attribute::Reset))?;
        }
        queue!(
            self.out,
            ResetColor,
            MoveTo(0, snapshot.height.min(u16::MAX as usize) as u16)
        )?;
        self.out.flush()
    }
}

impl Default for TerminalCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConsumer for TerminalCanvas {
    fn render(&mut self, snapshot: &Snapshot) {
        trace!(
            target: "render.canvas",
            width = snapshot.width,
            height = snapshot.height,
            run_count = snapshot.runs.len(),
            "render"
        );
        if let Err(e) = self.paint(snapshot) {
            warn!(target: "render.canvas", error = %e, "paint_failed");
        }
    }
}
