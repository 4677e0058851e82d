//! Glue between the event loop, the garden engine, and the terminal.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::constants::{WORLD_PER_CELL_X, WORLD_PER_CELL_Y};
use crate::drivers::{InputDriver, OutputDriver};
use crate::engine::{CancelToken, Garden};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::surface::BufferSurface;
use crate::tooltip::TooltipOverlay;

/// World-space position of a terminal cell's center.
pub fn world_of_cell(column: u16, row: u16) -> (f64, f64) {
    (
        (f64::from(column) + 0.5) * WORLD_PER_CELL_X,
        (f64::from(row) + 0.5) * WORLD_PER_CELL_Y,
    )
}

/// World-space viewport covered by a terminal of the given cell size.
pub fn world_viewport(columns: u16, rows: u16) -> (f64, f64) {
    (
        f64::from(columns) * WORLD_PER_CELL_X,
        f64::from(rows) * WORLD_PER_CELL_Y,
    )
}

fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

/// Run the garden until the cancel token fires or the user quits.
///
/// Frame ticks grow and repaint; resize events re-run layout; pointer
/// moves re-run the hit test. A draw failure is logged and the cycle
/// keeps running, so one bad frame never kills the whole garden.
pub fn run_garden<D, O>(
    input: D,
    output: &mut O,
    garden: &mut Garden,
    tooltip: &mut TooltipOverlay,
    cancel: &CancelToken,
    frame_budget: Duration,
) -> io::Result<()>
where
    D: InputDriver,
    O: OutputDriver,
{
    let (columns, rows) = output.viewport()?;
    let (width, height) = world_viewport(columns, rows);
    garden.resize(width, height);

    let mut event_loop = EventLoop::new(input, frame_budget);
    event_loop.run(cancel, |_, event| {
        match event {
            None => {
                garden.grow();
                let draw_result = output.draw(|mut frame| {
                    let area = frame.area();
                    {
                        let mut surface = BufferSurface::new(area, frame.buffer_mut());
                        garden.draw(&mut surface);
                    }
                    tooltip.render(&mut frame);
                });
                if let Err(err) = draw_result {
                    tracing::error!(%err, "frame draw failed; continuing");
                }
            }
            Some(Event::Resize(columns, rows)) => {
                let (width, height) = world_viewport(columns, rows);
                garden.resize(width, height);
            }
            Some(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Moved => {
                let (x, y) = world_of_cell(mouse.column, mouse.row);
                garden.pointer_moved(x, y, tooltip);
            }
            Some(Event::Key(key))
                if key.kind == KeyEventKind::Press && is_quit_key(key.code, key.modifiers) =>
            {
                cancel.cancel();
                return Ok(ControlFlow::Quit);
            }
            Some(_) => {}
        }
        Ok(ControlFlow::Continue)
    })
}
