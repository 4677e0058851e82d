use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;
use crate::engine::CancelToken;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The frame cycle that drives the garden.
///
/// Each iteration first hands the handler `None` (the frame tick, where
/// the garden grows and repaints), then polls the input driver for up
/// to one frame budget, dispatching any events that arrived. Cadence is
/// therefore set by the poll budget: a quiet terminal ticks once per
/// budget, a busy one ticks between event bursts. The cancel token is
/// checked every iteration so panel teardown stops the cycle
/// deterministically rather than leaking a perpetual callback.
pub struct EventLoop<D> {
    driver: D,
    frame_budget: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, frame_budget: Duration) -> Self {
        Self {
            driver,
            frame_budget,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the token is cancelled or the handler returns `Quit`.
    ///
    /// The handler is called with `None` on every frame tick and
    /// `Some(event)` for each input event. When events arrive faster than
    /// the frame budget the queue is drained before the next tick so a
    /// mouse drag cannot starve rendering into visible lag.
    pub fn run<F>(&mut self, cancel: &CancelToken, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if cancel.is_cancelled() {
                return Ok(());
            }
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                return Ok(());
            }

            if self.driver.poll(self.frame_budget)? {
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if cancel.is_cancelled() {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
    }
}
