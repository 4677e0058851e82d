//! A scripted input driver for headless tests: replays a fixed event
//! sequence, then reports an idle queue forever.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    queue: VecDeque<Event>,
}

impl ScriptedInputDriver {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            queue: events.into(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.queue.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "script exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn replays_in_order_then_idles() {
        let mut driver = ScriptedInputDriver::new(vec![
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Event::Resize(80, 24),
        ]);
        assert!(driver.poll(Duration::ZERO).unwrap());
        assert!(matches!(driver.read().unwrap(), Event::Key(_)));
        assert!(matches!(driver.read().unwrap(), Event::Resize(80, 24)));
        assert!(!driver.poll(Duration::from_millis(5)).unwrap());
        assert!(driver.read().is_err());
    }
}
