//! Recording output pins for the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Shared log of every level written, as (pin id, level)
#[derive(Default, Clone)]
pub struct Bench {
    writes: Rc<RefCell<Vec<(u8, PinState)>>>,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, id: u8) -> MockPin {
        MockPin {
            id,
            writes: self.writes.clone(),
            broken: Rc::new(RefCell::new(false)),
        }
    }

    pub fn pins(&self, ids: [u8; 4]) -> [MockPin; 4] {
        ids.map(|id| self.pin(id))
    }

    /// last level written to the pin, `None` if it was never driven
    pub fn level(&self, id: u8) -> Option<PinState> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(pin, _)| *pin == id)
            .map(|(_, level)| *level)
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn writes(&self) -> Vec<(u8, PinState)> {
        self.writes.borrow().clone()
    }

    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }
}

pub struct MockPin {
    id: u8,
    writes: Rc<RefCell<Vec<(u8, PinState)>>>,
    broken: Rc<RefCell<bool>>,
}

impl MockPin {
    /// handle that makes the pin fail every write while set
    pub fn fault_switch(&self) -> Rc<RefCell<bool>> {
        self.broken.clone()
    }

    fn write(&mut self, level: PinState) -> Result<(), PinFault> {
        if *self.broken.borrow() {
            return Err(PinFault);
        }
        self.writes.borrow_mut().push((self.id, level));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High)
    }
}
