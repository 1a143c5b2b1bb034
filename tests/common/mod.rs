#![allow(dead_code)]
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

pub fn level_to_character(level: log::Level) -> &'static str {
    match level {
        log::Level::Error | log::Level::Warn => "WARN",
        _ => "LIST",
    }
}

pub fn test_init_logger() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Debug);
    builder.format(
        |buf, record|
            writeln!(
                buf,
                "{}: {}",
                level_to_character(record.level()),
                record.args(),
            )
    );
    let _ = builder.try_init();
}

/// Counts how many address arrays were handed out and how many came back.
#[derive(Clone, Default)]
pub struct ArrayLedger {
    created: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
    fail_next: Rc<Cell<bool>>,
}

pub struct TrackedArray {
    pub addresses: Vec<String>,
    released: Rc<Cell<usize>>,
}

impl Drop for TrackedArray {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

impl ArrayLedger {
    pub fn new() -> ArrayLedger {
        ArrayLedger::default()
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn live(&self) -> usize {
        self.created() - self.released()
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }
}

impl addrbook::ArrayFactory for ArrayLedger {
    type Array = TrackedArray;

    fn create_array(&mut self) -> Option<TrackedArray> {
        if self.fail_next.replace(false) {
            return None;
        }
        self.created.set(self.created.get() + 1);
        Some(TrackedArray {
            addresses: Vec::new(),
            released: Rc::clone(&self.released),
        })
    }
}
