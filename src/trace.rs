//! Lifecycle event log shared by every `Book` created in one demo.
//!
//! The log is the structured counterpart of the console chatter the demos
//! print: tests count events instead of scraping text.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplication {
    /// `Clone::clone`, a brand new instance.
    Copy,
    /// `Clone::clone_from`, overwriting an instance that already exists.
    Assign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Constructed {
        title: String,
        pages: u32,
    },
    Duplicated {
        kind: Duplication,
        title: String,
        pages: u32,
    },
    Dropped {
        title: String,
        pages: u32,
    },
    Inserted {
        into: &'static str,
        index: usize,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Constructed { title, pages } => {
                write!(f, "Constructor called for Title: {title}, Pages: {pages}")
            }
            Event::Duplicated {
                kind: Duplication::Copy,
                title,
                pages,
            } => write!(f, "Copy constructor called for Title: {title}, Pages: {pages}"),
            Event::Duplicated {
                kind: Duplication::Assign,
                title,
                pages,
            } => write!(f, "Assignment called for Title: {title}, Pages: {pages}"),
            Event::Dropped { title, pages } => {
                write!(f, "Destructor called for Title: {title}, Pages: {pages}")
            }
            Event::Inserted { into, index } => write!(f, "Placed into {into} at index {index}"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    pub constructions: usize,
    /// Copies and assignments together.
    pub duplications: usize,
    /// The share of `duplications` that overwrote an existing instance.
    pub assignments: usize,
    pub drops: usize,
    pub insertions: usize,
}

impl TraceSummary {
    pub fn tally<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        events
            .into_iter()
            .fold(TraceSummary::default(), |mut summary, event| {
                match event {
                    Event::Constructed { .. } => summary.constructions += 1,
                    Event::Duplicated { kind, .. } => {
                        summary.duplications += 1;
                        if *kind == Duplication::Assign {
                            summary.assignments += 1;
                        }
                    }
                    Event::Dropped { .. } => summary.drops += 1,
                    Event::Inserted { .. } => summary.insertions += 1,
                }
                summary
            })
    }

    /// Instances created minus instances dropped. An assignment reuses an
    /// instance, so only copies count as new ones.
    pub fn live(&self) -> isize {
        let copies = self.duplications - self.assignments;
        (self.constructions + copies) as isize - self.drops as isize
    }
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} constructed, {} duplicated, {} dropped, {} inserted",
            self.constructions, self.duplications, self.drops, self.insertions
        )
    }
}

/// Position in the event log, used to look at just the events of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Default)]
struct Log {
    events: Vec<Event>,
    echoed: usize,
}

/// Cheap to clone; every clone appends to the same log.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    log: Rc<RefCell<Log>>,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        tracing::trace!(%event, "lifecycle");
        self.log.borrow_mut().events.push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().events.clone()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.log.borrow().events.len())
    }

    pub fn summary(&self) -> TraceSummary {
        TraceSummary::tally(&self.log.borrow().events)
    }

    pub fn since(&self, mark: Mark) -> TraceSummary {
        let log = self.log.borrow();
        TraceSummary::tally(log.events.get(mark.0..).unwrap_or_default())
    }

    /// Writes every event not yet written, one indented line each.
    pub fn flush_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut log = self.log.borrow_mut();
        for event in &log.events[log.echoed..] {
            writeln!(out, "  > {event}")?;
        }
        log.echoed = log.events.len();
        Ok(())
    }

    /// Marks pending events as written without writing them.
    pub fn skip_pending(&self) {
        let mut log = self.log.borrow_mut();
        log.echoed = log.events.len();
    }
}
