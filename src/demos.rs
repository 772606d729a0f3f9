// =============================================================================
// Demonstrations
// =============================================================================
//
// Each routine owns its own `Tracer`, writes a transcript to `out` and hands
// back a `Report` with the event counts and the final container contents.
// Books are created inside an inner block so their drops show up in the
// transcript before the routine returns.

use crate::arena::{Handle, Shelf};
use crate::book::Book;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::trace::{Event, TraceSummary, Tracer};
use std::collections::LinkedList;
use std::fmt::Display;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: &'static str,
    pub summary: TraceSummary,
    /// Final container contents, rendered with `Display`.
    pub contents: Vec<String>,
}

pub type Demo = fn(&mut dyn Write, &DemoConfig) -> Result<Report>;

/// Every demonstration, in the order the driver runs them.
pub const ALL: [(&str, Demo); 6] = [
    ("copy_and_assignment", copy_and_assignment),
    ("copies_into_containers", copies_into_containers),
    ("references_into_containers", references_into_containers),
    ("emplace_back", emplace_back),
    ("emplace", emplace),
    ("emplace_exercise", emplace_exercise),
];

pub fn run_all(out: &mut dyn Write, config: &DemoConfig) -> Result<Vec<Report>> {
    let mut reports = Vec::with_capacity(ALL.len());
    for (name, demo) in ALL {
        writeln!(out)?;
        writeln!(out, "{}", config.banner(name))?;
        tracing::info!(demo = name, "starting");
        let report = demo(out, config)?;
        tracing::info!(demo = name, summary = %report.summary, "finished");
        reports.push(report);
    }
    Ok(reports)
}

// =============================================================================
// Transcript plumbing
// =============================================================================

struct Stage<'a> {
    out: &'a mut dyn Write,
    tracer: Tracer,
    echo: bool,
}

impl<'a> Stage<'a> {
    fn new(out: &'a mut dyn Write, config: &DemoConfig) -> Self {
        Stage {
            out,
            tracer: Tracer::new(),
            echo: config.echo_lifecycle,
        }
    }

    fn book(&self, title: &str, pages: u32) -> Book {
        Book::new(&self.tracer, title, pages)
    }

    fn flush(&mut self) -> Result<()> {
        if self.echo {
            self.tracer.flush_to(self.out)?;
        } else {
            self.tracer.skip_pending();
        }
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.flush()?;
        writeln!(self.out)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn show(&mut self, item: &dyn Display) -> Result<()> {
        self.say(&item.to_string())
    }

    fn placed(&self, into: &'static str, index: usize) {
        self.tracer.record(Event::Inserted { into, index });
    }

    fn finish(mut self, name: &'static str, contents: Vec<String>) -> Result<Report> {
        self.flush()?;
        Ok(Report {
            name,
            summary: self.tracer.summary(),
            contents,
        })
    }
}

fn render<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    items.into_iter().map(ToString::to_string).collect()
}

// =============================================================================
// Part 1: construction, copy and assignment
// =============================================================================

/// One construction, then a duplicate by assignment and one by copy.
pub fn copy_and_assignment(out: &mut dyn Write, config: &DemoConfig) -> Result<Report> {
    let mut stage = Stage::new(out, config);
    let contents = {
        let a = stage.book("AAAA", 100);
        stage.show(&a)?;

        let mut b = Book::blank(&stage.tracer);
        b.clone_from(&a);
        stage.show(&b)?;

        let c = a.clone();
        stage.show(&c)?;

        render([&a, &b, &c])
    };
    stage.finish("copy_and_assignment", contents)
}

// =============================================================================
// Part 2: by-value insertion copies, by-reference insertion does not
// =============================================================================

/// Each push of a clone costs a construction elsewhere plus a copy.
pub fn copies_into_containers(out: &mut dyn Write, config: &DemoConfig) -> Result<Report> {
    let mut stage = Stage::new(out, config);
    let contents = {
        stage.say("Constructing objects...")?;
        let a = stage.book("AAAA", 100);
        let b = stage.book("BBBB", 68);
        let c = stage.book("CCCC", 240);

        stage.say("Adding objects by value into the list...")?;
        let mut list: LinkedList<Book> = LinkedList::new();
        for book in [&a, &b, &c] {
            let index = list.emplace_back(book.clone());
            stage.placed(<LinkedList<Book> as Sequence<Book>>::KIND, index);
        }
        stage.say("Originals are untouched:")?;
        for book in [&a, &b, &c] {
            stage.show(book)?;
        }

        render(&list)
    };
    stage.finish("copies_into_containers", contents)
}

/// Pushing references stores no copies. The list cannot outlive the books it
/// borrows from; the shelf variant swaps borrows for index handles.
pub fn references_into_containers(out: &mut dyn Write, config: &DemoConfig) -> Result<Report> {
    let mut stage = Stage::new(out, config);
    let contents = {
        stage.say("Constructing objects...")?;
        let a = stage.book("AAAA", 100);
        let b = stage.book("BBBB", 68);
        let c = stage.book("CCCC", 240);

        stage.say("Adding objects by reference into the list...")?;
        {
            let mut list: LinkedList<&Book> = LinkedList::new();
            for book in [&a, &b, &c] {
                let index = list.emplace_back(book);
                stage.placed(<LinkedList<&Book> as Sequence<&Book>>::KIND, index);
            }
            for book in &list {
                stage.show(*book)?;
            }
        }

        stage.say("Moving the same objects onto a shelf and keeping handles...")?;
        let mut shelf = Shelf::new();
        let mut handles: Vec<Handle> = Vec::new();
        for book in [a, b, c] {
            let handle = shelf.add(book);
            stage.placed("shelf", handle.index());
            handles.push(handle);
        }

        shelf.get_mut(handles[2])?.set_pages(250);
        stage.say("Handles resolve to current values:")?;
        let mut contents = Vec::with_capacity(handles.len());
        for &handle in &handles {
            let book = shelf.get(handle)?;
            stage.show(book)?;
            contents.push(book.to_string());
        }
        contents
    };
    stage.finish("references_into_containers", contents)
}

// =============================================================================
// Part 3: building in place
// =============================================================================

/// Emplacing costs one construction per book; a by-value loop then copies
/// each book again, a by-reference loop does not.
pub fn emplace_back(out: &mut dyn Write, config: &DemoConfig) -> Result<Report> {
    let mut stage = Stage::new(out, config);
    let contents = {
        let mut list: LinkedList<Book> = LinkedList::new();
        for (title, pages) in [("GGGG", 250), ("HHHH", 550), ("IIII", 850)] {
            let index = list.emplace_back(stage.book(title, pages));
            stage.placed(<LinkedList<Book> as Sequence<Book>>::KIND, index);
        }
        stage.say("Finished adding the books...")?;

        stage.say("Looping by value copies every book...")?;
        for book in list.iter().cloned() {
            stage.show(&book)?;
        }

        stage.say("Looping by reference copies nothing...")?;
        for book in &list {
            stage.show(book)?;
        }

        render(&list)
    };
    stage.finish("emplace_back", contents)
}

/// Emplaces a book between two others using a position advanced from the
/// front of the list.
pub fn emplace(out: &mut dyn Write, config: &DemoConfig) -> Result<Report> {
    let mut stage = Stage::new(out, config);
    let contents = {
        let kind = <LinkedList<Book> as Sequence<Book>>::KIND;
        let mut list: LinkedList<Book> = LinkedList::new();
        for (title, pages) in [("AAAA", 250), ("BBBB", 550), ("DDDD", 850)] {
            let index = list.emplace_back(stage.book(title, pages));
            stage.placed(kind, index);
        }

        let at = list.begin().advance(2)?;
        let index = list.emplace(at, stage.book("CCCC", 750))?;
        stage.placed(kind, index);

        for book in list.iter().cloned() {
            stage.show(&book)?;
        }

        render(&list)
    };
    stage.finish("emplace", contents)
}

/// Keeps a vector of words sorted by emplacing at hand-picked positions.
pub fn emplace_exercise(out: &mut dyn Write, config: &DemoConfig) -> Result<Report> {
    let mut stage = Stage::new(out, config);
    let kind = <Vec<String> as Sequence<String>>::KIND;

    let mut words: Vec<String> = ["a", "d", "g", "s"].into_iter().map(String::from).collect();
    show_words(&mut stage, &words)?;

    let at = words.begin().advance(2)?;
    let index = words.emplace(at, "f".to_string())?;
    stage.placed(kind, index);
    show_words(&mut stage, &words)?;

    let at = words.begin().advance(1)?;
    let index = words.emplace(at, "b".to_string())?;
    stage.placed(kind, index);
    show_words(&mut stage, &words)?;

    let index = words.emplace_back("z".to_string());
    stage.placed(kind, index);
    show_words(&mut stage, &words)?;

    stage.finish("emplace_exercise", words)
}

fn show_words(stage: &mut Stage<'_>, words: &[String]) -> Result<()> {
    for word in words {
        stage.show(word)?;
    }
    writeln!(stage.out)?;
    Ok(())
}
