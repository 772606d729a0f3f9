use crate::trace::{Duplication, Event, Tracer};
use std::fmt;

/// A labelled record whose every construction, copy, assignment and drop
/// lands in a `Tracer`.
pub struct Book {
    title: String,
    pages: u32,
    tracer: Tracer,
}

impl Book {
    pub fn new(tracer: &Tracer, title: impl Into<String>, pages: u32) -> Self {
        let book = Book {
            title: title.into(),
            pages,
            tracer: tracer.clone(),
        };
        book.tracer.record(Event::Constructed {
            title: book.title.clone(),
            pages: book.pages,
        });
        book
    }

    /// An empty book, handy as the target of an assignment.
    pub fn blank(tracer: &Tracer) -> Self {
        Book::new(tracer, "", 0)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_pages(&mut self, pages: u32) {
        self.pages = pages;
    }
}

impl Clone for Book {
    fn clone(&self) -> Self {
        self.tracer.record(Event::Duplicated {
            kind: Duplication::Copy,
            title: self.title.clone(),
            pages: self.pages,
        });
        Book {
            title: self.title.clone(),
            pages: self.pages,
            tracer: self.tracer.clone(),
        }
    }

    // Logged on the target's tracer, which also saw it built and will see
    // it dropped.
    fn clone_from(&mut self, source: &Self) {
        self.tracer.record(Event::Duplicated {
            kind: Duplication::Assign,
            title: source.title.clone(),
            pages: source.pages,
        });
        self.title.clone_from(&source.title);
        self.pages = source.pages;
    }
}

impl Drop for Book {
    fn drop(&mut self) {
        self.tracer.record(Event::Dropped {
            title: std::mem::take(&mut self.title),
            pages: self.pages,
        });
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.pages == other.pages
    }
}

impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Book")
            .field("title", &self.title)
            .field("pages", &self.pages)
            .finish()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Pages: {}", self.title, self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_is_recorded_once() {
        let tracer = Tracer::new();
        let book = Book::new(&tracer, "AAAA", 100);

        assert_eq!(book.to_string(), "Title: AAAA, Pages: 100");
        assert_eq!(tracer.summary().constructions, 1);
        assert_eq!(tracer.summary().duplications, 0);
    }

    #[test]
    fn copy_is_independent() {
        let tracer = Tracer::new();
        let original = Book::new(&tracer, "AAAA", 100);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_pages(101);
        copy.set_title("ZZZZ");
        assert_eq!(original.title(), "AAAA");
        assert_eq!(original.pages(), 100);
        assert_eq!(tracer.summary().duplications, 1);
    }

    #[test]
    fn assignment_is_independent() {
        let tracer = Tracer::new();
        let original = Book::new(&tracer, "AAAA", 100);
        let mut target = Book::blank(&tracer);
        let mark = tracer.mark();

        target.clone_from(&original);
        assert_eq!(target, original);
        assert_eq!(tracer.since(mark).duplications, 1);
        assert_eq!(tracer.since(mark).constructions, 0);
        assert!(tracer.events().iter().any(|event| matches!(
            event,
            Event::Duplicated {
                kind: Duplication::Assign,
                ..
            }
        )));

        target.set_pages(1);
        assert_eq!(original.pages(), 100);
    }

    #[test]
    fn drop_records_the_final_state() {
        let tracer = Tracer::new();
        {
            let mut book = Book::new(&tracer, "AAAA", 100);
            book.set_pages(5);
        }
        assert_eq!(
            tracer.events().last(),
            Some(&Event::Dropped {
                title: "AAAA".into(),
                pages: 5
            })
        );
        assert_eq!(tracer.summary().live(), 0);
    }

    #[test]
    fn assignment_leaves_the_count_balanced() {
        let tracer = Tracer::new();
        {
            let a = Book::new(&tracer, "AAAA", 100);
            let mut b = Book::blank(&tracer);
            b.clone_from(&a);
        }
        let summary = tracer.summary();
        assert_eq!(summary.constructions, 2);
        assert_eq!(summary.assignments, 1);
        assert_eq!(summary.drops, 2);
        assert_eq!(summary.live(), 0);
    }

    #[test]
    fn assignment_across_tracers_stays_with_the_target() {
        let source_log = Tracer::new();
        let target_log = Tracer::new();
        {
            let source = Book::new(&source_log, "AAAA", 100);
            let mut target = Book::blank(&target_log);
            target.clone_from(&source);
            assert_eq!(target, source);
        }

        let source_summary = source_log.summary();
        assert_eq!(source_summary.duplications, 0);
        assert_eq!(source_summary.live(), 0);

        let target_summary = target_log.summary();
        assert_eq!(target_summary.assignments, 1);
        assert_eq!(target_summary.live(), 0);
    }
}
