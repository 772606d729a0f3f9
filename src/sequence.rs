// =============================================================================
// Sequences that can build values in place
// =============================================================================
//
// `emplace` and `emplace_back` take the finished value by move, so the only
// construction is the one the caller performs and nothing is ever cloned on
// the way in. Works the same for a linked list and a contiguous vector.

use crate::error::{DemoError, Result};
use std::collections::LinkedList;

/// Where in a sequence an insertion applies.
///
/// Remembers how long the sequence was when the position was taken; once the
/// sequence grows or shrinks the position is stale and `emplace` rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    index: usize,
    len_at: usize,
}

impl Position {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves `steps` elements forward. Moving to one past the last element
    /// is allowed, as that is where `emplace` appends.
    pub fn advance(self, steps: usize) -> Result<Position> {
        let index = self
            .index
            .checked_add(steps)
            .filter(|&index| index <= self.len_at)
            .ok_or_else(|| DemoError::out_of_range(self.index.saturating_add(steps), self.len_at))?;
        Ok(Position { index, ..self })
    }
}

pub trait Sequence<T> {
    /// Short name used in trace output.
    const KIND: &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves `value` to `index`, shifting later elements back by one.
    /// `index` has already been checked against `len`.
    fn place(&mut self, index: usize, value: T);

    fn begin(&self) -> Position {
        Position {
            index: 0,
            len_at: self.len(),
        }
    }

    fn end(&self) -> Position {
        Position {
            index: self.len(),
            len_at: self.len(),
        }
    }

    /// Returns the index the value landed at.
    fn emplace_back(&mut self, value: T) -> usize {
        let index = self.len();
        self.place(index, value);
        index
    }

    fn emplace(&mut self, at: Position, value: T) -> Result<usize> {
        let len = self.len();
        if at.len_at != len {
            return Err(DemoError::stale(at.len_at, len));
        }
        if at.index > len {
            return Err(DemoError::out_of_range(at.index, len));
        }
        self.place(at.index, value);
        Ok(at.index)
    }
}

impl<T> Sequence<T> for Vec<T> {
    const KIND: &'static str = "vector";

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn place(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    const KIND: &'static str = "list";

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn place(&mut self, index: usize, value: T) {
        let mut tail = self.split_off(index);
        self.push_back(value);
        self.append(&mut tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use crate::trace::Tracer;

    fn titles<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<&'a str> {
        books.into_iter().map(Book::title).collect()
    }

    #[test]
    fn advance_walks_forward() {
        let list: LinkedList<u8> = [1, 2, 3].into_iter().collect();
        let at = list.begin().advance(2).unwrap();
        assert_eq!(at.index(), 2);
        assert_eq!(list.begin().advance(3).unwrap(), list.end());
    }

    #[test]
    fn advance_past_end_fails() {
        let v = vec![1, 2, 3];
        let err = v.begin().advance(4).unwrap_err();
        assert!(matches!(
            err,
            DemoError::PositionOutOfRange { index: 4, len: 3 }
        ));
    }

    #[test]
    fn emplace_in_list_constructs_once() {
        let tracer = Tracer::new();
        let mut list = LinkedList::new();
        list.emplace_back(Book::new(&tracer, "AAAA", 250));
        list.emplace_back(Book::new(&tracer, "BBBB", 550));
        list.emplace_back(Book::new(&tracer, "DDDD", 850));

        let mark = tracer.mark();
        let at = list.begin().advance(2).unwrap();
        let index = list.emplace(at, Book::new(&tracer, "CCCC", 750)).unwrap();

        let step = tracer.since(mark);
        assert_eq!(index, 2);
        assert_eq!(step.constructions, 1);
        assert_eq!(step.duplications, 0);
        assert_eq!(step.drops, 0);
        assert_eq!(list.len(), 4);
        assert_eq!(titles(&list), ["AAAA", "BBBB", "CCCC", "DDDD"]);
        let pages: Vec<u32> = list.iter().map(Book::pages).collect();
        assert_eq!(pages, [250, 550, 750, 850]);
    }

    #[test]
    fn emplace_in_vector_constructs_once() {
        let tracer = Tracer::new();
        let mut shelf = vec![Book::new(&tracer, "AAAA", 1), Book::new(&tracer, "CCCC", 3)];

        let mark = tracer.mark();
        let at = shelf.begin().advance(1).unwrap();
        shelf.emplace(at, Book::new(&tracer, "BBBB", 2)).unwrap();
        shelf.emplace_back(Book::new(&tracer, "DDDD", 4));

        let step = tracer.since(mark);
        assert_eq!(step.constructions, 2);
        assert_eq!(step.duplications, 0);
        assert_eq!(titles(&shelf), ["AAAA", "BBBB", "CCCC", "DDDD"]);
    }

    #[test]
    fn emplace_at_front_and_end() {
        let mut list: LinkedList<&str> = ["b"].into_iter().collect();
        list.emplace(list.begin(), "a").unwrap();
        list.emplace(list.end(), "c").unwrap();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn position_goes_stale_after_growth() {
        let mut words = vec!["a", "d"];
        let at = words.begin().advance(1).unwrap();
        words.emplace_back("z");

        let err = words.emplace(at, "b").unwrap_err();
        assert!(matches!(
            err,
            DemoError::StalePosition {
                expected_len: 2,
                actual_len: 3
            }
        ));
        assert_eq!(words, ["a", "d", "z"]);
    }

    #[test]
    fn kinds_name_the_container() {
        assert_eq!(<Vec<u8> as Sequence<u8>>::KIND, "vector");
        assert_eq!(<LinkedList<u8> as Sequence<u8>>::KIND, "list");
    }
}
