use ratatui::layout::Position;
use std::collections::VecDeque;

/// The cells making up the snake.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Position,

    /// The positions of the rest of the snake, nearest the head first
    tail: VecDeque<Position>,
}

impl Snake {
    /// Create a new one-cell snake at `head`
    pub(crate) fn new(head: Position) -> Snake {
        Snake {
            head,
            tail: VecDeque::new(),
        }
    }

    /// Create a snake occupying `head` followed by `tail`
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Position>>(head: Position, tail: I) -> Snake {
        Snake {
            head,
            tail: tail.into_iter().collect(),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the cells behind the head, nearest first
    pub(crate) fn tail(&self) -> &VecDeque<Position> {
        &self.tail
    }

    /// Return the positions of all of the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.tail.contains(&pos)
    }

    /// Move the head to `head`, leaving the old head as the first tail cell
    pub(crate) fn push_head(&mut self, head: Position) {
        self.tail.push_front(self.head);
        self.head = head;
    }

    /// Drop the last cell of the snake's tail.  The head is never dropped.
    pub(crate) fn drop_tail(&mut self) {
        let _ = self.tail.pop_back();
    }
}
