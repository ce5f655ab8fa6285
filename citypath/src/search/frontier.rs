use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Candidates waiting to be expanded by a search strategy.
pub trait Frontier<T> {
  fn push(&mut self, item: T);
  fn pop(&mut self) -> Option<T>;
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// First-in-first-out frontier
pub struct Fifo<T>(VecDeque<T>);

impl<T> Fifo<T> {
  pub fn new() -> Self {
    Fifo(VecDeque::new())
  }
}

impl<T> Frontier<T> for Fifo<T> {
  fn push(&mut self, item: T) {
    self.0.push_back(item);
  }

  fn pop(&mut self) -> Option<T> {
    self.0.pop_front()
  }

  fn len(&self) -> usize {
    self.0.len()
  }
}

/// Last-in-first-out frontier
pub struct Lifo<T>(Vec<T>);

impl<T> Lifo<T> {
  pub fn new() -> Self {
    Lifo(Vec::new())
  }
}

impl<T> Frontier<T> for Lifo<T> {
  fn push(&mut self, item: T) {
    self.0.push(item);
  }

  fn pop(&mut self) -> Option<T> {
    self.0.pop()
  }

  fn len(&self) -> usize {
    self.0.len()
  }
}

struct State<T> {
  priority: f64,
  // Insertion counter, breaks ties between equal priorities
  seq: u64,
  item: T,
}

impl<T> Ord for State<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, so that BinaryHeap pops the lowest priority and the oldest entry among equal ones
    other
      .priority
      .total_cmp(&self.priority)
      .then_with(|| other.seq.cmp(&self.seq))
  }
}

impl<T> PartialOrd for State<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T> PartialEq for State<T> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<T> Eq for State<T> {}

/// Frontier which pops the item with the lowest priority first. Items with equal
/// priority are popped in the order they were pushed.
pub struct PriorityFrontier<T> {
  pq: BinaryHeap<State<T>>,
  next_seq: u64,
}

impl<T> PriorityFrontier<T> {
  pub fn new() -> Self {
    PriorityFrontier {
      pq: BinaryHeap::new(),
      next_seq: 0,
    }
  }

  pub fn min(&self) -> Option<f64> {
    self.pq.peek().map(|state| state.priority)
  }
}

impl<T> Frontier<(f64, T)> for PriorityFrontier<T> {
  fn push(&mut self, (priority, item): (f64, T)) {
    self.pq.push(State {
      priority,
      seq: self.next_seq,
      item,
    });
    self.next_seq += 1;
  }

  fn pop(&mut self) -> Option<(f64, T)> {
    self.pq.pop().map(|state| (state.priority, state.item))
  }

  fn len(&self) -> usize {
    self.pq.len()
  }
}
