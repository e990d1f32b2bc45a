use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::StackError;

/// LIFO container backed by a `Vec`. The top is the last element.
///
/// Mutation goes through `&mut self`, so a stack has exactly one user at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T = i32> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { data: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        debug!(len = self.data.len(), "push");
    }

    /// Removes the top element. An empty stack is left untouched and
    /// reported with an `Empty` warning rather than an error.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.data.pop();
        match item {
            Some(_) => debug!(len = self.data.len(), "pop"),
            None => warn!("Empty"),
        }
        item
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.data.last().ok_or(StackError::EmptyContainer)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: fmt::Display> Stack<T> {
    // bottom to top, every element followed by a single space
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)?;
        handle.flush()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.data {
            write!(f, "{} ", item)?;
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(data: Vec<T>) -> Stack<T> {
        Stack { data }
    }
}
