use crate::error::StackError;

/// Vec-backed LIFO stack. Unbounded by default; `bounded` stacks refuse
/// pushes past their capacity instead of dropping the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
    limit: Option<usize>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            limit: None,
        }
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            limit: Some(capacity),
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if let Some(capacity) = self.limit {
            if self.items.len() >= capacity {
                return Err(StackError::Overflow { capacity });
            }
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Empties the stack but keeps its allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Bottom-to-top order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
