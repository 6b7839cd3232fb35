/// A last-in-first-out container backed by a `Vec`.
///
/// Only the operations the checker needs are exposed, so the LIFO discipline
/// cannot be bypassed by indexing into the middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { vec: Vec::new() }
    }

    pub fn push(&mut self, element: T) {
        self.vec.push(element);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn default_is_empty() {
        let stack: Stack<char> = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }
}
