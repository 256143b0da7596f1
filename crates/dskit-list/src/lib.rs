//! Singly-linked list for dskit.
//!
//! Owned `Option<Box<Node>>` links, head-first. `push`/`pop` work the tail
//! end and walk the chain; `shift`/`unshift` work the head end in O(1).
//! Removal from an empty list returns `None` — empty is a normal state, not
//! an error.

/// A list node owning the rest of the chain.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly-linked list with an O(1) length counter.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append at the tail. Walks the chain iteratively; list length is
    /// bounded only by memory, not stack depth.
    pub fn push(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Remove and return the tail value. The length counter says exactly how
    /// far the owning link of the tail sits, so the walk is a plain loop.
    pub fn pop(&mut self) -> Option<T> {
        let mut link = &mut self.head;
        for _ in 1..self.len {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        let node = link.take()?;
        self.len -= 1;
        Some(node.value)
    }

    /// Remove and return the head value.
    pub fn shift(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Prepend at the head.
    pub fn unshift(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Borrowing front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// A new list of `f` applied to each value in order.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> LinkedList<U> {
        self.iter().map(f).collect()
    }

    /// A new list of the values passing `pred`, in order.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> LinkedList<T>
    where
        T: Clone,
    {
        self.iter().filter(|&v| pred(v)).cloned().collect()
    }

    /// Fold front to back.
    pub fn fold<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        self.iter().fold(init, f)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively so dropping a long chain cannot recurse through
        // every Box.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.shift()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        for value in values.into_iter().rev() {
            list.unshift(value);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
