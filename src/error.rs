use std::error::Error;
use std::fmt;

use crate::contact::ContactNode;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ListError {
    /// The array factory could not provide an array for a new node.
    AllocationFailure,
    DuplicateId(i32),
    NotFound,
    /// The operation needs a current node but the list is empty.
    InvalidReference,
    NameTooLong { len: usize, max: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::AllocationFailure => write!(f, "could not allocate address array"),
            ListError::DuplicateId(id) => write!(f, "a contact with id {} already exists", id),
            ListError::NotFound => write!(f, "no such contact"),
            ListError::InvalidReference => write!(f, "the list has no current contact"),
            ListError::NameTooLong { len, max } => {
                write!(f, "name is {} characters long, at most {} allowed", len, max)
            }
        }
    }
}

impl Error for ListError {}

/// A node refused by `ContactList::insert`. Ownership goes back to the caller.
pub struct Rejected<A> {
    node: ContactNode<A>,
}

impl<A> Rejected<A> {
    pub(crate) fn new(node: ContactNode<A>) -> Rejected<A> {
        Rejected { node }
    }

    pub fn id(&self) -> i32 {
        self.node.id()
    }

    pub fn node(&self) -> &ContactNode<A> {
        &self.node
    }

    pub fn into_node(self) -> ContactNode<A> {
        self.node
    }

    pub fn error(&self) -> ListError {
        ListError::DuplicateId(self.node.id())
    }
}

impl<A> fmt::Debug for Rejected<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("id", &self.node.id())
            .field("name", &self.node.name())
            .finish()
    }
}

impl<A> fmt::Display for Rejected<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error())
    }
}

impl<A> Error for Rejected<A> {}

impl<A> From<Rejected<A>> for ListError {
    fn from(r: Rejected<A>) -> ListError {
        r.error()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ListError::DuplicateId(7).to_string(), "a contact with id 7 already exists");
        assert_eq!(
            ListError::NameTooLong { len: 60, max: 50 }.to_string(),
            "name is 60 characters long, at most 50 allowed"
        );
    }

    #[test]
    fn rejected_keeps_node() {
        let node = ContactNode::new(3, "Ann", &mut || Some(vec![1u8, 2])).unwrap();
        let r = Rejected::new(node);
        assert_eq!(r.id(), 3);
        assert_eq!(r.error(), ListError::DuplicateId(3));
        let node = r.into_node();
        assert_eq!(node.name(), "Ann");
        assert_eq!(node.array(), &vec![1u8, 2]);
    }
}
