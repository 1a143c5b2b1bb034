pub mod array;
pub mod list;
pub mod node;

pub use array::ArrayFactory;
pub use list::{ContactList, Iter};
pub use node::ContactNode;
