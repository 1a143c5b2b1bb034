use std::fmt;

use crate::config::{Config, NameOverflow};
use crate::contact::array::ArrayFactory;
use crate::error::ListError;

pub(crate) type Link<A> = Option<*mut ContactNode<A>>;

/// One contact: an id, a bounded name and the contact's address array.
///
/// A node is built on its own and then handed to `ContactList::insert`, which
/// takes ownership of it. Dropping a node drops its array.
pub struct ContactNode<A> {
    id: i32,
    name: String,
    array: A,
    pub(crate) prev: Link<A>,
    pub(crate) next: Link<A>,
}

impl<A> ContactNode<A> {
    /// Builds a node under the default `Config`.
    pub fn new<F>(id: i32, name: &str, factory: &mut F) -> Result<ContactNode<A>, ListError>
        where F: ArrayFactory<Array=A> {
        ContactNode::with_config(id, name, &Config::default(), factory)
    }

    pub fn with_config<F>(
        id: i32,
        name: &str,
        config: &Config,
        factory: &mut F,
    ) -> Result<ContactNode<A>, ListError>
        where F: ArrayFactory<Array=A> {
        let name = bounded_name(name, config)?;
        let array = match factory.create_array() {
            Some(a) => a,
            None => {
                warn!("could not create address array for contact {}", id);
                return Err(ListError::AllocationFailure);
            }
        };

        Ok(ContactNode {
            id,
            name,
            array,
            prev: None,
            next: None,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn array(&self) -> &A {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut A {
        &mut self.array
    }

    pub fn into_parts(self) -> (i32, String, A) {
        (self.id, self.name, self.array)
    }
}

fn bounded_name(name: &str, config: &Config) -> Result<String, ListError> {
    let len = name.chars().count();
    if len <= config.max_name_len {
        return Ok(name.to_string());
    }
    match config.name_overflow {
        NameOverflow::Reject => Err(ListError::NameTooLong {
            len,
            max: config.max_name_len,
        }),
        NameOverflow::Truncate => {
            debug!("truncating name of {} characters to {}", len, config.max_name_len);
            Ok(name.chars().take(config.max_name_len).collect())
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for ContactNode<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactNode")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("array", &self.array)
            .finish()
    }
}
