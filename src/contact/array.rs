/// Source of the per-contact address arrays.
///
/// The list never looks inside an array: it asks the factory for a fresh one
/// when a node is built and drops it when the node goes away.
pub trait ArrayFactory {
    type Array;

    fn create_array(&mut self) -> Option<Self::Array>;
}

impl<A, F> ArrayFactory for F
    where F: FnMut() -> Option<A> {
    type Array = A;

    fn create_array(&mut self) -> Option<A> {
        self()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make<F: ArrayFactory>(f: &mut F) -> Option<F::Array> {
        f.create_array()
    }

    #[test]
    fn closure_factory() {
        let mut made = 0;
        let mut f = || {
            made += 1;
            Some(Vec::<String>::new())
        };
        assert!(make(&mut f).is_some());
        assert!(make(&mut f).is_some());
        assert_eq!(made, 2);

        let mut failing = || None::<Vec<String>>;
        assert!(make(&mut failing).is_none());
    }
}
