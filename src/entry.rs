/// A key-value pair stored in a tree node.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Entry { key, value }
    }

    pub fn into_pair(self) -> (T, U) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn test_into_pair() {
        let entry = Entry::new(2, "a");
        assert_eq!(entry.clone(), Entry { key: 2, value: "a" });
        assert_eq!(entry.into_pair(), (2, "a"));
    }
}
