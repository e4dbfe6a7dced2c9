use crate::registration::traits::RegistrationAlgorithm;

/// Insertion-ordered registry mapping algorithm names to boxed instances.
///
/// Iteration order is insertion order and is an observable contract: it
/// determines the trial sequence and the tie-break between equal scores.
/// Backed by a `Vec` of pairs; registries are small, so linear name lookup
/// is fine.
pub struct AlgorithmRegistry<I> {
    entries: Vec<(String, Box<dyn RegistrationAlgorithm<I>>)>,
}

impl<I> Default for AlgorithmRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> AlgorithmRegistry<I> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert for registry construction.
    pub fn with(
        mut self,
        name: impl Into<String>,
        algorithm: Box<dyn RegistrationAlgorithm<I>>,
    ) -> Self {
        self.insert(name, algorithm);
        self
    }

    /// Insert or replace an entry.
    ///
    /// Replacing an existing name keeps its original position in iteration
    /// order, so trial priority is stable under hot-swap.
    pub fn insert(&mut self, name: impl Into<String>, algorithm: Box<dyn RegistrationAlgorithm<I>>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = algorithm,
            None => self.entries.push((name, algorithm)),
        }
    }

    /// Remove an entry by name, returning it if present. Removing a missing
    /// name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn RegistrationAlgorithm<I>>> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn RegistrationAlgorithm<I>)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a.as_ref()))
    }
}
