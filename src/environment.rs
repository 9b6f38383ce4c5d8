use std::collections::HashMap;
use std::fmt;

/// Variables of one session, kept in the order they were first assigned.
#[derive(Default, Debug, Clone)]
pub struct Environment {
    slots: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&slot| self.slots[slot].1)
    }

    /// Re-assignment keeps the variable where it first appeared.
    pub fn set(&mut self, name: &str, value: f64) {
        match self.index.get(name) {
            Some(&slot) => self.slots[slot].1 = value,
            None => {
                self.index.insert(name.to_owned(), self.slots.len());
                self.slots.push((name.to_owned(), value));
            }
        }
    }

    pub fn snapshot(&self) -> Vec<(String, f64)> {
        self.slots.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.slots.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", name, value)?;
        }
        write!(f, "}}")
    }
}
