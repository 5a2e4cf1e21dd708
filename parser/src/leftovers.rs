use flexible_version_value::Component;
use std::ops::{Deref, Index};

/// The number of leftover slots: one per component plus one for excess segments.
pub const SLOTS: usize = 5;

/// The slot holding dot-separated segments beyond the revision.
pub const EXCESS_SLOT: usize = 4;

/// Input that could not be interpreted as part of a version.
///
/// There is one slot for each [`Component`] and a fifth slot for excess segments.
/// Every slot defaults to the empty string.
/// A component slot is filled only when that component could not be fully consumed;
/// once parsing stopped at a component, every following slot holds its original segment verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Leftovers {
    slots: [String; SLOTS],
}

impl Leftovers {
    /// Constructs leftovers with all slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the leftover of the given component.
    pub fn get(&self, component: Component) -> &str {
        &self.slots[component.index()]
    }

    /// Returns the segments beyond the revision, joined with `.`.
    pub fn excess(&self) -> &str {
        &self.slots[EXCESS_SLOT]
    }

    /// Returns `true` if nothing was left over.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(String::is_empty)
    }

    /// Consumes the leftovers, returning the slots in order.
    pub fn into_array(self) -> [String; SLOTS] {
        self.slots
    }

    pub(crate) fn set(&mut self, component: Component, leftover: String) {
        self.slots[component.index()] = leftover;
    }

    pub(crate) fn set_excess(&mut self, excess: String) {
        self.slots[EXCESS_SLOT] = excess;
    }
}

impl Deref for Leftovers {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.slots[..]
    }
}

impl AsRef<[String]> for Leftovers {
    fn as_ref(&self) -> &[String] {
        &self.slots[..]
    }
}

impl Index<usize> for Leftovers {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl Index<Component> for Leftovers {
    type Output = String;

    fn index(&self, component: Component) -> &Self::Output {
        &self.slots[component.index()]
    }
}

impl From<Leftovers> for [String; SLOTS] {
    fn from(leftovers: Leftovers) -> Self {
        leftovers.slots
    }
}

impl PartialEq<[&str; SLOTS]> for Leftovers {
    fn eq(&self, other: &[&str; SLOTS]) -> bool {
        self.slots.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let leftovers = Leftovers::new();
        assert!(leftovers.is_empty());
        assert_eq!(leftovers.len(), SLOTS);
        assert_eq!(leftovers, ["", "", "", "", ""]);
    }

    #[test]
    fn test_slots() {
        let mut leftovers = Leftovers::new();
        leftovers.set(Component::Build, "53".into());
        leftovers.set(Component::Revision, "4".into());
        leftovers.set_excess("5.6".into());

        assert!(!leftovers.is_empty());
        assert_eq!(leftovers.get(Component::Build), "53");
        assert_eq!(leftovers[Component::Revision], "4");
        assert_eq!(leftovers[3], "4");
        assert_eq!(leftovers.excess(), "5.6");
        assert_eq!(leftovers, ["", "", "53", "4", "5.6"]);
        assert_eq!(
            leftovers.into_array(),
            [
                String::new(),
                String::new(),
                String::from("53"),
                String::from("4"),
                String::from("5.6")
            ]
        );
    }
}
