// vars.rs

/// Shell-local variables, listed in the order they were first assigned.
/// Token expansion consults the process environment before this store,
/// so a name bound in both places resolves to the environment's value.
pub struct VarStore {
    entries: Vec<(String, String)>,
}

impl VarStore {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Reassignment updates in place, keeping the original position.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn unset(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_assignment() {
        let mut vars = VarStore::new();
        vars.set("x", "1");
        vars.set("x", "2");
        assert_eq!(vars.get("x"), Some("2"));
    }

    #[test]
    fn reassignment_keeps_first_position() {
        let mut vars = VarStore::new();
        vars.set("a", "1");
        vars.set("b", "2");
        vars.set("a", "3");
        let order: Vec<(&str, &str)> = vars.iter().collect();
        assert_eq!(order, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn unset_removes_only_the_target() {
        let mut vars = VarStore::new();
        vars.set("a", "1");
        vars.set("b", "2");
        vars.set("c", "3");
        vars.unset("b");
        let order: Vec<(&str, &str)> = vars.iter().collect();
        assert_eq!(order, vec![("a", "1"), ("c", "3")]);
        assert_eq!(vars.get("b"), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut vars = VarStore::new();
        vars.set("path", "lower");
        assert_eq!(vars.get("PATH"), None);
    }
}
