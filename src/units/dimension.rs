/// A physical dimension: unit names with signed integer exponents.
///
/// Insertion order is preserved so that sorting by exponent stays
/// deterministic when exponents tie. Inserting a unit that is already
/// present merges the exponents in place; entries that cancel to zero are
/// kept and skipped at translation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensionality {
    factors: Vec<(String, i32)>,
}

impl Dimensionality {
    pub fn new() -> Self {
        Self {
            factors: Vec::new(),
        }
    }

    pub fn insert(&mut self, unit: impl Into<String>, power: i32) {
        let unit = unit.into();
        if let Some(entry) = self.factors.iter_mut().find(|(name, _)| *name == unit) {
            entry.1 += power;
        } else {
            self.factors.push((unit, power));
        }
    }

    /// Builder form of `insert`.
    pub fn with(mut self, unit: impl Into<String>, power: i32) -> Self {
        self.insert(unit, power);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.factors.iter().map(|(unit, power)| (unit.as_str(), *power))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl FromIterator<(String, i32)> for Dimensionality {
    fn from_iter<T: IntoIterator<Item = (String, i32)>>(iter: T) -> Self {
        let mut dim = Dimensionality::new();
        for (unit, power) in iter {
            dim.insert(unit, power);
        }
        dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let dim = Dimensionality::new()
            .with("second", -1)
            .with("meter", 1)
            .with("kelvin", 1);
        let units: Vec<&str> = dim.iter().map(|(unit, _)| unit).collect();
        assert_eq!(units, vec!["second", "meter", "kelvin"]);
    }

    #[test]
    fn test_insert_merges_exponents() {
        let mut dim = Dimensionality::new();
        dim.insert("meter", 1);
        dim.insert("meter", 1);
        assert_eq!(dim.len(), 1);
        assert_eq!(dim.iter().next(), Some(("meter", 2)));
    }

    #[test]
    fn test_cancelled_exponent_stays_zero() {
        let mut dim = Dimensionality::new();
        dim.insert("second", 1);
        dim.insert("second", -1);
        assert_eq!(dim.iter().next(), Some(("second", 0)));
    }

    #[test]
    fn test_from_iterator() {
        let dim: Dimensionality = vec![("meter".to_string(), 1), ("second".to_string(), -2)]
            .into_iter()
            .collect();
        assert_eq!(dim.len(), 2);
    }
}
