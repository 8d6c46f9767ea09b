use std::collections::HashMap;

/// One leaderboard entry. The count is kept as the text shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub championships: String,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, championships: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            championships: championships.into(),
        }
    }
}

/// Player name -> championship count, iterated in first-insertion order.
///
/// Inserting a name that is already present replaces its count but keeps
/// the slot it was first given.
#[derive(Debug, Default)]
pub struct ResultSet {
    records: Vec<PlayerRecord>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous count for a repeated name.
    pub fn insert(&mut self, record: PlayerRecord) -> Option<String> {
        match self.index.get(&record.name) {
            Some(&slot) => Some(std::mem::replace(
                &mut self.records[slot].championships,
                record.championships,
            )),
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }
}

impl FromIterator<PlayerRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

#[cfg(test)]
pub(crate) fn count_for<'a>(set: &'a ResultSet, name: &str) -> Option<&'a str> {
    set.iter()
        .find(|r| r.name == name)
        .map(|r| r.championships.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let set: ResultSet = [
            PlayerRecord::new("Sam Jones", "10"),
            PlayerRecord::new("Bill Russell", "11"),
            PlayerRecord::new("Robert Horry", "7"),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Sam Jones", "Bill Russell", "Robert Horry"]);
    }

    #[test]
    fn repeated_name_overwrites_in_place() {
        let mut set = ResultSet::new();
        assert_eq!(set.insert(PlayerRecord::new("Bill Russell", "10")), None);
        set.insert(PlayerRecord::new("Sam Jones", "10"));
        let previous = set.insert(PlayerRecord::new("Bill Russell", "11"));

        assert_eq!(previous.as_deref(), Some("10"));
        assert_eq!(set.len(), 2);
        assert_eq!(count_for(&set, "Bill Russell"), Some("11"));
        assert_eq!(
            set.iter().cloned().collect::<Vec<_>>(),
            vec![
                PlayerRecord::new("Bill Russell", "11"),
                PlayerRecord::new("Sam Jones", "10"),
            ]
        );
    }

    #[test]
    fn empty_set() {
        let set = ResultSet::new();
        assert!(set.is_empty());
        assert_eq!(count_for(&set, "anyone"), None);
        assert_eq!(set.iter().count(), 0);
    }
}
