use std::collections::HashSet;

/// NCBI taxonomy identifier, used both for groups and for organisms
pub type TaxonId = i64;

/// One row of the levels table
#[derive(Debug, Clone)]
pub struct Level {
    pub id: TaxonId,
    pub name: String,
    /// Member taxa in the order the table lists them
    pub members: Vec<TaxonId>,
    /// Declared size, taken from the table as-is
    pub size: i64,
    member_set: HashSet<TaxonId>,
}

impl Level {
    pub fn new(id: TaxonId, name: String, members: Vec<TaxonId>, size: i64) -> Self {
        let member_set = members.iter().copied().collect();
        Level {
            id,
            name,
            members,
            size,
            member_set,
        }
    }

    pub fn contains(&self, taxon: TaxonId) -> bool {
        self.member_set.contains(&taxon)
    }

    /// True if every taxon in `taxa` is a member of this level
    pub fn encloses(&self, taxa: &HashSet<TaxonId>) -> bool {
        taxa.is_subset(&self.member_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encloses_checks_every_taxon() {
        let level = Level::new(5338, "Agaricales".to_string(), vec![240176, 486041, 578458], 3);

        let inside: HashSet<TaxonId> = [240176, 578458].into_iter().collect();
        let outside: HashSet<TaxonId> = [240176, 9606].into_iter().collect();

        assert!(level.encloses(&inside));
        assert!(!level.encloses(&outside));
        assert!(level.encloses(&HashSet::new()));
        assert!(level.contains(486041));
    }

    #[test]
    fn duplicate_members_are_kept_in_order() {
        let level = Level::new(1, "dup".to_string(), vec![3, 3, 2], 3);
        assert_eq!(level.members, vec![3, 3, 2]);
        assert!(level.contains(3));
    }
}
