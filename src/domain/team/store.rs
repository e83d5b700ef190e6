//! Team assembly store - the working set the operator builds toward a submission.

use crate::domain::foundation::ProspectId;

use super::{Prospect, StartupInfo, TeamError};

/// In-memory collection of prospects plus at most one startup record.
///
/// Insertion order is significant: it becomes the evaluation order in the
/// submitted request.
///
/// # Invariants
///
/// - No two prospects share an id
/// - At most one startup record is active; saving replaces, never appends
#[derive(Debug, Clone, Default)]
pub struct TeamAssembly {
    prospects: Vec<Prospect>,
    startup_info: Option<StartupInfo>,
}

impl TeamAssembly {
    /// Creates an empty team assembly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a prospect, preserving insertion order.
    ///
    /// Prospects sharing an email are accepted; only the id must be unique.
    ///
    /// # Errors
    ///
    /// - `DuplicateProspect` if a prospect with the same id is already stored
    pub fn add_prospect(&mut self, prospect: Prospect) -> Result<&Prospect, TeamError> {
        if self.prospects.iter().any(|p| p.id() == prospect.id()) {
            return Err(TeamError::DuplicateProspect(*prospect.id()));
        }
        self.prospects.push(prospect);
        Ok(self.prospects.last().unwrap())
    }

    /// Removes and returns the prospect with the given id.
    ///
    /// Returns `None` (silent no-op) when absent.
    pub fn remove_prospect(&mut self, id: &ProspectId) -> Option<Prospect> {
        let index = self.prospects.iter().position(|p| p.id() == id)?;
        Some(self.prospects.remove(index))
    }

    /// Replaces the single active startup record, returning the prior one.
    ///
    /// A pitch-deck record replaces a manual one wholesale, and vice versa.
    pub fn set_startup_info(&mut self, info: StartupInfo) -> Option<StartupInfo> {
        self.startup_info.replace(info)
    }

    /// Returns the current ordered sequence of prospects.
    pub fn prospects(&self) -> &[Prospect] {
        &self.prospects
    }

    /// Returns the active startup record, if one was ever saved.
    pub fn startup_info(&self) -> Option<&StartupInfo> {
        self.startup_info.as_ref()
    }

    /// Returns true if at least one prospect is present.
    ///
    /// Callers use this to gate the submission action.
    pub fn has_prospects(&self) -> bool {
        !self.prospects.is_empty()
    }

    /// Returns the number of prospects.
    pub fn len(&self) -> usize {
        self.prospects.len()
    }

    /// Returns true if no prospects are stored.
    pub fn is_empty(&self) -> bool {
        self.prospects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prospect(name: &str) -> Prospect {
        Prospect::new(name, format!("{}@x.com", name), format!("https://li/{}", name)).unwrap()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut team = TeamAssembly::new();
        team.add_prospect(prospect("ann")).unwrap();
        team.add_prospect(prospect("ben")).unwrap();
        team.add_prospect(prospect("cat")).unwrap();

        let names: Vec<_> = team.prospects().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["ann", "ben", "cat"]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut team = TeamAssembly::new();
        let p = prospect("ann");
        let id = *p.id();
        team.add_prospect(p.clone()).unwrap();

        let result = team.add_prospect(p);
        assert_eq!(result.unwrap_err(), TeamError::DuplicateProspect(id));
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn add_accepts_duplicate_email() {
        let mut team = TeamAssembly::new();
        team.add_prospect(Prospect::new("Ann", "same@x.com", "https://li/a").unwrap())
            .unwrap();
        team.add_prospect(Prospect::new("Ben", "same@x.com", "https://li/b").unwrap())
            .unwrap();
        assert_eq!(team.len(), 2);
    }

    #[test]
    fn remove_returns_matching_prospect() {
        let mut team = TeamAssembly::new();
        let p = prospect("ann");
        let id = *p.id();
        team.add_prospect(p).unwrap();

        let removed = team.remove_prospect(&id).unwrap();
        assert_eq!(removed.name(), "ann");
        assert!(team.is_empty());
    }

    #[test]
    fn remove_absent_id_leaves_list_unchanged() {
        let mut team = TeamAssembly::new();
        team.add_prospect(prospect("ann")).unwrap();
        team.add_prospect(prospect("ben")).unwrap();

        assert!(team.remove_prospect(&ProspectId::new()).is_none());
        assert_eq!(team.len(), 2);
        let names: Vec<_> = team.prospects().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["ann", "ben"]);
    }

    #[test]
    fn set_startup_info_replaces_previous() {
        let mut team = TeamAssembly::new();
        let first = StartupInfo::manual("A", "p", "2023", "m", "b").unwrap();
        let second = StartupInfo::manual("B", "p", "2024", "m", "b").unwrap();

        assert!(team.set_startup_info(first.clone()).is_none());
        let prior = team.set_startup_info(second.clone()).unwrap();
        assert_eq!(prior, first);
        assert_eq!(team.startup_info(), Some(&second));
    }

    #[test]
    fn has_prospects_tracks_contents() {
        let mut team = TeamAssembly::new();
        assert!(!team.has_prospects());
        let id = *team.add_prospect(prospect("ann")).unwrap().id();
        assert!(team.has_prospects());
        team.remove_prospect(&id);
        assert!(!team.has_prospects());
    }

    proptest! {
        /// For any add/remove sequence, ids stay unique and order equals
        /// insertion order minus removals.
        #[test]
        fn add_remove_sequences_keep_ids_unique_and_ordered(ops in prop::collection::vec(any::<bool>(), 1..40)) {
            let mut team = TeamAssembly::new();
            let mut model: Vec<ProspectId> = Vec::new();
            let mut counter = 0u32;

            for add in ops {
                if add || model.is_empty() {
                    counter += 1;
                    let p = prospect(&format!("p{}", counter));
                    model.push(*p.id());
                    team.add_prospect(p).unwrap();
                } else {
                    let victim = model.remove(counter as usize % model.len());
                    team.remove_prospect(&victim);
                }
            }

            let stored: Vec<ProspectId> = team.prospects().iter().map(|p| *p.id()).collect();
            prop_assert_eq!(&stored, &model);

            let unique: std::collections::HashSet<_> = stored.iter().collect();
            prop_assert_eq!(unique.len(), stored.len());
        }
    }
}
