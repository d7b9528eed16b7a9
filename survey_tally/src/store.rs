use log::info;
use std::sync::{Arc, RwLock};

use crate::Snapshot;

/// Holds the current snapshot of the survey.
///
/// A new snapshot replaces the previous one in a single swap. Readers that
/// obtained the previous snapshot keep a valid reference to it.
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> SnapshotStore {
        SnapshotStore {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn current(&self) -> Arc<Snapshot> {
        // A poisoned lock still holds a complete snapshot.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Installs a new snapshot and returns the previous one.
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        info!("SnapshotStore: replacing snapshot: {:?}", next.stats());
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TableBuilder;
    use crate::SurveyRules;

    fn snapshot(campus: &[&str]) -> Snapshot {
        let mut b = TableBuilder::new(&["Nivel Educativo".to_string(), "Campus".to_string()]).unwrap();
        for c in campus {
            b.add_row(&[Some("Primaria".to_string()), Some(c.to_string())])
                .unwrap();
        }
        Snapshot::build(b.build(), &SurveyRules::default())
    }

    #[test]
    fn readers_keep_the_old_snapshot() {
        let store = SnapshotStore::new(snapshot(&["Norte"]));
        let before = store.current();
        let old = store.replace(snapshot(&["Norte", "Sur"]));
        assert!(Arc::ptr_eq(&before, &old));
        assert_eq!(before.group_names().len(), 1);
        assert_eq!(store.current().group_names().len(), 2);
    }
}
