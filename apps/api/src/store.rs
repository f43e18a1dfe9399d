use std::sync::Arc;

use tokio::sync::RwLock;

use crate::fixtures;
use crate::models::{Activity, Certificate, Student};

/// Process-lifetime collections. Nothing here outlives the server.
#[derive(Debug, Clone, Default)]
pub struct HubStore {
    pub activities: Vec<Activity>,
    pub certificates: Vec<Certificate>,
    pub students: Vec<Student>,
}

pub type SharedStore = Arc<RwLock<HubStore>>;

impl HubStore {
    pub fn seeded() -> Self {
        Self {
            activities: fixtures::activities(),
            certificates: fixtures::certificates(),
            students: fixtures::students(),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn activities_for(&self, student_id: &str) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect()
    }

    pub fn certificates_for(&self, student_id: &str) -> Vec<Certificate> {
        self.certificates
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect()
    }

    pub fn activity_mut(&mut self, id: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.id == id)
    }

    pub fn certificate_mut(&mut self, id: &str) -> Option<&mut Certificate> {
        self.certificates.iter_mut().find(|c| c.id == id)
    }

    /// New submissions go to the front, matching newest-first listings.
    pub fn push_activity(&mut self, activity: Activity) {
        self.activities.insert(0, activity);
    }

    pub fn push_certificate(&mut self, certificate: Certificate) {
        self.certificates.insert(0, certificate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_scopes_by_student() {
        let store = HubStore::seeded();
        assert_eq!(store.activities_for("CS2021001").len(), 3);
        assert!(store.activities_for("ME2020123").is_empty());
        assert_eq!(store.certificates_for("EC2021045").len(), 1);
        assert!(store.student("CS2021001").is_some());
        assert!(store.student("XX0000000").is_none());
    }
}
