use std::collections::HashSet;
use std::sync::Mutex;

use models::Role;
use rand::Rng;

const ID_SPACE: u32 = 1_000_000;

/// Issues role-prefixed ids (`d1234`, `r98`) that never repeat within one
/// generator. Ids are not globally unique.
#[derive(Default)]
pub struct IdGenerator {
    issued: Mutex<HashSet<String>>,
}

impl IdGenerator {
    pub fn new() -> Self { Self::default() }

    /// Mark an id as taken, e.g. one restored from storage.
    pub fn reserve(&self, id: &str) {
        let mut issued = self.issued.lock().unwrap_or_else(|e| e.into_inner());
        issued.insert(id.to_string());
    }

    pub fn next(&self, role: Role) -> String {
        let mut issued = self.issued.lock().unwrap_or_else(|e| e.into_inner());
        let mut rng = rand::thread_rng();
        loop {
            let id = format!("{}{}", role.prefix(), rng.gen_range(0..ID_SPACE));
            if issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_distinct() {
        let ids = IdGenerator::new();
        let mut seen = HashSet::new();
        for i in 0..2000 {
            let role = if i % 2 == 0 { Role::Donor } else { Role::Recipient };
            let id = ids.next(role);
            assert!(id.starts_with(role.prefix()));
            assert!(seen.insert(id), "duplicate id issued");
        }
    }

    #[test]
    fn reserved_ids_are_skipped() {
        let ids = IdGenerator::new();
        ids.reserve("d1");
        for _ in 0..500 {
            assert_ne!(ids.next(Role::Donor), "d1");
        }
    }
}
