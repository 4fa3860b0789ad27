use civitas_protocol::{CivId, DiplomacyEntry, DiplomaticStatus};

/// Dense `n * n` relation matrix indexed by `CivId`.
///
/// Writes always go through [`DiplomacyState::set`], which updates both
/// directions, so `status(a, b) == status(b, a)` holds at all times.
#[derive(Clone, Debug)]
pub struct DiplomacyState {
    civ_count: usize,
    status: Vec<DiplomaticStatus>,
}

impl DiplomacyState {
    pub fn new(civ_count: usize) -> Self {
        Self {
            civ_count,
            status: vec![DiplomaticStatus::Peace; civ_count * civ_count],
        }
    }

    /// Grows the matrix by one civilization at peace with everyone.
    pub fn add_civ(&mut self) {
        let old = self.civ_count;
        let n = old + 1;
        let mut status = vec![DiplomaticStatus::Peace; n * n];
        for a in 0..old {
            for b in 0..old {
                status[a * n + b] = self.status[a * old + b];
            }
        }
        self.civ_count = n;
        self.status = status;
    }

    fn idx(&self, a: CivId, b: CivId) -> Option<usize> {
        let n = self.civ_count;
        let (ai, bi) = (a.index(), b.index());
        if ai >= n || bi >= n {
            None
        } else {
            Some(ai * n + bi)
        }
    }

    pub fn status(&self, a: CivId, b: CivId) -> DiplomaticStatus {
        self.idx(a, b)
            .and_then(|i| self.status.get(i).copied())
            .unwrap_or_default()
    }

    pub fn is_at_war(&self, a: CivId, b: CivId) -> bool {
        self.status(a, b) == DiplomaticStatus::War
    }

    /// Sets both directions. Self-relations and unknown ids are ignored.
    pub fn set(&mut self, a: CivId, b: CivId, status: DiplomaticStatus) {
        if a == b {
            return;
        }
        let (Some(i1), Some(i2)) = (self.idx(a, b), self.idx(b, a)) else {
            return;
        };
        self.status[i1] = status;
        self.status[i2] = status;
    }

    /// Every unordered pair once, `a < b`, in index order.
    pub fn table(&self) -> Vec<DiplomacyEntry> {
        let n = self.civ_count;
        let mut entries = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n {
            for b in (a + 1)..n {
                let (a, b) = (CivId(a as u8), CivId(b as u8));
                entries.push(DiplomacyEntry {
                    a,
                    b,
                    status: self.status(a, b),
                });
            }
        }
        entries
    }
}
