use std::collections::BTreeMap;

/// A value that can live in a [`Table`]: it is built from a draft once the
/// table has assigned its key.
pub(in crate::database) trait Record: Clone + Send + Sync + 'static {
    type Draft;
    fn key(&self) -> i64;
    fn assemble(key: i64, draft: Self::Draft) -> Self;
}

/// Generic keyed collection shared by every entity kind.
///
/// Keys start at 1 and grow monotonically; a removed key is never handed out
/// again. Rows are kept ordered by key, which is also insertion order.
#[derive(Debug, Clone)]
pub(in crate::database) struct Table<R: Record> {
    rows: BTreeMap<i64, R>,
    last_key: i64,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_key: 0,
        }
    }
}

impl<R: Record> Table<R> {
    pub fn insert(&mut self, draft: R::Draft) -> R {
        self.last_key += 1;
        let record = R::assemble(self.last_key, draft);
        self.rows.insert(self.last_key, record.clone());
        record
    }

    pub fn get(&self, key: i64) -> Option<R> {
        self.rows.get(&key).cloned()
    }

    /// Snapshot of every row. Mutating the returned vector never touches the table.
    pub fn list(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    pub fn scan(&self) -> impl Iterator<Item = &R> + '_ {
        self.rows.values()
    }

    pub fn update(&mut self, key: i64, f: impl FnOnce(&mut R)) -> Option<R> {
        let row = self.rows.get_mut(&key)?;
        f(row);
        debug_assert_eq!(row.key(), key, "update must not change the key");
        Some(row.clone())
    }

    pub fn remove(&mut self, key: i64) -> Option<R> {
        self.rows.remove(&key)
    }
}
