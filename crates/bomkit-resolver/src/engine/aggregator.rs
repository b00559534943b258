//! Aggregation of matched materials across entries and instances.

use bomkit_core::types::MaterialResult;
use rustc_hash::FxHashMap;

/// Deduplicates results by material id, last write wins.
///
/// A material keeps the position of its first occurrence; later
/// occurrences replace its value. With the engine's fixed traversal order
/// (items then accessories by id, instances by id, materials by id) the
/// surviving value is deterministic.
#[derive(Debug, Default)]
pub struct MaterialAggregator {
    index: FxHashMap<i64, usize>,
    results: Vec<MaterialResult>,
}

impl MaterialAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, returning the one it replaced, if any.
    pub fn insert(&mut self, result: MaterialResult) -> Option<MaterialResult> {
        match self.index.get(&result.material_id) {
            Some(&slot) => {
                let previous = std::mem::replace(&mut self.results[slot], result);
                tracing::debug!(
                    material_id = previous.material_id,
                    previous_quantity = previous.quantity,
                    quantity = self.results[slot].quantity,
                    "duplicate material replaced"
                );
                Some(previous)
            }
            None => {
                self.index.insert(result.material_id, self.results.len());
                self.results.push(result);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_vec(self) -> Vec<MaterialResult> {
        self.results
    }
}

impl Extend<MaterialResult> for MaterialAggregator {
    fn extend<I: IntoIterator<Item = MaterialResult>>(&mut self, iter: I) {
        for result in iter {
            self.insert(result);
        }
    }
}

/// Merge result lists in the order given.
pub fn merge<I, L>(lists: I) -> Vec<MaterialResult>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = MaterialResult>,
{
    let mut aggregator = MaterialAggregator::new();
    for list in lists {
        aggregator.extend(list);
    }
    aggregator.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(material_id: i64, quantity: f64) -> MaterialResult {
        MaterialResult {
            material_id,
            material_name: format!("M{material_id}"),
            sku: None,
            unit: Some("pcs".into()),
            quantity,
            assembly_kit: None,
        }
    }

    #[test]
    fn later_duplicate_wins() {
        let merged = merge(vec![vec![result(1, 2.0)], vec![result(1, 5.0)]]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, 5.0);
    }

    #[test]
    fn first_occurrence_keeps_position() {
        let merged = merge(vec![
            vec![result(1, 1.0), result(2, 1.0)],
            vec![result(3, 1.0), result(1, 9.0)],
        ]);
        let ids: Vec<_> = merged.iter().map(|r| r.material_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(merged[0].quantity, 9.0);
    }

    #[test]
    fn insert_reports_replacement() {
        let mut agg = MaterialAggregator::new();
        assert!(agg.insert(result(7, 1.0)).is_none());
        let replaced = agg.insert(result(7, 4.0)).unwrap();
        assert_eq!(replaced.quantity, 1.0);
        assert_eq!(agg.len(), 1);
    }
}
