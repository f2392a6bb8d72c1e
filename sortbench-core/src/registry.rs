//! The fixed, ordered algorithm catalogue.

use crate::sorts;

/// A sorting algorithm registered in the catalogue.
///
/// Entries are immutable fn-pointer triples; the catalogue is closed and
/// known at compile time, so no runtime registration is involved.
#[derive(Debug, Clone, Copy)]
pub struct SortAlgorithm {
    /// Unique identifier (stable, machine-oriented).
    pub id: &'static str,
    /// Human-readable display name, used for result columns and legends.
    pub name: &'static str,
    /// The sort callable. Takes ownership of its input, returns it sorted.
    pub run: fn(Vec<i64>) -> Vec<i64>,
}

/// The benchmark catalogue, in the order results are reported.
///
/// Order is significant only for deterministic iteration and column
/// ordering; it carries no priority semantics.
pub fn registry() -> &'static [SortAlgorithm] {
    const REGISTRY: &[SortAlgorithm] = &[
        SortAlgorithm {
            id: "insertionsort",
            name: "insertion sort",
            run: sorts::insertion_sort,
        },
        SortAlgorithm {
            id: "mergesort",
            name: "merge sort",
            run: sorts::merge_sort,
        },
        SortAlgorithm {
            id: "heapsort",
            name: "heap sort",
            run: sorts::heap_sort,
        },
        SortAlgorithm {
            id: "quicksort",
            name: "quick sort",
            run: sorts::quick_sort,
        },
        SortAlgorithm {
            id: "countingsort",
            name: "counting sort",
            run: sorts::counting_sort,
        },
        SortAlgorithm {
            id: "radixsort",
            name: "radix sort",
            run: sorts::radix_sort,
        },
        SortAlgorithm {
            id: "bucketsort",
            name: "bucket sort",
            run: sorts::bucket_sort,
        },
    ];
    REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_and_names_unique() {
        let ids: HashSet<_> = registry().iter().map(|a| a.id).collect();
        let names: HashSet<_> = registry().iter().map(|a| a.name).collect();
        assert_eq!(ids.len(), registry().len());
        assert_eq!(names.len(), registry().len());
    }

    #[test]
    fn test_registry_entries_sort() {
        for algorithm in registry() {
            assert_eq!(
                (algorithm.run)(vec![3, -1, 2]),
                vec![-1, 2, 3],
                "{} does not sort",
                algorithm.id
            );
        }
    }
}
