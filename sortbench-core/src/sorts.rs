//! The sorting algorithm catalogue.
//!
//! Every algorithm has the same shape: take ownership of a vector, return it
//! sorted ascending. The harness treats them as opaque callables; nothing in
//! this module knows about timing or skipping.

/// Insertion sort. O(n^2), the designated tortoise of the catalogue.
pub fn insertion_sort(mut v: Vec<i64>) -> Vec<i64> {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
    v
}

/// Top-down merge sort. O(n log n), allocates per merge.
pub fn merge_sort(mut v: Vec<i64>) -> Vec<i64> {
    if v.len() <= 1 {
        return v;
    }
    let right = v.split_off(v.len() / 2);
    merge(merge_sort(v), merge_sort(right))
}

fn merge(left: Vec<i64>, right: Vec<i64>) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// In-place heap sort over a max-heap.
pub fn heap_sort(mut v: Vec<i64>) -> Vec<i64> {
    let len = v.len();
    for root in (0..len / 2).rev() {
        sift_down(&mut v, root, len);
    }
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v, 0, end);
    }
    v
}

fn sift_down(v: &mut [i64], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && v[child + 1] > v[child] {
            child += 1;
        }
        if v[root] >= v[child] {
            break;
        }
        v.swap(root, child);
        root = child;
    }
}

/// Quick sort with Lomuto partitioning, last element as pivot.
pub fn quick_sort(mut v: Vec<i64>) -> Vec<i64> {
    quick(&mut v);
    v
}

fn quick(v: &mut [i64]) {
    if v.len() <= 1 {
        return;
    }
    let pivot_index = partition(v);
    let (lower, upper) = v.split_at_mut(pivot_index);
    quick(lower);
    quick(&mut upper[1..]);
}

fn partition(v: &mut [i64]) -> usize {
    let pivot = v[v.len() - 1];
    let mut store = 0;
    for i in 0..v.len() - 1 {
        if v[i] <= pivot {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, v.len() - 1);
    store
}

/// Counting sort over the value span. Handles negative values by offsetting
/// against the minimum.
pub fn counting_sort(v: Vec<i64>) -> Vec<i64> {
    let (Some(min), Some(max)) = (v.iter().copied().min(), v.iter().copied().max()) else {
        return v;
    };
    let mut counts = vec![0usize; (max - min) as usize + 1];
    for &x in &v {
        counts[(x - min) as usize] += 1;
    }
    let mut out = Vec::with_capacity(v.len());
    for (offset, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            out.push(min + offset as i64);
        }
    }
    out
}

/// LSD radix sort, one byte per pass. Values are biased into unsigned space
/// so that negative numbers order correctly.
pub fn radix_sort(v: Vec<i64>) -> Vec<i64> {
    const SIGN_BIT: u64 = 1 << 63;
    let mut keys: Vec<u64> = v.into_iter().map(|x| (x as u64) ^ SIGN_BIT).collect();
    let mut scratch = vec![0u64; keys.len()];
    // 8 passes of 8 bits; an even pass count leaves the result in `keys`.
    for shift in (0..64).step_by(8) {
        let mut offsets = [0usize; 256];
        for &k in &keys {
            offsets[((k >> shift) & 0xff) as usize] += 1;
        }
        let mut total = 0;
        for slot in offsets.iter_mut() {
            let count = *slot;
            *slot = total;
            total += count;
        }
        for &k in &keys {
            let bucket = ((k >> shift) & 0xff) as usize;
            scratch[offsets[bucket]] = k;
            offsets[bucket] += 1;
        }
        std::mem::swap(&mut keys, &mut scratch);
    }
    keys.into_iter().map(|k| (k ^ SIGN_BIT) as i64).collect()
}

/// Bucket sort: distribute into n buckets proportional to value, insertion
/// sort each bucket, concatenate.
pub fn bucket_sort(v: Vec<i64>) -> Vec<i64> {
    let (Some(min), Some(max)) = (v.iter().copied().min(), v.iter().copied().max()) else {
        return v;
    };
    if min == max {
        return v;
    }
    let n = v.len();
    let span = (max - min) as u128 + 1;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); n];
    for &x in &v {
        let index = ((x - min) as u128 * n as u128 / span) as usize;
        buckets[index].push(x);
    }
    let mut out = Vec::with_capacity(n);
    for bucket in &mut buckets {
        out.extend(insertion_sort(std::mem::take(bucket)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    type Sort = fn(Vec<i64>) -> Vec<i64>;

    const ALL: &[(&str, Sort)] = &[
        ("insertion", insertion_sort),
        ("merge", merge_sort),
        ("heap", heap_sort),
        ("quick", quick_sort),
        ("counting", counting_sort),
        ("radix", radix_sort),
        ("bucket", bucket_sort),
    ];

    fn reference(mut v: Vec<i64>) -> Vec<i64> {
        v.sort();
        v
    }

    #[test]
    fn test_sorts_match_reference() {
        let cases: Vec<Vec<i64>> = vec![
            vec![],
            vec![7],
            vec![3, 1, 2],
            vec![5, 5, 5, 5],
            vec![-4, 9, -20, 0, 3, 3, -1],
            vec![100_000, -100_000, 0, -1, 1],
            (0..257).rev().collect(),
        ];
        for (name, sort) in ALL {
            for case in &cases {
                assert_eq!(
                    sort(case.clone()),
                    reference(case.clone()),
                    "{name} disagrees with the reference on {case:?}"
                );
            }
        }
    }

    #[test]
    fn test_sorts_handle_negative_heavy_input() {
        let input: Vec<i64> = vec![-1000, -999, -1, -500, -2, -1000];
        for (name, sort) in ALL {
            assert_eq!(
                sort(input.clone()),
                reference(input.clone()),
                "{name} mishandles negatives"
            );
        }
    }
}
