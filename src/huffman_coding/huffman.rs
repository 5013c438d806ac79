use log::{debug, trace};

use crate::error::{CodecError, Result};
use crate::tools::freq_count::FrequencyMap;
use crate::Symbol;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of the Huffman tree. Internal nodes own both children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S: Symbol> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    /// Longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A tree fragment waiting in the heap. `key` is the smallest symbol in the fragment and
/// breaks weight ties. Leaf sets of live fragments never overlap, so keys are unique.
#[derive(Debug)]
struct Fragment<S: Symbol> {
    weight: u64,
    key: S,
    node: HuffmanNode<S>,
}

impl<S: Symbol> PartialEq for Fragment<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.key == other.key
    }
}
impl<S: Symbol> Eq for Fragment<S> {}

impl<S: Symbol> Ord for Fragment<S> {
    /// Order fragments by decreasing weight and decreasing key, so the max-heap hands back
    /// the lightest fragment (smallest key on ties) first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.key.cmp(&self.key))
    }
}
impl<S: Symbol> PartialOrd for Fragment<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency map.
///
/// The two lightest fragments are merged until one remains; the first one pulled becomes the
/// left child. A map with one symbol returns that symbol's leaf as the root. Hand-built maps
/// whose weights sum past `u64::MAX` fail with `WeightOverflow`.
pub fn build<S: Symbol>(freq: &FrequencyMap<S>) -> Result<HuffmanNode<S>> {
    if freq.is_empty() {
        return Err(CodecError::EmptyAlphabet);
    }

    let mut heap: BinaryHeap<Fragment<S>> = freq
        .iter()
        .map(|(&symbol, &weight)| Fragment {
            weight,
            key: symbol,
            node: HuffmanNode::Leaf { symbol, weight },
        })
        .collect();
    debug!("Building tree from {} distinct symbols", heap.len());

    // Pull off the two lightest fragments and merge them until only the root is left.
    while let Some(left) = heap.pop() {
        let right = match heap.pop() {
            Some(right) => right,
            None => return Ok(left.node),
        };
        let weight = left
            .weight
            .checked_add(right.weight)
            .ok_or(CodecError::WeightOverflow {
                left: left.weight,
                right: right.weight,
            })?;
        trace!(
            "merge {:?}({}) + {:?}({}) -> {}",
            left.key,
            left.weight,
            right.key,
            right.weight,
            weight
        );
        heap.push(Fragment {
            weight,
            key: left.key.min(right.key),
            node: HuffmanNode::Internal {
                weight,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        });
    }
    Err(CodecError::EmptyAlphabet)
}

#[cfg(test)]
mod test {
    use super::{build, HuffmanNode};
    use crate::error::CodecError;
    use crate::tools::freq_count::{count, FrequencyMap};

    fn leaf(symbol: char, weight: u64) -> Box<HuffmanNode<char>> {
        Box::new(HuffmanNode::Leaf { symbol, weight })
    }

    #[test]
    fn empty_test() {
        let freq: FrequencyMap<char> = FrequencyMap::new();
        assert_eq!(build(&freq), Err(CodecError::EmptyAlphabet));
    }

    #[test]
    fn single_symbol_test() {
        let root = build(&count("zzzz".chars())).unwrap();
        assert_eq!(
            root,
            HuffmanNode::Leaf {
                symbol: 'z',
                weight: 4
            }
        );
        assert_eq!(root.internal_count(), 0);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn tie_break_test() {
        let freq: FrequencyMap<char> = [('a', 1), ('b', 1), ('c', 2)].into_iter().collect();
        let root = build(&freq).unwrap();
        // a and b merge first; the merged fragment ties with c at weight 2 and wins on key 'a'.
        let expected = HuffmanNode::Internal {
            weight: 4,
            left: Box::new(HuffmanNode::Internal {
                weight: 2,
                left: leaf('a', 1),
                right: leaf('b', 1),
            }),
            right: leaf('c', 2),
        };
        assert_eq!(root, expected);
    }

    #[test]
    fn determinism_test() {
        let freq = count("the quick brown fox jumps over the lazy dog".chars());
        let first = build(&freq).unwrap();
        for _ in 0..10 {
            assert_eq!(build(&freq.clone()).unwrap(), first);
        }
    }

    #[test]
    fn shape_test() {
        let freq = count("mississippi river".chars());
        let root = build(&freq).unwrap();
        assert_eq!(root.leaf_count(), freq.len());
        assert_eq!(root.internal_count(), freq.len() - 1);
        assert_eq!(root.weight(), freq.total());
    }

    #[test]
    fn internal_weight_test() {
        fn check(node: &HuffmanNode<char>) {
            if let HuffmanNode::Internal {
                weight,
                left,
                right,
            } = node
            {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        let freq: FrequencyMap<char> =
            [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)]
                .into_iter()
                .collect();
        let root = build(&freq).unwrap();
        check(&root);
        assert_eq!(root.weight(), 100);
        assert_eq!(root.depth(), 4);
    }

    #[test]
    fn weight_overflow_test() {
        let freq: FrequencyMap<char> = [('a', u64::MAX), ('b', 1)].into_iter().collect();
        assert_eq!(
            build(&freq),
            Err(CodecError::WeightOverflow {
                left: 1,
                right: u64::MAX
            })
        );
        // A single huge weight never needs adding.
        let lone: FrequencyMap<char> = [('a', u64::MAX)].into_iter().collect();
        assert_eq!(build(&lone).unwrap().weight(), u64::MAX);
    }
}
