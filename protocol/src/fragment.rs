use std::sync::OnceLock;

use crate::constants::MESSAGE_MAX_SIZE;
use crate::message::{Message, SequenceError};

static MAX_NUMBERS_PER_FRAGMENT: OnceLock<u64> = OnceLock::new();

/// How many `f64` samples fit in one `NumberSequenceResponse` fragment without
/// its serialized size exceeding [`MESSAGE_MAX_SIZE`]. Derived once from a
/// size probe of an empty response, then cached, per §4.3 of the
/// specification.
pub fn max_numbers_per_fragment() -> u64 {
    *MAX_NUMBERS_PER_FRAGMENT.get_or_init(|| {
        let probe = Message::NumberSequenceResponse {
            number_count: 0,
            sequence_index: 0,
            sequence_count: 0,
            sequence_number_count: 0,
            numbers: Vec::new(),
            checksum: 0,
            error: SequenceError::SequenceOk,
            error_message: String::new(),
        };

        let mut buffer = Vec::new();
        probe.encode(&mut buffer).expect("probe message always encodes");

        let overhead = buffer.len();
        let per_number = std::mem::size_of::<f64>();
        (MESSAGE_MAX_SIZE.saturating_sub(overhead) / per_number) as u64
    })
}

/// Number of fragments required to deliver `number_count` values, and the
/// size of the final fragment. The zero-remainder case is treated as a full
/// fragment rather than an empty one — see the resolved Open Question in
/// DESIGN.md.
pub fn fragment_plan(number_count: u64) -> FragmentPlan {
    let max_per_fragment = max_numbers_per_fragment().max(1);

    if number_count == 0 {
        return FragmentPlan {
            sequence_count: 0,
            max_per_fragment,
            last_fragment_size: 0,
        };
    }

    let sequence_count = number_count.div_ceil(max_per_fragment);
    let remainder = number_count % max_per_fragment;
    let last_fragment_size = if remainder == 0 { max_per_fragment } else { remainder };

    FragmentPlan {
        sequence_count,
        max_per_fragment,
        last_fragment_size,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FragmentPlan {
    pub sequence_count: u64,
    pub max_per_fragment: u64,
    pub last_fragment_size: u64,
}

impl FragmentPlan {
    /// How many numbers belong in the fragment at `sequence_index`.
    pub fn numbers_in_fragment(&self, sequence_index: u64) -> u64 {
        if self.sequence_count == 0 {
            return 0;
        }

        if sequence_index + 1 == self.sequence_count {
            self.last_fragment_size
        } else {
            self.max_per_fragment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_per_fragment_keeps_probe_under_limit() {
        assert!(max_numbers_per_fragment() > 0);
        assert!(max_numbers_per_fragment() * 8 < MESSAGE_MAX_SIZE as u64);
    }

    #[test]
    fn zero_count_yields_zero_fragments() {
        let plan = fragment_plan(0);
        assert_eq!(plan.sequence_count, 0);
        assert_eq!(plan.numbers_in_fragment(0), 0);
    }

    #[test]
    fn exact_multiple_keeps_full_last_fragment() {
        let max = max_numbers_per_fragment();
        let plan = fragment_plan(max * 3);
        assert_eq!(plan.sequence_count, 3);
        assert_eq!(plan.last_fragment_size, max);
        assert_eq!(plan.numbers_in_fragment(2), max);
    }

    #[test]
    fn remainder_is_final_fragment_size() {
        let max = max_numbers_per_fragment();
        let plan = fragment_plan(max * 2 + 1);
        assert_eq!(plan.sequence_count, 3);
        assert_eq!(plan.last_fragment_size, 1);
    }

    #[test]
    fn single_number_yields_one_fragment() {
        let plan = fragment_plan(1);
        assert_eq!(plan.sequence_count, 1);
        assert_eq!(plan.numbers_in_fragment(0), 1);
    }
}
