use crate::{QUARTER_HOUR_RATE, QUARTER_HOUR_SECONDS};

/// Amount due for a stay of the given length. Every started quarter-hour
/// block bills as a full block; a zero-second stay is free.
pub fn fee(elapsed_seconds: u64) -> f64 {
    let blocks = elapsed_seconds.div_ceil(QUARTER_HOUR_SECONDS);
    blocks as f64 * QUARTER_HOUR_RATE
}

#[cfg(test)]
mod tests {
    use super::fee;

    #[test]
    fn zero_duration_is_free() {
        assert_eq!(0.0, fee(0));
    }

    #[test]
    fn partial_block_bills_as_full() {
        assert_eq!(2.5, fee(1));
        assert_eq!(5.0, fee(901));
        assert_eq!(7.5, fee(1801));
    }

    #[test]
    fn exact_block_boundaries() {
        assert_eq!(2.5, fee(900));
        assert_eq!(5.0, fee(1800));
    }

    #[test]
    fn no_maximum_charge() {
        // 96 blocks in a full day.
        assert_eq!(240.0, fee(86_400));
    }
}
