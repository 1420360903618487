//! Byte-exact comparison support for decode tests.
//!
//! A plain `assert_eq!` on two multi-kilobyte buffers produces an
//! unreadable dump; this reports the first differing index with a hex
//! window of context around it.

pub fn assert_bytes_eq(left: &[u8], right: &[u8], msg: &str) {
    if left == right {
        return;
    }

    if left.len() != right.len() {
        panic!(
            "byte mismatch: {}\n  left len: {}\n right len: {}",
            msg,
            left.len(),
            right.len()
        );
    }

    for (i, (a, b)) in left.iter().zip(right.iter()).enumerate() {
        if a != b {
            let start = i.saturating_sub(16);
            let end = (i + 16).min(left.len());
            panic!(
                "byte mismatch: {} at index {}\n  left[{}]: {:02X}\n right[{}]: {:02X}\n context:\n  left:  {:02X?}\n right: {:02X?}",
                msg, i, i, a, i, b, &left[start..end], &right[start..end]
            );
        }
    }
}

#[macro_export]
macro_rules! assert_slices_eq {
    ($left:expr, $right:expr) => {
        $crate::test_utils::assert_bytes_eq(&$left[..], &$right[..], "");
    };
    ($left:expr, $right:expr, $msg:expr) => {
        $crate::test_utils::assert_bytes_eq(&$left[..], &$right[..], $msg);
    };
}
