// special lint
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
// rust compiler lints
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

mod iter;
mod raw_buf;
mod seq;

pub(crate) use raw_buf::RawBuf;
pub use {
    iter::IntoIter,
    seq::{Error, Result, SeqVec},
};

/// Constructs a [`SeqVec`] from a list of elements, panicking if an
/// allocation fails.
///
/// ```
/// let cars = seqbuf::seq!["Lexus", "BMW", "Chevy"];
/// assert_eq!(cars.len(), 3);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::SeqVec::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut seq = $crate::SeqVec::new();
        $(seq.push($value).expect("allocation failed");)+
        seq
    }};
}

fn _assertion() {
    fn assert_sync_send<T: Sync + Send>() {}

    assert_sync_send::<SeqVec<()>>();
    assert_sync_send::<IntoIter<String>>();
}

#[test]
fn smoke() {
    fn inner(mut seq: SeqVec<String>) -> Result<()> {
        const N: usize = if cfg!(miri) { 100 } else { 10_000 };

        for i in 0..N {
            seq.push(i.to_string())?;
        }
        assert_eq!(seq.len(), N);
        assert_eq!(seq.get(N - 1)?, &(N - 1).to_string());

        for _ in 0..N / 2 {
            seq.remove(0)?;
        }
        assert_eq!(seq.len(), N / 2);
        assert_eq!(seq.get(0)?, &(N / 2).to_string());

        seq.clear();
        assert!(seq.is_empty());

        Ok(())
    }

    inner(SeqVec::new()).unwrap();
    inner(SeqVec::with_capacity(32).unwrap()).unwrap();
}
