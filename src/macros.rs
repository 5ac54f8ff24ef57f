/// Integer conversion that panics on overflow, or skips the check entirely
/// with the `unsafe_conversions` feature.
///
/// ```
/// let symbol = litcost::cast!(u8, 200usize);
/// assert_eq!(symbol, 200u8);
/// ```
#[macro_export]
macro_rules! cast {
    ($ty:ty, $a:expr) => {
        if cfg!(feature = "unsafe_conversions") {
            unsafe { <$ty>::try_from($a).unwrap_unchecked() }
        } else {
            <$ty>::try_from($a).unwrap()
        }
    };
}
