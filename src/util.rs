// Ignore errors when writing user-facing messages
#[macro_export]
macro_rules! say {
    ($out:expr, $($x:tt)*) => {
        let _ = writeln!($out, $($x)*);
    }
}

pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}
