/// Asserts that a block panics. With `with "text"`, also asserts that the panic message contains
/// `text`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, with $expected:expr) => {{
        let payload = std::panic::catch_unwind(|| $run).expect_err("assertion failed to panic");
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {message:?} should mention {:?}",
            $expected
        );
    }};
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
