use std::fmt::{self, Debug, Formatter};

/// Debug-formats as the wrapped string itself, without quotes or escapes.
pub struct DebugRaw<'a>(pub &'a str);

impl Debug for DebugRaw<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
