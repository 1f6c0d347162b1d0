//! GQL IR - shared types for the GraphQL front end.
//!
//! Only source locations live here for now. Everything derives
//! `Clone, Eq, Hash, Debug` so values can be used as cache keys.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;

pub use span::{Span, SpanError};
