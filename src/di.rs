//! Dependency resolution from the application context.
//!
//! Services declare how they are built from a [`crate::context::Context`] by
//! implementing `FromRef<Context>`; the MCP server then resolves them on
//! demand with `server.resolve::<UserService>()`.

/// Trait for extracting a value from a reference to another type.
///
/// Types that implement `FromRef<T>` can be extracted from `&T`.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}
