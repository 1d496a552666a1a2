/// Converts errors from their error type (of the submodule) to that of
/// a `DirectionsError` variant.
///
/// ```rust,ignore
/// use routers_directions::geometry::GeometryError;
/// routers_directions::impl_err!(GeometryError, Geometry);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::DirectionsError {
                fn from(value: $from) -> Self {
                    $crate::DirectionsError::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
