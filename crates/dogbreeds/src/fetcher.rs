//! The lookup contract shared by every breed source

use std::sync::Arc;

use crate::error::Result;

/// A source of sub-breed lists.
///
/// Implementations must report every failure (blank input, unknown breed,
/// transport or decoding trouble) as [`BreedNotFound`](crate::BreedNotFound).
/// Lookups take `&self`; sources that mutate state use interior mutability.
pub trait BreedFetcher {
    /// Fetch the sub-breeds of `breed`, in the order the source returns them
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}
