use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// On-device key-value storage holding whole string values per slot.
///
/// Implementations only move strings in and out; serialization of what a
/// slot holds is up to the caller. Methods return boxed futures for dyn
/// compatibility.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. Returns `Ok(None)` if the slot has never been written.
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>>;

    /// Replace the full contents of a slot.
    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StorageError>>;
}
