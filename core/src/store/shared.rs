// order_admin/src/store/shared.rs
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared, interior-mutable store state.
///
/// IMPORTANT: guards are blocking and MUST NOT be held across `.await`
/// suspension points. Copy what you need out of the guard, drop it, then await.
#[derive(Debug)]
pub struct StoreData<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> StoreData<T> {
  pub fn new(data: T) -> Self {
    StoreData(Arc::new(RwLock::new(data)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Applies `f` under the write lock and returns its result.
  pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(&mut self.write())
  }
}

impl<T: Send + Sync + 'static + Clone> StoreData<T> {
  pub fn snapshot(&self) -> T {
    self.read().clone()
  }
}

impl<T: Send + Sync + 'static> Clone for StoreData<T> {
  fn clone(&self) -> Self {
    StoreData(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for StoreData<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
