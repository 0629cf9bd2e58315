//! Reusable scratch buffers.
//!
//! Token joining and `marshal_*` both need a short-lived growable buffer per
//! call. Buffers are checked out of a pool, used by exactly one caller, cleared
//! and checked back in when the guard drops. The idle list is the only shared
//! state and the mutex around it is held only for the push/pop.

use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// A buffer that can be emptied for reuse without releasing its capacity.
pub trait Scratch: Default {
    fn reset(&mut self);
}

impl Scratch for String {
    fn reset(&mut self) {
        self.clear();
    }
}

impl Scratch for Vec<u8> {
    fn reset(&mut self) {
        self.clear();
    }
}

/// Pool of idle scratch buffers.
pub struct BufferPool<T: Scratch> {
    idle: Mutex<Vec<T>>,
    max_idle: usize,
}

impl<T: Scratch> BufferPool<T> {
    pub const fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Check out a buffer, allocating a fresh one if none are idle.
    pub fn get(&self) -> Pooled<'_, T> {
        let buf = self.lock().pop().unwrap_or_default();
        Pooled { buf, pool: self }
    }

    /// Number of buffers currently checked in.
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    fn put(&self, mut buf: T) {
        buf.reset();
        let mut idle = self.lock();
        if idle.len() < self.max_idle {
            idle.push(buf);
        } else {
            tracing::trace!(max_idle = self.max_idle, "scratch pool full, dropping buffer");
        }
    }

    // A panic while the list is locked cannot leave a dirty buffer behind,
    // buffers are reset before they are pushed.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.idle.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A checked-out buffer. Returned to its pool on drop.
pub struct Pooled<'a, T: Scratch> {
    buf: T,
    pool: &'a BufferPool<T>,
}

impl<T: Scratch> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.buf
    }
}

impl<T: Scratch> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.buf
    }
}

impl<T: Scratch> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        self.pool.put(std::mem::take(&mut self.buf));
    }
}

/// Scratch strings for joining flag tokens.
pub(crate) static TOKENS: BufferPool<String> = BufferPool::new(64);

/// Scratch byte buffers for `marshal_*`.
pub(crate) static DOCUMENTS: BufferPool<Vec<u8>> = BufferPool::new(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_reset_before_reuse() {
        let pool: BufferPool<String> = BufferPool::new(4);
        {
            let mut buf = pool.get();
            buf.push_str("leftover");
        }
        assert_eq!(pool.idle(), 1);

        let buf = pool.get();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= "leftover".len());
    }

    #[test]
    fn concurrent_checkouts_get_distinct_buffers() {
        let pool: BufferPool<String> = BufferPool::new(4);
        let mut a = pool.get();
        let mut b = pool.get();
        a.push('a');
        b.push('b');
        assert_eq!(a.as_str(), "a");
        assert_eq!(b.as_str(), "b");
        drop(a);
        drop(b);
        assert_eq!(pool.idle(), 2);
    }

    #[test]
    fn pool_caps_idle_buffers() {
        let pool: BufferPool<Vec<u8>> = BufferPool::new(1);
        let a = pool.get();
        let b = pool.get();
        drop(a);
        drop(b);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn shared_across_threads() {
        let pool: BufferPool<String> = BufferPool::new(8);
        std::thread::scope(|s| {
            for i in 0..8 {
                let pool = &pool;
                s.spawn(move || {
                    for _ in 0..100 {
                        let mut buf = pool.get();
                        assert!(buf.is_empty());
                        buf.push_str(&i.to_string());
                    }
                });
            }
        });
        assert!(pool.idle() <= 8);
    }
}
