//! Shared backing buffers and the views that point into them.
//!
//! A [`Buffer`] is one heap allocation. Any number of [`ByteView`]s may
//! window into the same buffer, so a job payload can reference one key blob
//! from several fields without copying it. Identity ([`BufferId`]) is the
//! allocation address, never the contents.

use crate::error::{Result, UtilError};
use bytes::Bytes;
use std::fmt;
use std::ops::{Deref, Range};
use std::sync::Arc;

/// Identity of a backing allocation, stable while any handle to it is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(usize);

/// Reference-counted backing storage for payload bytes
#[derive(Clone)]
pub struct Buffer {
    inner: Arc<Vec<u8>>,
}

impl Buffer {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Arc::new(data.into()),
        }
    }

    pub fn id(&self) -> BufferId {
        BufferId(Arc::as_ptr(&self.inner) as usize)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// True when both handles refer to the same allocation
    pub fn same_buffer(&self, other: &Buffer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles (buffers and views) sharing this allocation
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// View over the whole buffer
    pub fn view(&self) -> ByteView {
        ByteView {
            range: 0..self.len(),
            buffer: self.clone(),
        }
    }

    /// View over `range` of the buffer
    pub fn slice(&self, range: Range<usize>) -> Result<ByteView> {
        if range.start > range.end || range.end > self.len() {
            return Err(UtilError::ContractViolation(format!(
                "range {}..{} outside buffer of {} bytes",
                range.start,
                range.end,
                self.len()
            )));
        }
        Ok(ByteView {
            range,
            buffer: self.clone(),
        })
    }

    /// Take the allocation back once this is the last handle to it.
    ///
    /// Fails with the buffer unchanged while other handles still exist.
    pub fn try_into_vec(self) -> std::result::Result<Vec<u8>, Buffer> {
        Arc::try_unwrap(self.inner).map_err(|inner| Buffer { inner })
    }
}

impl fmt::Debug for Buffer {
    // Contents may be key material, so only shape is printed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}

/// A window onto a [`Buffer`], the byte-sequence leaf of a payload
#[derive(Clone)]
pub struct ByteView {
    buffer: Buffer,
    range: Range<usize>,
}

impl ByteView {
    /// Allocate a fresh buffer holding `data` and view all of it
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Buffer::new(data).view()
    }

    /// The backing allocation this view points into
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer.as_slice()[self.range.clone()]
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Offset of this view inside its buffer
    pub fn offset(&self) -> usize {
        self.range.start
    }

    /// Narrow the view; `range` is relative to this view
    pub fn subview(&self, range: Range<usize>) -> Result<ByteView> {
        if range.start > range.end || range.end > self.len() {
            return Err(UtilError::ContractViolation(format!(
                "range {}..{} outside view of {} bytes",
                range.start,
                range.end,
                self.len()
            )));
        }
        let start = self.range.start + range.start;
        self.buffer.slice(start..start + range.len())
    }

    /// Convert into [`Bytes`], reusing the allocation when this view is the
    /// only handle and covers the whole buffer
    pub fn into_bytes(self) -> Bytes {
        let whole = self.range.start == 0 && self.range.end == self.buffer.len();
        if whole {
            match self.buffer.try_into_vec() {
                Ok(vec) => Bytes::from(vec),
                Err(buffer) => Bytes::copy_from_slice(buffer.as_slice()),
            }
        } else {
            Bytes::copy_from_slice(self.as_slice())
        }
    }
}

impl Deref for ByteView {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Views compare by content
impl PartialEq for ByteView {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteView {}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("buffer", &self.buffer.id())
            .field("range", &self.range)
            .finish()
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(data: Vec<u8>) -> Self {
        ByteView::new(data)
    }
}

impl From<&[u8]> for ByteView {
    fn from(data: &[u8]) -> Self {
        ByteView::new(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_views_share_identity() {
        let buffer = Buffer::new(vec![1, 2, 3, 4]);
        let head = buffer.slice(0..2).unwrap();
        let tail = buffer.slice(2..4).unwrap();
        assert_eq!(head.buffer().id(), tail.buffer().id());
        assert_eq!(&*head, &[1, 2]);
        assert_eq!(&*tail, &[3, 4]);
    }

    #[test]
    fn test_equal_contents_distinct_identity() {
        let a = ByteView::new(vec![7; 8]);
        let b = ByteView::new(vec![7; 8]);
        assert_eq!(a, b);
        assert_ne!(a.buffer().id(), b.buffer().id());
    }

    #[test]
    fn test_empty_buffers_have_distinct_identity() {
        let a = Buffer::new(Vec::new());
        let b = Buffer::new(Vec::new());
        assert!(!a.same_buffer(&b));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_subview_is_relative() {
        let view = Buffer::new((0u8..10).collect::<Vec<_>>()).slice(2..8).unwrap();
        let inner = view.subview(1..3).unwrap();
        assert_eq!(&*inner, &[3, 4]);
        assert_eq!(inner.offset(), 3);
        assert!(view.subview(4..7).is_err());
    }

    #[test]
    fn test_slice_out_of_range() {
        let buffer = Buffer::new(vec![0; 4]);
        assert!(buffer.slice(2..5).unwrap_err().is_contract_violation());
    }

    #[test]
    fn test_try_into_vec_requires_unique_handle() {
        let buffer = Buffer::new(vec![9, 9]);
        let view = buffer.view();
        let buffer = buffer.try_into_vec().unwrap_err();
        drop(view);
        assert_eq!(buffer.try_into_vec().ok(), Some(vec![9, 9]));
    }

    #[test]
    fn test_into_bytes_reuses_unique_allocation() {
        let view = ByteView::new(vec![1, 2, 3]);
        let ptr = view.as_ptr();
        let bytes = view.into_bytes();
        assert_eq!(bytes.as_ptr(), ptr);
        assert_eq!(&bytes[..], &[1, 2, 3]);
    }

    #[test]
    fn test_debug_hides_contents() {
        let view = ByteView::new(b"secret".to_vec());
        let printed = format!("{view:?}");
        assert!(!printed.contains("[115"));
        assert!(printed.contains("range"));
    }
}
