//! Shift-and-insert for buffers used as fixed-depth measurement history.
//!
//! Both operations keep the buffer length unchanged: inserting at one end
//! evicts the element at the other end. The evicted element is returned so
//! callers can forward or undo the insertion.

/// Returned when a shift-insert is attempted on a zero-length buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot shift-insert into an empty buffer")]
pub struct EmptyBufferError;

/// Inserts `value` at index 0, moving every element one position toward the end.
///
/// The last element is discarded and returned.
///
/// # Examples
///
/// ```
/// # use fixkit_core::shift::shift_insert_front;
/// let mut buf = [1, 2, 3];
/// assert_eq!(shift_insert_front(&mut buf, 0), Ok(3));
/// assert_eq!(buf, [0, 1, 2]);
/// ```
pub fn shift_insert_front<T>(buf: &mut [T], value: T) -> Result<T, EmptyBufferError>
where
    T: Copy,
{
    let evicted = *buf.last().ok_or(EmptyBufferError)?;
    buf.copy_within(..buf.len() - 1, 1);
    buf[0] = value;
    Ok(evicted)
}

/// Inserts `value` at the last index, moving every element one position toward the start.
///
/// The first element is discarded and returned.
///
/// # Examples
///
/// ```
/// # use fixkit_core::shift::shift_insert_back;
/// let mut buf = [1, 2, 3];
/// assert_eq!(shift_insert_back(&mut buf, 4), Ok(1));
/// assert_eq!(buf, [2, 3, 4]);
/// ```
pub fn shift_insert_back<T>(buf: &mut [T], value: T) -> Result<T, EmptyBufferError>
where
    T: Copy,
{
    let evicted = *buf.first().ok_or(EmptyBufferError)?;
    let last = buf.len() - 1;
    buf.copy_within(1.., 0);
    buf[last] = value;
    Ok(evicted)
}
