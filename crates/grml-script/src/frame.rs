use std::borrow::Cow;
use std::fmt;

use crate::buffer::GrowBuffer;
use crate::schema::MAX_FLOAT_LISTS;

/// Raised when an element declares more float lists than there are slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SlotOverflow;

impl fmt::Display for SlotOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "more than {} list-valued float attributes", MAX_FLOAT_LISTS)
    }
}

impl std::error::Error for SlotOverflow {}

/// Marshaled arguments of one element.
///
/// Scalars are cleared per element. List storage lives for the whole import
/// run and only its fill count is reset, so capacity grows monotonically.
/// String values borrow from the input script and cannot outlive it.
#[derive(Debug)]
pub struct ArgFrame<'a> {
    ints: Vec<i32>,
    floats: Vec<f64>,
    strings: Vec<Cow<'a, str>>,
    int_list: GrowBuffer<i32>,
    float_lists: Vec<GrowBuffer<f64>>,
    float_lists_used: usize,
}

impl<'a> ArgFrame<'a> {
    /// Creates a frame with every list slot allocated.
    pub fn new() -> Self {
        Self {
            ints: Vec::new(),
            floats: Vec::new(),
            strings: Vec::new(),
            int_list: GrowBuffer::with_chunk(),
            float_lists: (0..MAX_FLOAT_LISTS).map(|_| GrowBuffer::with_chunk()).collect(),
            float_lists_used: 0,
        }
    }

    /// Resets all fill counts for the next element.
    pub fn begin(&mut self) {
        self.ints.clear();
        self.floats.clear();
        self.strings.clear();
        self.int_list.reset_count();
        self.float_lists_used = 0;
    }

    #[inline]
    pub fn push_int(&mut self, v: i32) {
        self.ints.push(v);
    }

    #[inline]
    pub fn push_float(&mut self, v: f64) {
        self.floats.push(v);
    }

    #[inline]
    pub fn push_string(&mut self, s: Cow<'a, str>) {
        self.strings.push(s);
    }

    /// The integer list shared by every `IntList` position of the element.
    #[inline]
    pub fn int_list_mut(&mut self) -> &mut GrowBuffer<i32> {
        &mut self.int_list
    }

    /// Claims the next float-list slot with its fill count reset.
    pub fn next_float_list(&mut self) -> Result<&mut GrowBuffer<f64>, SlotOverflow> {
        let slot = self.float_lists.get_mut(self.float_lists_used).ok_or(SlotOverflow)?;
        self.float_lists_used += 1;
        slot.reset_count();
        Ok(slot)
    }

    // ── Dispatch accessors ────────────────────────────────────────────────
    //
    // Indices come from the fixed dispatch bindings, which agree with the
    // schema signatures. An out-of-range index is a binding defect.

    #[inline]
    pub fn int(&self, i: usize) -> i32 {
        self.ints[i]
    }

    #[inline]
    pub fn float(&self, i: usize) -> f64 {
        self.floats[i]
    }

    #[inline]
    pub fn string(&self, i: usize) -> &str {
        &self.strings[i]
    }

    #[inline]
    pub fn int_list(&self) -> &[i32] {
        self.int_list.as_slice()
    }

    #[inline]
    pub fn float_list(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.float_lists_used, "float list {i} was not filled");
        self.float_lists[i].as_slice()
    }

    pub fn int_count(&self) -> usize {
        self.ints.len()
    }

    pub fn float_count(&self) -> usize {
        self.floats.len()
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn float_lists_used(&self) -> usize {
        self.float_lists_used
    }

    /// Frees all list storage. Called once when the import run ends.
    pub fn release(&mut self) {
        self.begin();
        self.int_list.release();
        for list in &mut self.float_lists {
            list.release();
        }
    }
}

impl Default for ArgFrame<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_float_slots_allocated_up_front() {
        let mut frame = ArgFrame::new();
        for _ in 0..MAX_FLOAT_LISTS {
            let slot = frame.next_float_list().unwrap();
            assert!(slot.capacity() > 0);
        }
    }

    #[test]
    fn fifth_float_list_overflows() {
        let mut frame = ArgFrame::new();
        for _ in 0..MAX_FLOAT_LISTS {
            frame.next_float_list().unwrap();
        }
        assert_eq!(frame.next_float_list().unwrap_err(), SlotOverflow);
    }

    #[test]
    fn begin_resets_counts_but_keeps_capacity() {
        let mut frame = ArgFrame::new();
        frame.push_int(3);
        frame.push_float(1.5);
        frame.push_string(Cow::Borrowed("hi"));
        frame.int_list_mut().push(9);
        frame.next_float_list().unwrap().push(2.0);
        let cap = frame.float_lists[0].capacity();

        frame.begin();
        assert_eq!(frame.int_count(), 0);
        assert_eq!(frame.float_count(), 0);
        assert_eq!(frame.string_count(), 0);
        assert!(frame.int_list().is_empty());
        assert_eq!(frame.float_lists_used(), 0);

        let slot = frame.next_float_list().unwrap();
        assert!(slot.is_empty());
        assert_eq!(slot.capacity(), cap);
    }

    #[test]
    fn release_frees_lists() {
        let mut frame = ArgFrame::new();
        frame.release();
        assert_eq!(frame.int_list.capacity(), 0);
        assert!(frame.float_lists.iter().all(|l| l.capacity() == 0));
    }
}
