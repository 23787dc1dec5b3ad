//! Display port trait for the multiplexed 7-segment display

/// Output lines of a common-anode, four digit 7-segment display
///
/// Digit-select lines are active-high, segment lines active-low. The
/// multiplexer always calls [`deselect_all`](Self::deselect_all) before
/// changing the segment lines, so at most one digit is ever lit.
pub trait DisplayPort {
    /// Drive every digit-select line inactive
    fn deselect_all(&mut self);

    /// Drive the eight segment lines with an encoded pattern
    ///
    /// Bit layout is `dp,g,f,e,d,c,b,a`, a cleared bit lights the segment.
    fn write_segments(&mut self, pattern: u8);

    /// Drive the select line of `digit` (0-3) active
    fn select(&mut self, digit: u8);

    /// Put every line in its lowest-current state
    fn quiesce(&mut self) {
        self.deselect_all();
        self.write_segments(0xFF);
    }
}
