/// The pending-comment queue: an ordered sequence of `(text, line)` pairs
/// awaiting association with the *next* construct created in the current
/// scope. A per-parse local, not shared state.
#[derive(Default)]
pub(crate) struct PendingQueue(Vec<(String, usize)>);

impl PendingQueue {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, text: String, line: usize) {
        self.0.push((text, line));
    }

    /// Flush the whole queue onto `comments`, in original order.
    pub fn flush_into(&mut self, comments: &mut Vec<String>) {
        comments.extend(self.0.drain(..).map(|(text, _)| text));
    }

    /// Flush onto the first member of the root file scope, applying the
    /// file-preamble split: the trailing block of comments whose line
    /// numbers are mutually consecutive goes to `comments`
    /// (the member itself); an earlier block separated by a blank line is
    /// promoted to `file_comments`.
    ///
    /// Found by walking the queue backwards from its last entry: as long
    /// as each entry's line is exactly one more than its predecessor's,
    /// it joins the member's block; the first gap is the split point.
    pub fn flush_with_preamble_split(
        &mut self,
        file_comments: &mut Vec<String>,
        comments: &mut Vec<String>,
    ) {
        let split = self.preamble_split_point();
        for (text, _) in self.0.drain(..split) {
            file_comments.push(text);
        }
        for (text, _) in self.0.drain(..) {
            comments.push(text);
        }
    }

    fn preamble_split_point(&self) -> usize {
        let n = self.0.len();
        if n == 0 {
            return 0;
        }
        let mut idx = n - 1;
        while idx > 0 && self.0[idx].1 == self.0[idx - 1].1 + 1 {
            idx -= 1;
        }
        idx
    }
}
