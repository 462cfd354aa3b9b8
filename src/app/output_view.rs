/// Vertical scroll position of the output pane
///
/// While following, the view sticks to the newest lines as the log grows.
/// Scrolling up detaches it; reaching the bottom again re-attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputView {
    offset: usize,
    max_offset: usize,
    viewport_height: u16,
    follow: bool,
}

impl OutputView {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            follow: true,
        }
    }

    /// Index of the first visible log line
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        self.max_offset = content_lines.saturating_sub(viewport_height as usize);

        if self.follow {
            self.offset = self.max_offset;
        } else {
            self.offset = self.offset.min(self.max_offset);
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
        self.follow = self.offset == self.max_offset;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = self.offset == self.max_offset;
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.half_page());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.half_page());
    }

    fn half_page(&self) -> usize {
        (self.viewport_height as usize / 2).max(1)
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
        self.follow = self.max_offset == 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.follow = true;
    }
}

impl Default for OutputView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "output_view_tests.rs"]
mod output_view_tests;
