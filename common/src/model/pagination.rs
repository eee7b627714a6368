/// Page arithmetic for the users table. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: u32,
    total_items: u32,
}

impl Pagination {
    pub fn new(page_size: u32, total_items: u32) -> Self {
        Self {
            page_size,
            total_items,
        }
    }

    /// `ceil(total_items / page_size)`, never less than one page.
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self, page: u32) -> bool {
        page > 1
    }

    pub fn has_next(&self, page: u32) -> bool {
        page < self.total_pages()
    }
}
