use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectLimit(i32);

impl SelectLimit {
    pub fn new(value: impl Into<i32>) -> Self {
        SelectLimit(value.into())
    }

    /// Row count to fetch. Negative limits select nothing.
    pub fn rows(&self) -> i64 {
        i64::from(self.0.max(0))
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(30)
    }
}

/// 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectPage(i32);

impl SelectPage {
    pub fn new(value: impl Into<i32>) -> Self {
        SelectPage(value.into())
    }

    /// Number of rows to skip for this page. Pages below 1 are treated as the first page.
    pub fn offset(&self, limit: &SelectLimit) -> i64 {
        let page = i64::from(self.0.max(1));
        (page - 1) * limit.rows()
    }
}

impl Default for SelectPage {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod test {
    use super::{SelectLimit, SelectPage};

    #[test]
    fn offset_skips_previous_pages() {
        let limit = SelectLimit::new(10);
        assert_eq!(SelectPage::new(1).offset(&limit), 0);
        assert_eq!(SelectPage::new(3).offset(&limit), 20);
        assert_eq!(SelectPage::new(0).offset(&limit), 0);
    }

    #[test]
    fn negative_limit_selects_nothing() {
        let limit = SelectLimit::new(-1);
        assert_eq!(limit.rows(), 0);
        assert_eq!(SelectPage::new(4).offset(&limit), 0);
        assert_eq!(SelectLimit::new(25).rows(), 25);
    }
}
