use crate::types::tables::columns::YEAR;
use polars::prelude::{col, lit, LazyFrame};

pub trait ClimateFrameFilterExt {
    /// Keeps rows whose `Year` lies in `start_year..=end_year`.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Errors (for example a missing
    /// `Year` column) surface on `collect`.
    fn filter_years(self, start_year: i32, end_year: i32) -> LazyFrame;

    /// Keeps rows whose `Year` is `year` or later.
    fn since_year(self, year: i32) -> LazyFrame;
}

impl ClimateFrameFilterExt for LazyFrame {
    fn filter_years(self, start_year: i32, end_year: i32) -> LazyFrame {
        self.filter(
            col(YEAR)
                .gt_eq(lit(start_year))
                .and(col(YEAR).lt_eq(lit(end_year))),
        )
    }

    fn since_year(self, year: i32) -> LazyFrame {
        self.filter(col(YEAR).gt_eq(lit(year)))
    }
}
