mod palette;
pub mod range_grid;

pub(crate) use palette::RangeCellPalette;
