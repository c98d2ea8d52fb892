use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// Name of the subdirectory of the user's config & data directories in which
/// the program keeps its files
const APP_DIR: &str = "gridsnake";

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered within `area`, shrunk to fit if
/// necessary
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Return the default path at which to store the best score
pub(crate) fn best_score_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(APP_DIR).join("best-score.json"))
}

/// Return the default path of the configuration file
pub(crate) fn config_file_path() -> Option<PathBuf> {
    dirs::config_local_dir().map(|p| p.join(APP_DIR).join("config.toml"))
}

pub(crate) trait EnumExt: Enum {
    /// Return the first variant
    fn min() -> Self;

    /// Return the variant after this one, or `None` if this is the last
    fn next(self) -> Option<Self>;
}

impl<T: Enum> EnumExt for T {
    fn min() -> T {
        T::from_usize(0)
    }

    fn next(self) -> Option<T> {
        let i = self.into_usize() + 1;
        (i < T::LENGTH).then(|| T::from_usize(i))
    }
}
