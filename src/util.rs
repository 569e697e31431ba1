use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`, shrunk to
/// fit if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [display] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [display] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return the side length, in pixels, of the largest square raster that can
/// be shown in `area` at two pixels per character cell
pub(crate) fn board_pixels(area: Rect) -> u16 {
    area.width.min(area.height.saturating_mul(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(40, 20), Rect::new(20, 2, 40, 20))]
    #[case(Rect::new(5, 3, 10, 10), Size::new(4, 4), Rect::new(8, 6, 4, 4))]
    #[case(Rect::new(0, 0, 10, 4), Size::new(20, 10), Rect::new(0, 0, 10, 4))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(10, 10), Rect::new(0, 0, 10, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 21), 42)]
    #[case(Rect::new(0, 0, 30, 21), 30)]
    #[case(Rect::new(0, 0, 41, 20), 40)]
    #[case(Rect::ZERO, 0)]
    fn test_board_pixels(#[case] area: Rect, #[case] side: u16) {
        assert_eq!(board_pixels(area), side);
    }
}
