use ratatui::layout::Rect;

/// Rect of at most `width` x `height` centred inside `area`.
pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_and_clamps() {
        let area = Rect::new(2, 1, 80, 24);
        assert_eq!(popup_rect(area, 40, 10), Rect::new(22, 8, 40, 10));
        assert_eq!(popup_rect(area, 200, 50), area);
    }
}
