//! 软件渲染测试

use crate::config::{Palette, WidgetConfig};
use crate::widget::{Layout, StickyTimer};
use crate::audio::AlertPlayer;
use crate::{Canvas, Color, Rect, TextRenderer};

const FONT: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

fn has_ink(canvas: &Canvas, area: &Rect) -> bool {
    let mut found = false;
    for y in area.y as u32..area.bottom() as u32 {
        for x in area.x as u32..area.right() as u32 {
            found |= canvas.get_pixel(x, y).a > 0;
        }
    }
    found
}

/// 圆角外透明，内部实心
#[test]
fn test_round_rect_corners_are_transparent() {
    let mut canvas = Canvas::new(20, 20);
    let red = Color::rgb(255, 0, 0);
    canvas.fill_round_rect(&Rect::new(0.0, 0.0, 20.0, 20.0), 5.0, red);

    assert_eq!(canvas.get_pixel(0, 0), Color::TRANSPARENT);
    assert_eq!(canvas.get_pixel(19, 19), Color::TRANSPARENT);
    assert_eq!(canvas.get_pixel(10, 10), red);
    assert_eq!(canvas.get_pixel(10, 0), red);
}

#[test]
fn test_set_pixel_blends_and_clips() {
    let mut canvas = Canvas::new(4, 4);
    canvas.clear(Color::WHITE);
    canvas.set_pixel(1, 1, Color::BLACK.with_alpha(0));
    assert_eq!(canvas.get_pixel(1, 1), Color::WHITE);

    canvas.set_pixel(-1, 2, Color::BLACK);
    canvas.set_pixel(4, 0, Color::BLACK);
    assert!(canvas.pixels().iter().all(|p| *p == Color::WHITE));
}

/// 输出到较大的缓冲区时只覆盖画布区域
#[test]
fn test_write_argb_into_larger_buffer() {
    let mut canvas = Canvas::new(2, 2);
    canvas.clear(Color::from_hex(0x123456));

    let mut buffer = vec![0u32; 9];
    canvas.write_argb(&mut buffer, 3, 3);

    assert_eq!(buffer[0], 0xFF123456);
    assert_eq!(buffer[4], 0xFF123456);
    assert_eq!(buffer[2], 0);
    assert_eq!(buffer[6], 0);
}

#[test]
fn test_text_renderer_draws_glyphs() {
    let text = TextRenderer::from_bytes(FONT).expect("bundled font should parse");
    let mut canvas = Canvas::new(200, 60);
    let area = Rect::new(0.0, 0.0, 200.0, 60.0);

    text.draw_text_centered(&mut canvas, "25:00", &area, 32.0, Color::BLACK);
    assert!(has_ink(&canvas, &area));

    let width = text.measure_text("25:00", 32.0);
    assert!(width > 0.0 && width < 200.0);
    assert_eq!(text.measure_prefix("25:00", 0, 32.0), 0.0);
    assert_eq!(text.measure_prefix("25:00", 5, 32.0), width);
}

#[test]
fn test_invalid_font_data_is_rejected() {
    assert!(TextRenderer::from_bytes(&[0u8; 16]).is_err());
}

/// 没有字体时仍绘制背景和按钮
#[test]
fn test_widget_render_without_font() {
    let config = WidgetConfig::default();
    let widget = StickyTimer::new(&config, Box::new(AlertPlayer::silent()));
    let layout = Layout::compute(260.0, 200.0);
    let mut canvas = Canvas::new(260, 200);

    widget.render(&mut canvas, None, 1.0);

    assert_eq!(canvas.get_pixel(0, 0), Color::TRANSPARENT);
    assert_eq!(canvas.get_pixel(5, 100), Palette::STICKY.background);
    let start = layout.start.center();
    assert_eq!(canvas.get_pixel(start.x as u32, start.y as u32), Palette::STICKY.button);
}

/// 高 DPI 下按缩放系数绘制
#[test]
fn test_widget_render_scaled_with_text() {
    let config = WidgetConfig::default();
    let widget = StickyTimer::new(&config, Box::new(AlertPlayer::silent()));
    let text = TextRenderer::from_bytes(FONT).expect("bundled font should parse");
    let layout = Layout::compute(260.0, 200.0);
    let mut canvas = Canvas::new(520, 400);

    widget.render(&mut canvas, Some(&text), 2.0);

    assert_eq!(canvas.get_pixel(10, 200), Palette::STICKY.background);
    let field = layout.field.scaled(2.0);
    let changed = (field.y as u32..field.bottom() as u32)
        .flat_map(|y| (field.x as u32..field.right() as u32).map(move |x| (x, y)))
        .any(|(x, y)| canvas.get_pixel(x, y) != Palette::STICKY.background);
    assert!(changed, "time text should be drawn inside the field");
}

/// 半透明颜色叠加到不透明和透明底色上
#[test]
fn test_blend_over_opaque_and_transparent() {
    let half_red = Color::rgb(255, 0, 0).with_alpha(128);

    assert_eq!(half_red.blend(&Color::WHITE), Color::rgb(255, 127, 127));
    assert_eq!(half_red.blend(&Color::TRANSPARENT), half_red);
    assert_eq!(Color::BLACK.blend(&Color::TRANSPARENT), Color::BLACK);
    assert_eq!(Color::TRANSPARENT.blend(&Color::WHITE), Color::WHITE);

    let over_half = Color::WHITE.with_alpha(128).blend(&Color::BLACK.with_alpha(128));
    assert_eq!(over_half.a, 128 + (127u32 * 128 / 255) as u8);
    assert!(over_half.r > 128);
}

#[test]
fn test_color_packing() {
    assert_eq!(Color::from_hex(0xFFA500), Color::rgb(0xFF, 0xA5, 0x00));
    assert_eq!(Color::new(1, 2, 3, 4).to_argb(), 0x04010203);
    assert_eq!(Color::rgb(100, 200, 50).darken(0.5), Color::rgb(50, 100, 25));
}
