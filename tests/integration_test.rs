use image::{Rgba, RgbaImage};

use bingo_card::render::labels::fit_label;
use bingo_card::render::resources::{find_system_font, load_font};
use bingo_card::{CardRenderer, FontChoice, RenderError, Settings};

/// Renderer with a discovered system font and a synthetic logo, or None when
/// the machine has no usable TTF (the render tests skip in that case).
fn test_renderer() -> Option<CardRenderer> {
    let font_path = find_system_font()?;
    let font = load_font(&font_path).ok()?;
    let logo = RgbaImage::from_pixel(80, 40, Rgba([0, 200, 0, 255]));
    Some(CardRenderer::from_parts(Settings::default(), font, logo))
}

fn fillers(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("label {i}")).collect()
}

#[test]
fn card_is_720x720_png_with_grid_lines() {
    let Some(renderer) = test_renderer() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let settings = renderer.settings().clone();

    let png = renderer.render("FREE", &fillers(24)).expect("render failed");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

    let card = image::load_from_memory(&png).expect("decode failed").to_rgba8();
    assert_eq!(card.width(), 720);
    assert_eq!(card.height(), 720);

    // 4 interior vertical and 4 horizontal rules at multiples of 144
    for k in 1..5u32 {
        assert_eq!(*card.get_pixel(k * 144, 5), settings.line_color);
        assert_eq!(*card.get_pixel(5, k * 144), settings.line_color);
    }

    // background survives away from lines and text
    assert_eq!(*card.get_pixel(5, 5), settings.background_color);
}

#[test]
fn center_cell_shows_center_label() {
    let Some(renderer) = test_renderer() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let settings = renderer.settings().clone();

    // Empty fillers: the only cell text on the card is the center label
    let blank = vec![String::new(); 24];
    let png = renderer.render("FREE", &blank).expect("render failed");
    let card = image::load_from_memory(&png).expect("decode failed").to_rgba8();

    let cell_text_pixels = |card: &RgbaImage, row: u32, col: u32| -> usize {
        let mut count = 0;
        // interior window well clear of the 5px rules
        for y in (row * 144 + 20)..(row * 144 + 124) {
            for x in (col * 144 + 20)..(col * 144 + 124) {
                if *card.get_pixel(x, y) != settings.background_color {
                    count += 1;
                }
            }
        }
        count
    };

    assert!(cell_text_pixels(&card, 2, 2) > 0, "center cell is empty");
    assert_eq!(cell_text_pixels(&card, 0, 0), 0);
    assert_eq!(cell_text_pixels(&card, 1, 3), 0);
}

#[test]
fn short_filler_list_fails_before_producing_an_image() {
    let Some(renderer) = test_renderer() else {
        eprintln!("no system font found, skipping");
        return;
    };

    let err = renderer.render("FREE", &fillers(10)).unwrap_err();
    match err {
        RenderError::InsufficientLabels { needed, got, .. } => {
            assert_eq!(needed, 24);
            assert_eq!(got, 10);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn long_unbroken_label_falls_back_to_small_font() {
    let Some(font_path) = find_system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let font = load_font(&font_path).expect("font load failed");
    let settings = Settings::default();

    let long_label = "a".repeat(40);
    let (choice, measured) = fit_label(&font, &settings, 144, &long_label);
    assert_eq!(choice, FontChoice::Small);
    // still wider than the cell: drawn clipped, not an error
    assert!(measured.0 > 0);

    let (choice, measured) = fit_label(&font, &settings, 144, "hi");
    assert_eq!(choice, FontChoice::Primary);
    assert!(measured.0 <= 144 - settings.nudge);
}

#[test]
fn one_renderer_produces_many_cards() {
    let Some(renderer) = test_renderer() else {
        eprintln!("no system font found, skipping");
        return;
    };

    let first = renderer.render("FREE", &fillers(24)).expect("render failed");
    let second = renderer.render("BINGO", &fillers(30)).expect("render failed");
    assert_eq!(image::load_from_memory(&first).unwrap().width(), 720);
    assert_eq!(image::load_from_memory(&second).unwrap().width(), 720);
}
