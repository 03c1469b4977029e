//! Properties of the QR renderer across the fixed color choices.

use qrstudio_business::palette::{BLACK, TRANSPARENT, WHITE};
use qrstudio_business::{BACKGROUND_COLORS, CODE_COLORS, generate_qr_code};

mod two_tone_tests {
    use super::*;

    #[test]
    fn test_every_color_pair_is_two_tone() {
        for code in &CODE_COLORS {
            for background in &BACKGROUND_COLORS {
                let grid = generate_qr_code("two tone", 128, code.color, background.color)
                    .expect("text should encode");

                let mut colors = grid.distinct_colors();
                colors.sort_by_key(|c| c.0);
                let mut expected = vec![code.color, background.color];
                expected.sort_by_key(|c| c.0);

                assert_eq!(
                    colors, expected,
                    "{} on {} should use exactly the two selected colors",
                    code.label, background.label
                );
            }
        }
    }

    #[test]
    fn test_quiet_zone_uses_background() {
        let grid = generate_qr_code("HELLO", 512, BLACK.color, WHITE.color)
            .expect("HELLO should encode");
        assert_eq!(grid.get(0, 0), Some(WHITE.color));
        assert_eq!(grid.get(511, 0), Some(WHITE.color));
    }

    #[test]
    fn test_transparent_background_keeps_alpha() {
        let grid = generate_qr_code("HELLO", 512, BLACK.color, TRANSPARENT.color)
            .expect("HELLO should encode");
        assert_eq!(grid.get(0, 0).map(|p| p.0[3]), Some(0));
    }
}

mod dimension_tests {
    use super::*;

    #[test]
    fn test_hello_black_on_white_is_512_square() {
        let grid = generate_qr_code("HELLO", 512, BLACK.color, WHITE.color)
            .expect("HELLO should encode");
        assert_eq!(grid.width(), 512);
        assert_eq!(grid.height(), 512);
    }

    #[test]
    fn test_requested_size_is_kept_for_long_text() {
        let text = "https://example.com/".repeat(10);
        let grid =
            generate_qr_code(&text, 512, BLACK.color, WHITE.color).expect("URL should encode");
        assert_eq!((grid.width(), grid.height()), (512, 512));
    }

    #[test]
    fn test_tiny_size_grows_to_symbol() {
        let grid =
            generate_qr_code("HELLO", 1, BLACK.color, WHITE.color).expect("HELLO should encode");
        assert_eq!((grid.width(), grid.height()), (29, 29));
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_image() {
        for _ in 0..3 {
            assert!(
                generate_qr_code("", 512, BLACK.color, WHITE.color).is_none(),
                "empty text should consistently produce no image"
            );
        }
    }

    #[test]
    fn test_oversized_text_has_no_image() {
        let text = "z".repeat(5000);
        assert!(generate_qr_code(&text, 512, BLACK.color, WHITE.color).is_none());
    }

    #[test]
    fn test_zero_size_has_no_image() {
        assert!(generate_qr_code("HELLO", 0, BLACK.color, WHITE.color).is_none());
    }

    #[test]
    fn test_huge_size_has_no_image() {
        assert!(generate_qr_code("HELLO", 200_000, BLACK.color, WHITE.color).is_none());
    }
}

#[test]
fn test_render_is_idempotent() {
    let a = generate_qr_code("idempotent", 300, BLACK.color, WHITE.color);
    let b = generate_qr_code("idempotent", 300, BLACK.color, WHITE.color);
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_unicode_text_encodes() {
    let grid = generate_qr_code("二维码 ✓", 256, BLACK.color, WHITE.color);
    assert!(grid.is_some(), "UTF-8 text should encode in byte mode");
}
