mod geometry;

pub use self::geometry::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_rect_scales_to_physical() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let p = r.to_physical(1.5);
        assert_eq!(p, PixelRect::new(15, 30, 1200, 900));
    }

    #[test]
    fn physical_rect_rounds_fractional_scale() {
        let r = Rect {
            x: 0.5,
            y: 0.0,
            width: 333.3,
            height: 100.0,
        };
        let p = r.to_physical(1.25);
        assert_eq!(p.x, 1);
        assert_eq!(p.width, 417);
        assert_eq!(p.height, 125);
    }

    #[test]
    fn empty_when_any_side_is_zero() {
        assert!(PixelRect::new(0, 0, 0, 10).is_empty());
        assert!(PixelRect::new(0, 0, 10, 0).is_empty());
        assert!(PixelRect::new(0, 0, -4, 10).is_empty());
        assert!(!PixelRect::new(-10, -10, 1, 1).is_empty());
    }

    #[test]
    fn filling_a_size_starts_at_origin() {
        let p = PixelRect::filling(640, 480);
        assert_eq!(p, PixelRect::new(0, 0, 640, 480));
        assert_eq!(p.size(), (640, 480));
    }

    #[test]
    fn offset_translates_origin_only() {
        let p = PixelRect::new(5, 5, 100, 50).offset(10, -5);
        assert_eq!(p, PixelRect::new(15, 0, 100, 50));
    }

    #[test]
    fn rect_serialization() {
        let r = PixelRect::new(1, 2, 3, 4);
        let json = serde_json::to_string(&r).unwrap();
        let back: PixelRect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
