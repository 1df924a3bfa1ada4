use super::*;
use crate::surface::recording::{Op, RecordingSurface};
use crate::Point;

#[test]
fn default_style_matches_the_board_pen() {
    let style = StrokeStyle::default();
    assert_eq!(style.color, "#454545");
    assert_eq!(style.width, 12.0);
    assert_eq!(style.dot_radius, 2.0);
}

#[test]
fn segment_runs_from_previous_to_current() {
    let mut surface = RecordingSurface::new(550.0, 450.0);
    let draw = Draw {
        current: Point::new(20.0, 10.0),
        previous: Some(Point::new(10.0, 10.0)),
    };
    render_stroke(&draw, &mut surface, &StrokeStyle::default());
    assert_eq!(
        surface.ops,
        vec![
            Op::Segment {
                from: Point::new(10.0, 10.0),
                to: Point::new(20.0, 10.0),
                color: "#454545".to_string(),
                width: 12.0,
            },
            Op::Dot {
                center: Point::new(10.0, 10.0),
                radius: 2.0,
                color: "#454545".to_string(),
            },
        ]
    );
}

#[test]
fn first_sample_is_only_a_dot() {
    let mut surface = RecordingSurface::new(550.0, 450.0);
    let draw = Draw {
        current: Point::new(42.0, 7.0),
        previous: None,
    };
    render_stroke(&draw, &mut surface, &StrokeStyle::default());
    assert!(surface.segments().is_empty());
    assert_eq!(surface.dots(), vec![Point::new(42.0, 7.0)]);
}

#[test]
fn custom_style_is_used() {
    let mut surface = RecordingSurface::new(100.0, 100.0);
    let style = StrokeStyle {
        color: "#ff0000".to_string(),
        width: 3.0,
        dot_radius: 0.5,
    };
    let draw = Draw {
        current: Point::new(5.0, 5.0),
        previous: Some(Point::new(1.0, 1.0)),
    };
    render_stroke(&draw, &mut surface, &style);
    assert!(surface.ops.contains(&Op::Dot {
        center: Point::new(1.0, 1.0),
        radius: 0.5,
        color: "#ff0000".to_string(),
    }));
}

#[test]
fn style_deserializes_with_defaults() {
    let style: StrokeStyle = serde_json::from_str(r#"{"width": 4.0}"#).unwrap();
    assert_eq!(style.width, 4.0);
    assert_eq!(style.color, "#454545");
}
