use decoder::{decode_bytes, ColorOrder, Point, StitchAction};
use format::{Record, RecordKind, HEADER_SIZE};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = [u8; 3]> {
    // Bias the command byte toward the interesting flag combinations.
    let command = prop_oneof![
        3 => prop::sample::select(vec![0x00u8, 0x20, 0x40, 0x60, 0x80, 0xE0]),
        1 => prop::sample::select(vec![0x01u8, 0x21, 0x41, 0x61, 0x81]),
        1 => prop::sample::select(vec![0x08u8, 0x09, 0x88, 0xF8]),
        1 => any::<u8>(),
    ];
    (command, any::<u8>(), any::<u8>()).prop_map(|(c, dy, dx)| [c, dy, dx])
}

fn order_strategy() -> impl Strategy<Value = ColorOrder> {
    prop::collection::vec(0u8..12, 1..8)
        .prop_map(|indices| ColorOrder::from_indices(&indices).unwrap())
}

fn file(records: &[[u8; 3]], trailing: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_SIZE];
    for record in records {
        bytes.extend_from_slice(record);
    }
    bytes.extend_from_slice(trailing);
    bytes
}

proptest! {
    #[test]
    fn prop_polylines_have_two_points(
        records in prop::collection::vec(record_strategy(), 0..256),
        order in order_strategy(),
    ) {
        let decoded = decode_bytes(&file(&records, &[]), &order).unwrap();
        for polyline in &decoded.polylines {
            prop_assert!(polyline.points.len() >= 2);
        }
    }

    #[test]
    fn prop_action_counts(
        records in prop::collection::vec(record_strategy(), 0..256),
        order in order_strategy(),
    ) {
        let decoded = decode_bytes(&file(&records, &[]), &order).unwrap();
        let jumps = decoded.actions.iter().filter(|a| a.is_jump()).count();
        let draws = decoded.actions.len() - jumps;
        prop_assert_eq!(jumps, decoded.polylines.len());
        prop_assert_eq!(draws, decoded.point_count() - decoded.polylines.len());
    }

    #[test]
    fn prop_actions_rebuild_polylines(
        records in prop::collection::vec(record_strategy(), 0..256),
        order in order_strategy(),
    ) {
        let decoded = decode_bytes(&file(&records, &[]), &order).unwrap();
        let mut runs: Vec<Vec<Point>> = Vec::new();
        for action in &decoded.actions {
            match *action {
                StitchAction::Jump { point } => runs.push(vec![point]),
                StitchAction::Draw { point, .. } => runs.last_mut().unwrap().push(point),
            }
        }
        let expected: Vec<Vec<Point>> =
            decoded.polylines.iter().map(|p| p.points.clone()).collect();
        prop_assert_eq!(runs, expected);

        let mut polyline = 0;
        for (index, action) in decoded.actions.iter().enumerate() {
            if action.is_jump() && index > 0 {
                polyline += 1;
            }
            if let StitchAction::Draw { color, .. } = action {
                prop_assert_eq!(*color, decoded.polylines[polyline].color);
            }
        }
    }

    #[test]
    fn prop_color_follows_change_count(
        records in prop::collection::vec(record_strategy(), 0..256),
        order in order_strategy(),
    ) {
        let decoded = decode_bytes(&file(&records, &[]), &order).unwrap();
        let kinds: Vec<RecordKind> =
            records.iter().map(|bytes| Record::from_bytes(*bytes).kind()).collect();
        let changes = kinds.iter().filter(|k| **k == RecordKind::ColorChange).count() as u64;
        prop_assert_eq!(decoded.stats.color_changes, changes);

        // Replay positions to find which change count each polyline started under.
        let mut position = Point::ORIGIN;
        let mut seen = 0u64;
        let mut starts = vec![(Point::ORIGIN, 0u64)];
        for (bytes, kind) in records.iter().zip(&kinds) {
            let (dx, dy) = Record::from_bytes(*bytes).delta();
            position = position.offset(dx, dy);
            match kind {
                RecordKind::ColorChange => {
                    seen += 1;
                    starts.push((position, seen));
                }
                RecordKind::Jump => starts.push((position, seen)),
                RecordKind::Stitch => {}
            }
        }
        for polyline in &decoded.polylines {
            let start = polyline.points[0];
            prop_assert!(starts
                .iter()
                .any(|(point, count)| *point == start && order.color_after(*count) == polyline.color));
        }
    }

    #[test]
    fn prop_points_are_cumulative_deltas(
        records in prop::collection::vec(record_strategy(), 1..256),
    ) {
        let decoded = decode_bytes(&file(&records, &[]), &ColorOrder::default()).unwrap();
        let mut positions = vec![Point::ORIGIN];
        for bytes in &records {
            let (dx, dy) = Record::from_bytes(*bytes).delta();
            let last = *positions.last().unwrap();
            positions.push(last.offset(dx, dy));
        }
        // Every polyline is a contiguous window of the position trace.
        for polyline in &decoded.polylines {
            prop_assert!(positions
                .windows(polyline.points.len())
                .any(|window| window == polyline.points.as_slice()));
        }
        let bounds = decoded.stats.bounds.unwrap();
        for point in &positions {
            prop_assert!(point.x >= bounds.min_x && point.x <= bounds.max_x);
            prop_assert!(point.y >= bounds.min_y && point.y <= bounds.max_y);
        }
    }

    #[test]
    fn prop_trailing_bytes_do_not_change_output(
        records in prop::collection::vec(record_strategy(), 0..128),
        trailing in prop::collection::vec(any::<u8>(), 0..3),
    ) {
        let order = ColorOrder::default();
        let clean = decode_bytes(&file(&records, &[]), &order).unwrap();
        let ragged = decode_bytes(&file(&records, &trailing), &order).unwrap();
        prop_assert_eq!(&clean.polylines, &ragged.polylines);
        prop_assert_eq!(&clean.actions, &ragged.actions);
        prop_assert_eq!(ragged.stats.trailing_bytes, trailing.len());
    }

    #[test]
    fn prop_decode_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let order = ColorOrder::default();
        let first = decode_bytes(&data, &order).unwrap();
        let second = decode_bytes(&data, &order).unwrap();
        prop_assert_eq!(first, second);
    }
}
