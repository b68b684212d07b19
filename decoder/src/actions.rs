//! Playback actions derived from decoded polylines.

use crate::types::{Polyline, StitchAction};

/// Flattens polylines into a jump/draw sequence.
///
/// Each polyline contributes one [`StitchAction::Jump`] to its first point
/// followed by one [`StitchAction::Draw`] per remaining point, so the
/// result holds `points - polylines` draws and `polylines` jumps.
#[must_use]
pub fn build_actions(polylines: &[Polyline]) -> Vec<StitchAction> {
    let total = polylines.iter().map(|polyline| polyline.points.len()).sum();
    let mut actions = Vec::with_capacity(total);
    for polyline in polylines {
        let Some((first, rest)) = polyline.points.split_first() else {
            continue;
        };
        actions.push(StitchAction::Jump { point: *first });
        actions.extend(rest.iter().map(|point| StitchAction::Draw {
            point: *point,
            color: polyline.color,
        }));
    }
    actions
}

/// Index of the first jump strictly after `index`, i.e. the start of the
/// next run. `None` if the playback is already in its last run.
#[must_use]
pub fn next_jump_after(actions: &[StitchAction], index: usize) -> Option<usize> {
    let start = index.checked_add(1)?;
    actions
        .get(start..)?
        .iter()
        .position(|action| action.is_jump())
        .map(|offset| start + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorId, Point};

    fn polyline(color: u8, points: &[(i64, i64)]) -> Polyline {
        Polyline {
            color: ColorId::new(color),
            points: points.iter().copied().map(Point::from).collect(),
        }
    }

    #[test]
    fn empty_input_has_no_actions() {
        assert!(build_actions(&[]).is_empty());
    }

    #[test]
    fn one_jump_per_polyline() {
        let polylines = vec![
            polyline(2, &[(0, 0), (5, 0)]),
            polyline(3, &[(10, 0), (15, 0), (15, 5)]),
        ];
        let actions = build_actions(&polylines);
        assert_eq!(
            actions,
            vec![
                StitchAction::Jump {
                    point: Point::new(0, 0)
                },
                StitchAction::Draw {
                    point: Point::new(5, 0),
                    color: ColorId::new(2)
                },
                StitchAction::Jump {
                    point: Point::new(10, 0)
                },
                StitchAction::Draw {
                    point: Point::new(15, 0),
                    color: ColorId::new(3)
                },
                StitchAction::Draw {
                    point: Point::new(15, 5),
                    color: ColorId::new(3)
                },
            ]
        );
    }

    #[test]
    fn next_jump_skips_to_following_run() {
        let polylines = vec![
            polyline(2, &[(0, 0), (1, 0), (2, 0)]),
            polyline(2, &[(5, 5), (6, 5)]),
        ];
        let actions = build_actions(&polylines);
        assert_eq!(next_jump_after(&actions, 0), Some(3));
        assert_eq!(next_jump_after(&actions, 2), Some(3));
        assert_eq!(next_jump_after(&actions, 3), None);
    }

    #[test]
    fn next_jump_out_of_range() {
        assert_eq!(next_jump_after(&[], 0), None);
        let actions = build_actions(&[polyline(1, &[(0, 0), (1, 1)])]);
        assert_eq!(next_jump_after(&actions, 10), None);
        assert_eq!(next_jump_after(&actions, usize::MAX), None);
    }
}
