//! Greedy path ordering and path length

use crate::geodesic::distance;
use crate::models::point::reindex;
use crate::models::Point;

/// Reorder points into a nearest-neighbour visiting order.
///
/// Starts from the first input point and repeatedly steps to the closest
/// unvisited point. Equal distances resolve to the point that comes first in
/// input order. Sequences of two or fewer points keep their order. In every
/// case `sequence_index` is rewritten to `0..n`.
///
/// This is a greedy approximation and gives no optimality bound. Runs in O(n²).
pub fn reorder(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        let mut ordered = points.to_vec();
        reindex(&mut ordered);
        return ordered;
    }

    let mut visited = vec![false; points.len()];
    let mut ordered = Vec::with_capacity(points.len());

    let mut current = 0;
    visited[current] = true;
    ordered.push(points[current].at_index(0));

    while ordered.len() < points.len() {
        let Some(next) = nearest_unvisited(points, &visited, &points[current]) else {
            break;
        };

        visited[next] = true;
        ordered.push(points[next].at_index(ordered.len()));
        current = next;
    }

    tracing::debug!(
        points = ordered.len(),
        before_km = total_length(points),
        after_km = total_length(&ordered),
        "Reordered path"
    );

    ordered
}

/// Index of the closest unvisited point; the first one scanned wins ties
fn nearest_unvisited(points: &[Point], visited: &[bool], from: &Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in points.iter().enumerate() {
        if visited[index] {
            continue;
        }

        let d = distance(from, candidate);
        match best {
            Some((_, best_distance)) if d >= best_distance => {}
            _ => best = Some((index, d)),
        }
    }

    best.map(|(index, _)| index)
}

/// Sum of distances between consecutive points, in the given order
pub fn total_length(points: &[Point]) -> f64 {
    points.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().enumerate().map(|(i, &(lat, lon))| Point::new(lat, lon, i)).collect()
    }

    fn coords(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(Point::coordinates).collect()
    }

    #[test]
    fn test_reorder_empty() {
        assert!(reorder(&[]).is_empty());
    }

    #[test]
    fn test_reorder_small_inputs_keep_order() {
        let single = vec![Point::new(5.0, 5.0, 3)];
        assert_eq!(reorder(&single), vec![Point::new(5.0, 5.0, 0)]);

        let pair = vec![Point::new(0.0, 3.0, 4), Point::new(0.0, 0.0, 9)];
        assert_eq!(reorder(&pair), vec![Point::new(0.0, 3.0, 0), Point::new(0.0, 0.0, 1)]);
    }

    #[test]
    fn test_reorder_visits_nearest_first() {
        let input = points(&[(0.0, 0.0), (0.0, 1.0), (0.0, 3.0), (0.0, 0.5)]);
        let ordered = reorder(&input);

        assert_eq!(coords(&ordered), vec![(0.0, 0.0), (0.0, 0.5), (0.0, 1.0), (0.0, 3.0)]);

        let indices: Vec<usize> = ordered.iter().map(|p| p.sequence_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        let expected = distance(&input[0], &input[3])
            + distance(&input[3], &input[1])
            + distance(&input[1], &input[2]);
        assert!((total_length(&ordered) - expected).abs() < 1e-9);

        let unoptimized = distance(&input[0], &input[1])
            + distance(&input[1], &input[2])
            + distance(&input[2], &input[3]);
        assert!((total_length(&input) - unoptimized).abs() < 1e-9);
        assert!(total_length(&ordered) < total_length(&input));
    }

    #[test]
    fn test_reorder_tie_goes_to_earlier_unvisited_point() {
        // (0,1) and (0,-1) are exactly equidistant from (0,0)
        let input = points(&[(0.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);
        let ordered = reorder(&input);
        assert_eq!(coords(&ordered), vec![(0.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);

        let input = points(&[(0.0, 0.0), (0.0, -1.0), (0.0, 1.0)]);
        let ordered = reorder(&input);
        assert_eq!(coords(&ordered), vec![(0.0, 0.0), (0.0, -1.0), (0.0, 1.0)]);
    }

    #[test]
    fn test_reorder_tie_ignores_earlier_visited_points() {
        // After (0,0) -> (0,0.5), the remaining (0,-2) and (0,3) are both 2.5 degrees away
        let input = points(&[(0.0, 0.0), (0.0, 3.0), (0.0, -2.0), (0.0, 0.5)]);
        let ordered = reorder(&input);

        assert_eq!(coords(&ordered), vec![(0.0, 0.0), (0.0, 0.5), (0.0, 3.0), (0.0, -2.0)]);
    }

    #[test]
    fn test_reorder_with_antipodal_point_still_takes_nearest() {
        // (-0.08, -180) is the exact antipode of the starting point
        let input = points(&[(0.08, 0.0), (0.09, 0.01), (-0.08, -180.0), (0.1, 0.02)]);
        let ordered = reorder(&input);

        assert_eq!(
            coords(&ordered),
            vec![(0.08, 0.0), (0.09, 0.01), (0.1, 0.02), (-0.08, -180.0)]
        );
        assert!(total_length(&ordered).is_finite());
    }

    #[test]
    fn test_reorder_starts_from_first_point() {
        let input = points(&[(0.0, 10.0), (0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        let ordered = reorder(&input);

        assert_eq!(ordered[0].coordinates(), (0.0, 10.0));
        assert_eq!(coords(&ordered), vec![(0.0, 10.0), (0.0, 2.0), (0.0, 1.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_reorder_duplicate_points() {
        let input = points(&[(1.0, 1.0), (2.0, 2.0), (1.0, 1.0), (2.0, 2.0)]);
        let ordered = reorder(&input);

        assert_eq!(coords(&ordered), vec![(1.0, 1.0), (1.0, 1.0), (2.0, 2.0), (2.0, 2.0)]);
        assert!((total_length(&ordered) - distance(&input[0], &input[1])).abs() < 1e-9);
    }

    #[test]
    fn test_reorder_is_stable_on_its_own_output() {
        let input = points(&[(0.0, 0.0), (3.0, 1.0), (0.7, 2.0), (5.0, -1.0), (1.1, 0.2)]);
        let once = reorder(&input);
        let twice = reorder(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_length_degenerate() {
        assert_eq!(total_length(&[]), 0.0);
        assert_eq!(total_length(&[Point::new(45.0, 45.0, 0)]), 0.0);
    }

    #[test]
    fn test_total_length_does_not_reorder() {
        let input = points(&[(0.0, 0.0), (0.0, 3.0), (0.0, 1.0)]);
        let expected = distance(&input[0], &input[1]) + distance(&input[1], &input[2]);

        assert_eq!(total_length(&input), expected);
    }

    fn arb_points() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 0..40)
            .prop_map(|coords| points(&coords))
    }

    proptest! {
        #[test]
        fn prop_reorder_is_a_permutation(input in arb_points()) {
            let ordered = reorder(&input);
            prop_assert_eq!(ordered.len(), input.len());

            let mut before = coords(&input);
            let mut after = coords(&ordered);
            before.sort_by(|a, b| a.partial_cmp(b).unwrap());
            after.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_reorder_indices_are_gapless(input in arb_points()) {
            let ordered = reorder(&input);
            for (position, point) in ordered.iter().enumerate() {
                prop_assert_eq!(point.sequence_index, position);
            }
        }

        #[test]
        fn prop_reorder_keeps_first_point(input in arb_points()) {
            let ordered = reorder(&input);
            if let Some(first) = input.first() {
                prop_assert_eq!(ordered[0].coordinates(), first.coordinates());
            }
        }

        #[test]
        fn prop_each_step_is_a_nearest_choice(input in arb_points()) {
            let ordered = reorder(&input);
            if ordered.len() > 2 {
                for step in 1..ordered.len() {
                    let taken = distance(&ordered[step - 1], &ordered[step]);
                    for later in &ordered[step..] {
                        prop_assert!(taken <= distance(&ordered[step - 1], later));
                    }
                }
            }
        }
    }
}
