use crate::figure::{Face, Figure};
use crate::geometry::{random_angles, rotate, Angles, Line};
use crate::math::{Point, Real, Vector};
use crate::utils::{self, mix_seed};
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;

/// A cut position is accepted when the smaller side holds at least
/// `1 / BALANCE_RATIO` of the larger one.
pub const BALANCE_RATIO: Real = 1.1;

/// A candidate separating line of a figure.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cut {
    /// The orientation the figure is rotated by before being cut.
    pub angles: Angles,
    /// The separating line, expressed in the rotated frame.
    pub line: Line,
    /// The number of faces straddling the sweep position of this cut.
    pub crossed: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EventKind {
    Open,
    Close,
}

#[derive(Copy, Clone, Debug)]
struct Event {
    x: Real,
    vertex: u32,
    kind: EventKind,
}

/// One opening event at the leftmost vertex of each face, one closing event at
/// its rightmost vertex, sorted by `x`.
fn sweep_events(xs: &[Real], faces: &[Face]) -> Vec<Event> {
    let mut events = Vec::with_capacity(faces.len() * 2);

    for face in faces {
        let mut min_vid = face[0];
        let mut max_vid = face[0];

        for vid in &face[1..] {
            let x = xs[*vid as usize];
            if x < xs[min_vid as usize] {
                min_vid = *vid;
            }
            if x > xs[max_vid as usize] {
                max_vid = *vid;
            }
        }

        events.push(Event {
            x: xs[min_vid as usize],
            vertex: min_vid,
            kind: EventKind::Open,
        });
        events.push(Event {
            x: xs[max_vid as usize],
            vertex: max_vid,
            kind: EventKind::Close,
        });
    }

    // Stable: the opening event of a flat face stays before its closing one.
    events.sort_by_key(|e| OrderedFloat(e.x));
    events
}

/// Sweeps the events and returns the least crossed balanced position, as the
/// number of faces crossed and the vertex the position lies on.
fn sweep(events: &[Event], num_faces: usize) -> Option<(usize, u32)> {
    let mut closed = 0usize;
    let mut not_open = num_faces;
    let mut crossing = 0isize;
    let mut best: Option<(usize, u32)> = None;

    for event in events {
        match event.kind {
            EventKind::Open => {
                not_open -= 1;
                crossing += 1;
            }
            EventKind::Close => {
                closed += 1;
                crossing -= 1;
            }
        }

        let (lo, hi) = if closed < not_open {
            (closed, not_open)
        } else {
            (not_open, closed)
        };

        if lo as Real * BALANCE_RATIO >= hi as Real {
            let crossed = crossing.max(0) as usize;
            if best.map_or(true, |(best_crossed, _)| crossed < best_crossed) {
                best = Some((crossed, event.vertex));
            }
        } else if closed > not_open {
            // The balance can only get worse from here.
            break;
        }
    }

    best
}

/// Scores the orientation `angles` of `figure`.
///
/// Returns `None` if no sweep position of this orientation is balanced.
pub fn evaluate_rotation(figure: &Figure, angles: Angles) -> Option<Cut> {
    let rotation = angles.rotation();
    let xs: Vec<Real> = figure
        .vertices()
        .iter()
        .map(|pt| rotate(&rotation, pt).x)
        .collect();

    let events = sweep_events(&xs, figure.faces());
    let (crossed, vertex) = sweep(&events, figure.num_faces())?;

    let anchor: Point<Real> = rotate(&rotation, &figure.vertices()[vertex as usize]);
    let line = Line::through(&anchor, &(anchor + Vector::y()));

    Some(Cut {
        angles,
        line,
        crossed,
    })
}

/// Tries `parts` random orientations of `figure` and returns the best cut.
///
/// The orientation `i` is drawn from a generator seeded with
/// `mix_seed(seed, i)`, so the result only depends on `seed` and not on the
/// scheduling. Ties go to the lowest orientation index. Returns `None` if no
/// orientation admits a balanced cut.
pub fn search_cut(figure: &Figure, parts: usize, seed: u64) -> Option<Cut> {
    utils::map_min_by_key(
        parts,
        |i| {
            let mut rng = Isaac64Rng::seed_from_u64(mix_seed(seed, i as u64));
            evaluate_rotation(figure, random_angles(&mut rng))
        },
        |cut| cut.as_ref().map_or(usize::MAX, |c| c.crossed),
    )
    .flatten()
}

#[cfg(test)]
mod test {
    use super::{evaluate_rotation, search_cut, sweep, sweep_events};
    use crate::figure::{Face, Figure};
    use crate::geometry::Angles;
    use crate::math::{Point, Real};
    use smallvec::smallvec;

    /// A row of `n` unit squares along `x`, two triangles each.
    fn strip(n: u32) -> Figure {
        let mut vertices = vec![];
        let mut faces: Vec<Face> = vec![];
        for i in 0..=n {
            vertices.push(Point::new(i as Real, 0.0, 0.0));
            vertices.push(Point::new(i as Real, 1.0, 0.0));
        }
        for i in 0..n {
            let (a, b, c, d) = (2 * i, 2 * i + 1, 2 * i + 2, 2 * i + 3);
            faces.push(smallvec![a, c, d]);
            faces.push(smallvec![a, d, b]);
        }
        Figure::new(vertices, faces).unwrap()
    }

    #[test]
    fn events_bracket_faces() {
        let xs = [0.0, 2.0, 1.0, 3.0];
        let faces: Vec<Face> = vec![smallvec![0, 1, 2], smallvec![2, 3, 1]];
        let events = sweep_events(&xs, &faces);
        let vertices: Vec<_> = events.iter().map(|e| e.vertex).collect();
        assert_eq!(vertices, [0, 2, 1, 3]);
        assert!(events.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn sweep_finds_middle_of_strip() {
        let figure = strip(10);
        let xs: Vec<Real> = figure.vertices().iter().map(|p| p.x).collect();
        let events = sweep_events(&xs, figure.faces());
        let (crossed, vertex) = sweep(&events, figure.num_faces()).unwrap();

        // Only two faces straddle any vertical line through the strip.
        assert!(crossed <= 2);
        let x = xs[vertex as usize];
        assert!(x >= 4.0 && x <= 6.0);
    }

    #[test]
    fn degenerate_figures() {
        let angles = Angles {
            x: 0.3,
            y: 0.2,
            z: 0.1,
        };
        let empty = Figure::new(vec![], vec![]).unwrap();
        assert_eq!(evaluate_rotation(&empty, angles), None);
        assert_eq!(search_cut(&empty, 8, 42), None);

        // Zero faces on each side of the only face: balanced, but crossing it.
        let single = Figure::new(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            vec![smallvec![0, 1, 2]],
        )
        .unwrap();
        assert_eq!(evaluate_rotation(&single, angles).unwrap().crossed, 1);
    }

    #[test]
    fn cut_line_goes_through_anchor() {
        let figure = strip(6);
        let cut = evaluate_rotation(
            &figure,
            Angles {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        )
        .unwrap();

        // Unrotated, the line is vertical and runs through a strip vertex.
        assert_relative_eq!(cut.line.b, 0.0);
        let on_line = figure
            .vertices()
            .iter()
            .filter(|pt| cut.line.eval(pt) == 0.0)
            .count();
        assert_eq!(on_line, 2);
    }

    #[test]
    fn search_is_deterministic() {
        let figure = strip(20);
        let a = search_cut(&figure, 16, 7).unwrap();
        let b = search_cut(&figure, 16, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.crossed <= figure.num_faces());
    }
}
