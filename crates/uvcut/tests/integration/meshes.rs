use smallvec::smallvec;
use uvcut::figure::{Face, Figure};
use uvcut::math::{Point, Real};

/// An `n × n` grid of quads over a wavy height field, two triangles per quad.
pub fn terrain(n: u32) -> Figure {
    let mut vertices = vec![];
    let mut faces: Vec<Face> = vec![];

    for j in 0..=n {
        for i in 0..=n {
            let (x, y) = (i as Real, j as Real);
            vertices.push(Point::new(x, y, (x * 0.3).sin() + (y * 0.2).cos()));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let a = j * (n + 1) + i;
            let (b, c, d) = (a + 1, a + n + 2, a + n + 1);
            faces.push(smallvec![a, b, c]);
            faces.push(smallvec![a, c, d]);
        }
    }

    Figure::new(vertices, faces).unwrap()
}

/// A flat `n × n` grid of quads in the `xy` plane, two triangles per quad,
/// followed by `noise` disconnected triangles of varying orientations.
pub fn grid_with_noise(n: u32, noise: u32) -> Figure {
    let mut vertices = vec![];
    let mut faces: Vec<Face> = vec![];

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point::new(i as Real, j as Real, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let a = j * (n + 1) + i;
            let (b, c, d) = (a + 1, a + n + 2, a + n + 1);
            faces.push(smallvec![a, b, c]);
            faces.push(smallvec![a, c, d]);
        }
    }

    for k in 0..noise {
        let base = vertices.len() as u32;
        let t = k as Real * 0.37;
        let origin = Point::new(50.0 + (k % 100) as Real * 3.0, (k / 100) as Real * 3.0, 5.0);
        vertices.push(origin);
        vertices.push(origin + na::Vector3::new(t.cos(), t.sin(), 0.5));
        vertices.push(origin + na::Vector3::new(-t.sin(), 0.3, t.cos()));
        faces.push(smallvec![base, base + 1, base + 2]);
    }

    Figure::new(vertices, faces).unwrap()
}
