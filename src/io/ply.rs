use super::MeshIoError;
use crate::figure::{Face, Figure, UvOverlay};
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Loads a figure from an ASCII or binary PLY file.
///
/// Vertex positions are read from the `x`, `y` and `z` properties of the
/// `vertex` element, faces from the `vertex_indices` (or `vertex_index`) list
/// of the `face` element. Polygons are kept as they are. The loaded figure has
/// no clusters.
pub fn read_ply(path: impl AsRef<Path>) -> Result<Figure, MeshIoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MeshIoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MeshIoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let header = parser
        .read_header(&mut reader)
        .map_err(|e| MeshIoError::invalid_content(format!("failed to parse PLY header: {e}")))?;
    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| MeshIoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let mut points = Vec::new();
    if let Some(elements) = payload.get("vertex") {
        points.reserve(elements.len());
        for element in elements {
            points.push([
                float_property(element, "x")?,
                float_property(element, "y")?,
                float_property(element, "z")?,
            ]);
        }
    }

    let mut faces = Vec::new();
    if let Some(elements) = payload.get("face") {
        faces.reserve(elements.len());
        for element in elements {
            faces.push(index_list(element)?);
        }
    }

    log::debug!(
        "loaded {:?}: {} vertices, {} faces",
        path,
        points.len(),
        faces.len()
    );

    Figure::from_f64_points(&points, faces).map_err(MeshIoError::from)
}

fn float_property(element: &DefaultElement, key: &str) -> Result<f64, MeshIoError> {
    match element.get(key) {
        Some(Property::Float(v)) => Ok(f64::from(*v)),
        Some(Property::Double(v)) => Ok(*v),
        Some(_) => Err(MeshIoError::invalid_content(format!(
            "vertex property {key} is not a floating point number"
        ))),
        None => Err(MeshIoError::invalid_content(format!(
            "missing vertex property {key}"
        ))),
    }
}

fn index_list(element: &DefaultElement) -> Result<Face, MeshIoError> {
    fn convert<T: Copy + TryInto<u32>>(v: &[T]) -> Result<Face, MeshIoError> {
        v.iter()
            .map(|i| {
                (*i).try_into()
                    .map_err(|_| MeshIoError::invalid_content("negative vertex index"))
            })
            .collect()
    }

    for key in ["vertex_indices", "vertex_index"] {
        let Some(prop) = element.get(key) else {
            continue;
        };

        return match prop {
            Property::ListInt(v) => convert(v),
            Property::ListUInt(v) => convert(v),
            Property::ListShort(v) => convert(v),
            Property::ListUShort(v) => convert(v),
            Property::ListChar(v) => convert(v),
            Property::ListUChar(v) => convert(v),
            _ => Err(MeshIoError::invalid_content(format!(
                "face property {key} is not an integer list"
            ))),
        };
    }

    Err(MeshIoError::invalid_content("face without vertex indices"))
}

/// Saves `figure` as a binary little-endian PLY file.
///
/// If `overlay` is given, its coordinates are written as a per-face `texcoord`
/// list holding the `u` and `v` of each face corner.
pub fn write_ply(
    figure: &Figure,
    overlay: Option<&UvOverlay>,
    path: impl AsRef<Path>,
) -> Result<(), MeshIoError> {
    if let Some(overlay) = overlay {
        if !overlay.fits(figure) {
            return Err(MeshIoError::invalid_content(
                "the uv overlay does not match the faces of the figure",
            ));
        }
    }

    if let Some(face) = figure.faces().iter().find(|f| f.len() > u8::MAX as usize / 2) {
        return Err(MeshIoError::invalid_content(format!(
            "faces with {} vertices cannot be saved",
            face.len()
        )));
    }

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_binary(figure, overlay, &mut writer)?;
    writer.flush()?;
    Ok(())
}

// ply-rs miscounts binary list lengths, so the binary encoding is written by hand.
fn write_binary<W: Write>(
    figure: &Figure,
    overlay: Option<&UvOverlay>,
    writer: &mut W,
) -> Result<(), MeshIoError> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format binary_little_endian 1.0")?;
    writeln!(writer, "comment Generated by uvcut")?;
    writeln!(writer, "element vertex {}", figure.num_vertices())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "element face {}", figure.num_faces())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    if overlay.is_some() {
        writeln!(writer, "property list uchar float texcoord")?;
    }
    writeln!(writer, "end_header")?;

    for pt in figure.vertices() {
        for coord in pt.coords.iter() {
            writer.write_all(&(*coord as f32).to_le_bytes())?;
        }
    }

    for (face_id, face) in figure.faces().iter().enumerate() {
        writer.write_all(&[face.len() as u8])?;
        for vid in face {
            writer.write_all(&(*vid as i32).to_le_bytes())?;
        }

        if let Some(overlay) = overlay {
            writer.write_all(&[(face.len() * 2) as u8])?;
            for uv in overlay.face_uvs(face_id) {
                writer.write_all(&(uv.x as f32).to_le_bytes())?;
                writer.write_all(&(uv.y as f32).to_le_bytes())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{read_ply, write_ply};
    use crate::figure::{Figure, UvOverlay};
    use crate::io::MeshIoError;
    use crate::math::{Point, Point2};
    use ply_rs::parser::Parser;
    use ply_rs::ply::{DefaultElement, Property};
    use smallvec::smallvec;
    use std::io::Write;

    fn quad_and_triangle() -> Figure {
        Figure::new(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.5),
                Point::new(1.0, 1.0, 0.0),
                Point::new(0.0, 1.0, -0.25),
                Point::new(2.0, 0.5, 0.0),
            ],
            vec![smallvec![0, 1, 2, 3], smallvec![1, 4, 2]],
        )
        .unwrap()
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.ply");
        let figure = quad_and_triangle();

        write_ply(&figure, None, &path).unwrap();
        let loaded = read_ply(&path).unwrap();

        assert_eq!(loaded.vertices(), figure.vertices());
        assert_eq!(loaded.faces(), figure.faces());
        assert!(loaded.clusters().is_empty());
    }

    #[test]
    fn texcoords_are_written_per_corner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uv.ply");
        let figure = quad_and_triangle();
        let overlay = UvOverlay {
            uvs: vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.5, 0.0),
                Point2::new(0.5, 0.5),
                Point2::new(0.0, 0.5),
                Point2::new(1.0, 0.25),
            ],
            uv_faces: figure.faces().to_vec(),
        };

        write_ply(&figure, Some(&overlay), &path).unwrap();

        let mut reader = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
        let parser = Parser::<DefaultElement>::new();
        let header = parser.read_header(&mut reader).unwrap();
        let payload = parser.read_payload(&mut reader, &header).unwrap();
        let faces = &payload["face"];
        match &faces[1]["texcoord"] {
            Property::ListFloat(uvs) => assert_eq!(uvs, &[0.5, 0.0, 1.0, 0.25, 0.5, 0.5]),
            other => panic!("unexpected texcoord property {other:?}"),
        }

        // The geometry is still readable.
        assert_eq!(read_ply(&path).unwrap().faces(), figure.faces());
    }

    #[test]
    fn mismatched_overlay_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let overlay = UvOverlay {
            uvs: vec![Point2::origin()],
            uv_faces: vec![smallvec![0, 0, 0]],
        };
        let result = write_ply(&quad_and_triangle(), Some(&overlay), dir.path().join("a.ply"));
        assert!(matches!(result, Err(MeshIoError::InvalidContent { .. })));
    }

    #[test]
    fn load_ascii_with_doubles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii.ply");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "ply\nformat ascii 1.0\nelement vertex 3\nproperty double x\nproperty double y\n\
             property double z\nelement face 1\nproperty list uchar uint vertex_index\nend_header\n\
             0 0 0\n1 0 0\n0 1 2\n3 2 1 0\n"
        )
        .unwrap();
        drop(file);

        let figure = read_ply(&path).unwrap();
        assert_eq!(figure.num_vertices(), 3);
        assert_eq!(figure.faces()[0].as_slice(), &[2, 1, 0]);
        assert_relative_eq!(figure.vertices()[2], Point::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_ply(dir.path().join("missing.ply")),
            Err(MeshIoError::FileNotFound { .. })
        ));

        let path = dir.path().join("bad_index.ply");
        std::fs::write(
            &path,
            "ply\nformat ascii 1.0\nelement vertex 3\nproperty float x\nproperty float y\n\
             property float z\nelement face 1\nproperty list uchar int vertex_indices\nend_header\n\
             0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n",
        )
        .unwrap();
        assert!(matches!(read_ply(&path), Err(MeshIoError::Mesh(_))));

        let path = dir.path().join("garbage.ply");
        std::fs::write(&path, "not a ply file").unwrap();
        assert!(matches!(
            read_ply(&path),
            Err(MeshIoError::InvalidContent { .. })
        ));
    }
}
