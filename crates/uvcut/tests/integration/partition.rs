use crate::meshes;
use uvcut::partitioning::{partition, Parameters};

#[test]
fn leaves_respect_size_limit() {
    let figure = meshes::terrain(30);
    let num_faces = figure.num_faces();
    let params = Parameters {
        acceptable_size: 100,
        parts: 8,
        seed: 1,
        ..Parameters::default()
    };
    let leaves = partition(figure, &params, "").unwrap();

    assert!(leaves.iter().all(|leaf| leaf.figure.num_faces() <= 100));
    assert!(leaves.len() >= num_faces / 100);

    let mut covered: Vec<u32> = leaves
        .iter()
        .flat_map(|leaf| leaf.figure.source_faces().iter().copied())
        .collect();
    covered.sort_unstable();
    assert_eq!(covered, (0..num_faces as u32).collect::<Vec<_>>());
}

#[test]
fn leaves_only_keep_referenced_vertices() {
    let params = Parameters {
        depth: Some(3),
        ..Parameters::default()
    };
    let leaves = partition(meshes::terrain(12), &params, "").unwrap();

    for leaf in &leaves {
        let mut used = vec![false; leaf.figure.num_vertices()];
        for face in leaf.figure.faces() {
            for vid in face {
                used[*vid as usize] = true;
            }
        }
        assert!(used.into_iter().all(|u| u));
    }
}

#[test]
fn same_seed_same_partition() {
    let params = Parameters {
        acceptable_size: 50,
        seed: 1234,
        ..Parameters::default()
    };
    let a = partition(meshes::terrain(16), &params, "").unwrap();
    let b = partition(
        meshes::terrain(16),
        &Parameters {
            threads: Some(1),
            ..params
        },
        "",
    )
    .unwrap();

    let paths_a: Vec<_> = a.iter().map(|l| (&l.path, l.figure.source_faces())).collect();
    let paths_b: Vec<_> = b.iter().map(|l| (&l.path, l.figure.source_faces())).collect();
    assert_eq!(paths_a, paths_b);
}
