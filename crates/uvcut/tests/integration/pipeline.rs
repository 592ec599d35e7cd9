use crate::meshes;
use uvcut::atlas::PlanarAtlas;
use uvcut::executor::{self, ExecutorError, Job};
use uvcut::io::{self, MeshIoError};
use uvcut::partitioning::{Parameters, ParametersError};

#[test]
fn textured_output_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("terrain.ply");
    let figure = meshes::terrain(10);
    io::write_ply(&figure, None, &input).unwrap();

    let params = Parameters {
        depth: Some(2),
        save_partition: true,
        ..Parameters::default()
    };
    let job = Job::new(&input, params);
    assert_eq!(job.output, dir.path().join("uv_terrain.ply"));

    let report = executor::run(&job, &PlanarAtlas::default()).unwrap();
    assert_eq!(report.num_faces, 200);
    assert_eq!(report.num_leaves, 4);
    assert_eq!(report.num_clusters, 0);

    let output = io::read_ply(&job.output).unwrap();
    assert_eq!(output.num_faces(), 200);

    for path in ["_l_l", "_l_r", "_r_l", "_r_r"] {
        let leaf = format!("{}{}.ply", job.save_prefix(), path);
        assert!(std::path::Path::new(&leaf).exists(), "missing {leaf}");
    }
}

#[test]
fn clustering_runs_before_partitioning() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noisy.ply");
    io::write_ply(&meshes::grid_with_noise(10, 100), None, &input).unwrap();

    let params = Parameters {
        depth: Some(1),
        clusterization: true,
        cluster_min_size: 100,
        cluster_max_size: 500,
        ..Parameters::default()
    };
    let mut job = Job::new(&input, params);
    job.output = dir.path().join("out.ply");

    let report = executor::run(&job, &PlanarAtlas::default()).unwrap();
    assert_eq!(report.num_clusters, 1);
    assert_eq!(report.num_leaves, 2);
    assert!(job.output.exists());
}

#[test]
fn run_errors() {
    let dir = tempfile::tempdir().unwrap();

    let job = Job::new(dir.path().join("missing.ply"), Parameters::default());
    assert!(matches!(
        executor::run(&job, &PlanarAtlas::default()),
        Err(ExecutorError::Parameters(ParametersError::NoTermination))
    ));

    let job = Job::new(
        dir.path().join("missing.ply"),
        Parameters {
            depth: Some(1),
            ..Parameters::default()
        },
    );
    assert!(matches!(
        executor::run(&job, &PlanarAtlas::default()),
        Err(ExecutorError::MeshIo(MeshIoError::FileNotFound { .. }))
    ));
}
