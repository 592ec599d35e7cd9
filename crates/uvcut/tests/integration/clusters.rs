use crate::meshes;
use uvcut::clustering::{discover_clusters, ClusteringParameters};
use uvcut::partitioning::{partition, Parameters};

#[test]
fn single_flat_cluster_among_noise() {
    // 200 connected coplanar faces, and 9800 isolated triangles.
    let figure = meshes::grid_with_noise(10, 9_800);
    assert_eq!(figure.num_faces(), 10_000);

    let params = ClusteringParameters {
        min_size: 100,
        max_size: 500,
        ..ClusteringParameters::default()
    };
    let mut clusters = discover_clusters(&figure, &params, 0);

    assert_eq!(clusters.len(), 1);
    clusters[0].sort_unstable();
    assert_eq!(clusters[0], (0..200).collect::<Vec<u32>>());
}

#[test]
fn leaf_clusters_stay_consistent() {
    let mut figure = meshes::grid_with_noise(10, 300);
    let params = ClusteringParameters {
        min_size: 50,
        max_size: 400,
        ..ClusteringParameters::default()
    };
    let clusters = discover_clusters(&figure, &params, 0);
    figure.set_clusters(clusters).unwrap();
    assert_eq!(figure.clusters().len(), 1);

    let params = Parameters {
        depth: Some(4),
        clusterization: true,
        cluster_min_size: 50,
        cluster_max_size: 400,
        seed: 5,
        ..Parameters::default()
    };
    let leaves = partition(figure, &params, "").unwrap();

    let mut covered: Vec<u32> = vec![];
    for leaf in &leaves {
        covered.extend_from_slice(leaf.figure.source_faces());
        for (cluster_id, cluster) in leaf.figure.clusters().iter().enumerate() {
            for fid in cluster {
                assert_eq!(
                    leaf.figure.face_to_cluster()[*fid as usize],
                    Some(cluster_id as u32)
                );
            }
        }
    }
    covered.sort_unstable();
    assert_eq!(covered, (0..500).collect::<Vec<u32>>());
}
