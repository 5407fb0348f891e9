use hk_hist::{Hist1D, Hist2D, normalize_set};
use hk_viz::axis::AxisOptions;
use hk_viz::heatmap::{HeatmapArtifact, heatmap_artifact};
use hk_viz::overlay::{OverlayArtifact, overlay_artifact};
use hk_viz::stack::{StackArtifact, stack_artifact};

fn filled(name: &str, weights: &[f64]) -> Hist1D {
    let mut h = Hist1D::with_bins(name, "", 0.0, weights.len() as f64, weights.len());
    for (i, &w) in weights.iter().enumerate() {
        h.fill_weighted(i as f64 + 0.5, w);
    }
    h
}

#[test]
fn overlay_artifact_json_roundtrip() {
    let a = filled("data16", &[100.0, 20.0, 5.0]);
    let b = filled("data17", &[40.0, 30.0, 10.0]);
    let art = overlay_artifact(&[&a, &b], AxisOptions::labels("m [GeV]", "Entries")).unwrap();

    let json = serde_json::to_string(&art).unwrap();
    let back: OverlayArtifact = serde_json::from_str(&json).unwrap();

    assert_eq!(back.schema_version, "histkit_overlay_v0");
    assert_eq!(back.series.len(), 2);
    assert_eq!(back.series[0].y, vec![100.0, 20.0, 5.0]);
    assert!((back.y_max - (100.0 + 40.0 / 3.0)).abs() < 1e-12);
    assert_eq!(back.axes.x_label, "m [GeV]");
}

#[test]
fn stack_artifact_json_roundtrip_after_joint_normalization() {
    let mut hists =
        vec![filled("small", &[10.0, 0.0]), filled("large", &[30.0, 10.0])];
    normalize_set(&mut hists, 1.0).unwrap();
    let art = stack_artifact(&mut hists, AxisOptions::default()).unwrap();

    let json = serde_json::to_string(&art).unwrap();
    let back: StackArtifact = serde_json::from_str(&json).unwrap();

    assert_eq!(back.stack_order, vec!["large".to_string(), "small".to_string()]);
    let total: f64 = back.total_y.iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn heatmap_artifact_json_roundtrip() {
    let mut m = Hist2D::with_bins("matrix", "response", 0.0, 2.0, 2, 0.0, 2.0, 2);
    m.fill(0.5, 0.5);
    m.fill(1.5, 1.5);
    m.fill(1.5, 1.5);
    let art = heatmap_artifact(&m, AxisOptions::default());

    let json = serde_json::to_string(&art).unwrap();
    let back: HeatmapArtifact = serde_json::from_str(&json).unwrap();

    assert_eq!(back.z.len(), 4);
    assert_eq!(back.z_max, 2.0);
    assert_eq!(back.title, "response");
}
