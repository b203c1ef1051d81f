mod common;

use common::{init_tracing, listings};
use laptop_features::{
    FeaturePipeline, FittedState, PipelineConfig, PipelineError, SerializableParams,
};

fn fitted() -> FittedState {
    init_tracing();
    let config = PipelineConfig::default().with_passthrough_columns(["Company"]);
    FeaturePipeline::new(config).fit(&listings()).unwrap().0
}

#[test]
fn test_bincode_file_round_trip() {
    let state = fitted();
    let path = std::env::temp_dir().join("laptop_features_state_round_trip.bin");

    state.save_to_file(&path).unwrap();
    let loaded = FittedState::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, state);
    assert_eq!(loaded.config().passthrough_columns, vec!["company"]);
    assert_eq!(
        loaded.transform(&listings()).unwrap(),
        state.transform(&listings()).unwrap()
    );
}

#[test]
fn test_json_exposes_column_contract() {
    let state = fitted();
    let json = state.to_json().unwrap();
    assert!(json.contains("fitted_columns"));
    assert!(json.contains("os_category_Windows"));

    let back = FittedState::from_json(&json).unwrap();
    assert_eq!(back.fitted_columns(), state.fitted_columns());
    for (name, mean) in state.column_means() {
        assert!((back.column_means()[&name] - mean).abs() <= 1e-9 * mean.abs().max(1.0));
    }
}

#[test]
fn test_corrupt_bytes_are_rejected() {
    let state = fitted();
    let bytes = state.to_bytes().unwrap();
    let result = FittedState::from_bytes(&bytes[..bytes.len() / 2]);
    assert!(result.is_err());

    let path = std::env::temp_dir().join("laptop_features_state_corrupt.bin");
    std::fs::write(&path, &bytes[..10]).unwrap();
    let loaded = FittedState::load_from_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(loaded, Err(PipelineError::Serialization(_))));
}
