mod common;

use common::{approx_eq, init_tracing, listings, with_cell};
use laptop_features::dataset::RawTable;
use laptop_features::preprocessing::scaling::column_moments;
use laptop_features::{
    transform, FeaturePipeline, FeatureTable, FittedState, PipelineConfig, PipelineError,
};

fn fit_default(table: &RawTable) -> (FittedState, FeatureTable) {
    init_tracing();
    FeaturePipeline::new(PipelineConfig::default())
        .fit(table)
        .expect("fixture fits")
}

fn names(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_fitted_column_layout() {
    let (state, output) = fit_default(&listings());

    let expected = names(&[
        "inches",
        "ram_gb",
        "weight_kg",
        "touchscreen",
        "ips_panel",
        "x_res",
        "y_res",
        "ppi",
        "ssd",
        "hdd",
        "flash_storage",
        "cpu_brand_AMD",
        "cpu_brand_Intel",
        "cpu_tier_AMD Ryzen",
        "cpu_tier_Intel Core i5",
        "cpu_tier_Intel Core i7/i9",
        "cpu_tier_Other",
        "gpu_brand_AMD",
        "gpu_brand_Intel",
        "gpu_brand_Nvidia",
        "os_category_Linux",
        "os_category_Mac",
        "os_category_Other/No OS",
        "os_category_Windows",
    ]);
    assert_eq!(state.fitted_columns(), expected.as_slice());
    assert_eq!(output.columns(), expected.as_slice());
    assert_eq!(output.n_rows(), 9);
    assert_eq!(state.numeric_columns().len(), 11);
    assert_eq!(
        state.categorical_columns(),
        names(&["cpu_brand", "cpu_tier", "gpu_brand", "os_category"]).as_slice()
    );
}

#[test]
fn test_target_is_kept_apart() {
    let (state, output) = fit_default(&listings());
    let target = output.target().expect("fit output carries the target");
    assert_eq!(target.len(), 9);
    assert!(approx_eq(target[0], 1339.69, 1e-9));
    assert!(approx_eq(target[8], 269.0, 1e-9));
    assert!(!state.fitted_columns().iter().any(|c| c == "price"));
}

#[test]
fn test_transform_of_fit_table_reproduces_fit_output() {
    let table = listings();
    let (state, fit_output) = fit_default(&table);
    let applied = transform(&state, &table).unwrap();

    assert_eq!(applied.columns(), state.fitted_columns());
    assert_eq!(applied.target(), fit_output.target());
    for (a, b) in applied.values().iter().zip(fit_output.values().iter()) {
        assert!(approx_eq(*a, *b, 1e-12), "{a} != {b}");
    }
}

#[test]
fn test_unseen_categories_yield_zero_blocks() {
    let table = listings();
    let (state, _) = fit_default(&table);

    let new = with_cell(&table, 0, "OpSys", "Android");
    let new = with_cell(&new, 1, "Cpu", "Samsung Cortex A72&A53 2.0GHz");
    let out = state.transform(&new).unwrap();
    assert_eq!(out.columns(), state.fitted_columns());

    let block = |prefix: &str, row: usize| -> Vec<f64> {
        out.columns()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.starts_with(prefix))
            .map(|(j, _)| out.values()[[row, j]])
            .collect()
    };

    assert_eq!(block("os_category_", 0), vec![0.0; 4]);
    assert_eq!(block("cpu_brand_", 1), vec![0.0; 2]);
    // Rows with known categories keep exactly one hot column per block.
    for row in 2..9 {
        assert_eq!(block("os_category_", row).iter().sum::<f64>(), 1.0);
        assert_eq!(block("gpu_brand_", row).iter().sum::<f64>(), 1.0);
    }
}

#[test]
fn test_case_sensitive_mac_rule() {
    let (state, output) = fit_default(&listings());
    // "macOS" rows fall into Other/No OS; only "Mac OS X" is Mac.
    let mac = output.column("os_category_Mac").unwrap();
    let other = output.column("os_category_Other/No OS").unwrap();
    assert_eq!(mac.to_vec(), vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(other[0], 1.0);
    assert_eq!(other[1], 1.0);
    assert_eq!(
        state.categories("os_category").unwrap(),
        names(&["Linux", "Mac", "Other/No OS", "Windows"]).as_slice()
    );
}

#[test]
fn test_numeric_columns_are_standardized() {
    let (state, output) = fit_default(&listings());
    assert!(state.degenerate_columns().is_empty());

    let (mean, std) = column_moments(&output).unwrap();
    for (j, name) in output.columns().iter().enumerate() {
        if state.numeric_columns().contains(name) {
            assert!(mean[j].abs() < 1e-9, "{name}: mean {}", mean[j]);
            assert!(approx_eq(std[j], 1.0, 1e-9), "{name}: std {}", std[j]);
        }
    }
}

#[test]
fn test_standardization_is_invertible_with_state_statistics() {
    let (state, output) = fit_default(&listings());
    let means = state.column_means();
    let stds = state.column_stds();
    let raw = |name: &str, row: usize| {
        output.column(name).unwrap()[row] * stds[name] + means[name]
    };

    assert!(approx_eq(raw("ram_gb", 3), 16.0, 1e-9));
    assert!(approx_eq(raw("hdd", 5), 1000.0, 1e-6));
    assert!(approx_eq(raw("ssd", 5), 256.0, 1e-6));
    assert!(approx_eq(raw("flash_storage", 8), 32.0, 1e-6));
    assert!(approx_eq(raw("touchscreen", 6), 1.0, 1e-9));
    assert!(approx_eq(raw("ips_panel", 6), 1.0, 1e-9));
    assert!(approx_eq(raw("x_res", 0), 2560.0, 1e-6));

    let ppi = (2560f64.powi(2) + 1600f64.powi(2)).sqrt() / 13.3;
    assert!(approx_eq(raw("ppi", 0), ppi, 1e-6));
}

#[test]
fn test_degenerate_column_is_emitted_as_zero() {
    let table = listings();
    let flat: Vec<String> = vec!["2kg".to_string(); table.len()];
    let table = table.with_column("Weight", flat).unwrap();

    let (state, output) = fit_default(&table);
    assert_eq!(state.degenerate_columns(), names(&["weight_kg"]));
    assert!(output.column("weight_kg").unwrap().iter().all(|&v| v == 0.0));

    let heavier = with_cell(&table, 0, "Weight", "4.5kg");
    let applied = state.transform(&heavier).unwrap();
    assert!(applied.column("weight_kg").unwrap().iter().all(|&v| v == 0.0));
    assert!(applied.values().iter().all(|v| v.is_finite()));
}

#[test]
fn test_missing_weight_column_fails_before_parsing() {
    let table = listings().without_column("Weight");
    // A malformed cell elsewhere would fail parsing; the schema check comes first.
    let table = with_cell(&table, 0, "Ram", "lots");

    let err = FeaturePipeline::default().fit(&table).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn { ref column } if column == "weight"));

    let (state, _) = fit_default(&listings());
    let err = state.transform(&table).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn { ref column } if column == "weight"));
}

#[test]
fn test_parse_error_names_row_column_and_value() {
    let table = with_cell(&listings(), 4, "Ram", "four");
    match FeaturePipeline::default().fit(&table).unwrap_err() {
        PipelineError::Parse { row, source } => {
            assert_eq!(row, 4);
            assert_eq!(source.column, "ram");
            assert_eq!(source.value, "four");
        }
        other => panic!("unexpected error: {other}"),
    }

    let table = with_cell(&listings(), 2, "ScreenResolution", "Full HD");
    let err = FeaturePipeline::default().fit(&table).unwrap_err();
    assert!(matches!(err, PipelineError::Parse { row: 2, .. }));
}

#[test]
fn test_target_required_only_for_fit() {
    let unpriced = listings().without_column("Price");
    let err = FeaturePipeline::default().fit(&unpriced).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn { ref column } if column == "price"));

    let (state, _) = fit_default(&listings());
    let out = state.transform(&unpriced).unwrap();
    assert!(out.target().is_none());
    assert_eq!(out.columns(), state.fitted_columns());
}

#[test]
fn test_blank_price_does_not_block_transform() {
    let table = listings();
    let (state, fit_output) = fit_default(&table);

    let blank = with_cell(&table, 0, "Price", "");
    let out = state.transform(&blank).unwrap();
    assert!(out.target().is_none());
    assert_eq!(out.columns(), state.fitted_columns());
    for (a, b) in out.values().iter().zip(fit_output.values().iter()) {
        assert!(approx_eq(*a, *b, 1e-12));
    }

    let err = FeaturePipeline::default().fit(&blank).unwrap_err();
    assert!(matches!(err, PipelineError::Parse { row: 0, .. }));
}

#[test]
fn test_headers_match_case_insensitively() {
    let table = listings();
    let shouting = RawTable::new(
        table.headers().iter().map(|h| h.to_uppercase()).collect(),
        table.rows().to_vec(),
    )
    .unwrap();

    let (state, output) = fit_default(&table);
    let (state_upper, output_upper) = fit_default(&shouting);
    assert_eq!(state.fitted_columns(), state_upper.fitted_columns());
    assert_eq!(output, output_upper);
}

#[test]
fn test_empty_tables() {
    let table = listings();
    let empty = RawTable::new(table.headers().to_vec(), Vec::new()).unwrap();

    let err = FeaturePipeline::default().fit(&empty).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyData(_)));

    let (state, _) = fit_default(&table);
    let out = state.transform(&empty).unwrap();
    assert_eq!(out.n_rows(), 0);
    assert_eq!(out.columns(), state.fitted_columns());
}

#[test]
fn test_unrecognized_storage_defaults_to_zero() {
    let table = with_cell(&listings(), 0, "Memory", "1.0TB Hybrid");
    let (state, output) = fit_default(&table);
    let means = state.column_means();
    let stds = state.column_stds();
    for kind in ["ssd", "hdd", "flash_storage"] {
        let raw = output.column(kind).unwrap()[0] * stds[kind] + means[kind];
        assert!(approx_eq(raw, 0.0, 1e-6), "{kind} = {raw}");
    }
}

#[test]
fn test_passthrough_columns() {
    init_tracing();
    let config = PipelineConfig::default().with_passthrough_columns(["laptop_ID", "Company"]);
    let table = listings();
    let (state, output) = FeaturePipeline::new(config).fit(&table).unwrap();

    // laptop_id is all numbers, company is not.
    assert_eq!(state.numeric_columns().last().unwrap(), "laptop_id");
    assert_eq!(state.categorical_columns().last().unwrap(), "company");
    assert_eq!(
        &output.columns()[output.n_columns() - 6..],
        names(&[
            "company_Acer",
            "company_Apple",
            "company_Asus",
            "company_Dell",
            "company_HP",
            "company_Lenovo"
        ])
        .as_slice()
    );

    // A fitted numeric passthrough must stay numeric.
    let bad = with_cell(&table, 3, "laptop_ID", "n/a");
    match state.transform(&bad).unwrap_err() {
        PipelineError::Parse { row, source } => {
            assert_eq!(row, 3);
            assert_eq!(source.column, "laptop_id");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Fitted passthrough columns are required in apply mode.
    let err = state.transform(&table.without_column("Company")).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn { ref column } if column == "company"));
}

#[test]
fn test_category_separator() {
    init_tracing();
    let config = PipelineConfig::default().with_category_separator("=");
    let (state, _) = FeaturePipeline::new(config).fit(&listings()).unwrap();
    assert!(state.fitted_columns().iter().any(|c| c == "os_category=Windows"));
    assert!(!state.fitted_columns().iter().any(|c| c == "os_category_Windows"));
}

#[test]
fn test_each_fit_starts_fresh() {
    let table = listings();
    let (head, _) = table.train_test_split(0.5).unwrap();

    let pipeline = FeaturePipeline::default();
    let (small, _) = pipeline.fit(&head).unwrap();
    let (full, _) = pipeline.fit(&table).unwrap();
    let (fresh, _) = FeaturePipeline::default().fit(&table).unwrap();

    assert_ne!(small, full);
    assert_eq!(full, fresh);
}
