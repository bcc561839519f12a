use tictac_engine::{SelectorConfig, Strategy, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};

#[test]
fn test_config_builder_methods() {
    // Test that the builder methods correctly set their respective values
    let config = SelectorConfig::default()
        .with_strategy(Strategy::Quick)
        .with_depth(4);

    // Verify each setting was applied correctly
    assert_eq!(config.strategy, Strategy::Quick);
    assert_eq!(config.depth, Some(4));
    assert_eq!(config.effective_depth(), 4);
}

#[test]
fn test_config_default_values() {
    // Test that default values are set correctly
    let config = SelectorConfig::default();

    // Minimax with unlimited (full) depth is the default tier
    assert_eq!(config.strategy, Strategy::Minimax);
    assert_eq!(config.depth, None);
    assert_eq!(config.effective_depth(), MAX_SEARCH_DEPTH);
}

#[test]
fn test_effective_depth_clamps_out_of_range_values() {
    // Below the minimum: raised to 1
    let too_low = SelectorConfig::default().with_depth(0);
    assert_eq!(too_low.effective_depth(), MIN_SEARCH_DEPTH);

    // Above the maximum: lowered to 9
    let too_high = SelectorConfig::default().with_depth(12);
    assert_eq!(too_high.effective_depth(), MAX_SEARCH_DEPTH);

    // In range: passed through unchanged
    let in_range = SelectorConfig::default().with_depth(5);
    assert_eq!(in_range.effective_depth(), 5);
}
