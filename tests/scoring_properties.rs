//! Property tests for the scoring model: bounds and monotonicity.

use proptest::prelude::*;
use vendormap::core::{MigrationTask, ReadinessInputs, VendorAttributes};
use vendormap::scoring::{exit_readiness_score, lock_in_score, migration_difficulty_score};

fn arbitrary_attributes() -> impl Strategy<Value = VendorAttributes> {
    (
        0.0..10_000_000.0f64,
        0u32..240,
        0.0..100_000.0f64,
        0u32..200,
        any::<bool>(),
        0.0..5_000_000.0f64,
    )
        .prop_map(
            |(contract_value, months, data_gb, api, custom, switching)| {
                let mut attrs = VendorAttributes::new("V-1", "Vendor");
                attrs.contract_value = contract_value;
                attrs.contract_months = months;
                attrs.data_volume_gb = data_gb;
                attrs.api_dependencies = api;
                attrs.has_custom_integration = custom;
                attrs.switching_cost = switching;
                attrs
            },
        )
}

fn arbitrary_readiness() -> impl Strategy<Value = ReadinessInputs> {
    (
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
    )
        .prop_map(|(lock_in, migration, export, contract, technical)| ReadinessInputs {
            lock_in_score: lock_in,
            migration_difficulty: migration,
            data_export_capability: export,
            contract_flexibility: contract,
            technical_complexity: technical,
        })
}

proptest! {
    #[test]
    fn lock_in_score_stays_on_the_scale(attrs in arbitrary_attributes()) {
        let score = lock_in_score(&attrs);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn lock_in_is_monotone_in_contract_months(attrs in arbitrary_attributes(), bump in 1u32..100) {
        let base = lock_in_score(&attrs);
        let mut longer = attrs;
        longer.contract_months += bump;
        prop_assert!(lock_in_score(&longer) >= base);
    }

    #[test]
    fn lock_in_is_monotone_in_data_volume(attrs in arbitrary_attributes(), bump in 1.0..50_000.0f64) {
        let base = lock_in_score(&attrs);
        let mut bigger = attrs;
        bigger.data_volume_gb += bump;
        prop_assert!(lock_in_score(&bigger) >= base);
    }

    #[test]
    fn lock_in_is_monotone_in_api_dependencies(attrs in arbitrary_attributes(), bump in 1u32..100) {
        let base = lock_in_score(&attrs);
        let mut coupled = attrs;
        coupled.api_dependencies += bump;
        prop_assert!(lock_in_score(&coupled) >= base);
    }

    #[test]
    fn lock_in_is_monotone_in_switching_cost(attrs in arbitrary_attributes(), bump in 1.0..5_000_000.0f64) {
        let base = lock_in_score(&attrs);
        let mut stickier = attrs;
        stickier.switching_cost += bump;
        prop_assert!(lock_in_score(&stickier) >= base);
    }

    #[test]
    fn lock_in_is_monotone_in_contract_value_without_switching_cost(
        attrs in arbitrary_attributes(),
        bump in 1.0..10_000_000.0f64,
    ) {
        // The switching factor is a ratio against contract value, so the
        // claim only holds factor-by-factor with it pinned to zero.
        let mut base_attrs = attrs;
        base_attrs.switching_cost = 0.0;
        let base = lock_in_score(&base_attrs);
        let mut richer = base_attrs;
        richer.contract_value += bump;
        prop_assert!(lock_in_score(&richer) >= base);
    }

    #[test]
    fn custom_integration_never_lowers_the_score(attrs in arbitrary_attributes()) {
        let mut without = attrs.clone();
        without.has_custom_integration = false;
        let mut with = attrs;
        with.has_custom_integration = true;
        prop_assert!(lock_in_score(&with) >= lock_in_score(&without));
    }

    #[test]
    fn exit_readiness_stays_on_the_scale(inputs in arbitrary_readiness()) {
        let score = exit_readiness_score(&inputs);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn exit_readiness_falls_as_risk_inputs_rise(inputs in arbitrary_readiness()) {
        let base = exit_readiness_score(&inputs);
        for raise in [
            |i: &mut ReadinessInputs| i.lock_in_score = 100.0,
            |i: &mut ReadinessInputs| i.migration_difficulty = 100.0,
            |i: &mut ReadinessInputs| i.technical_complexity = 100.0,
        ] {
            let mut riskier = inputs;
            raise(&mut riskier);
            prop_assert!(exit_readiness_score(&riskier) <= base);
        }
    }

    #[test]
    fn exit_readiness_rises_with_flexibility_and_export(inputs in arbitrary_readiness()) {
        let base = exit_readiness_score(&inputs);
        for improve in [
            |i: &mut ReadinessInputs| i.data_export_capability = 100.0,
            |i: &mut ReadinessInputs| i.contract_flexibility = 100.0,
        ] {
            let mut better = inputs;
            improve(&mut better);
            prop_assert!(exit_readiness_score(&better) >= base);
        }
    }

    #[test]
    fn migration_difficulty_stays_on_the_scale(
        days in proptest::collection::vec((1u8..=10, 0u32..400), 0..60)
    ) {
        let tasks: Vec<MigrationTask> = days
            .iter()
            .enumerate()
            .map(|(i, (difficulty, estimated))| {
                MigrationTask::new(format!("T-{i}"), "task", *difficulty, *estimated)
            })
            .collect();
        let score = migration_difficulty_score(&tasks);
        prop_assert!((0.0..=100.0).contains(&score));
        if tasks.is_empty() {
            prop_assert_eq!(score, 50.0);
        }
    }
}
