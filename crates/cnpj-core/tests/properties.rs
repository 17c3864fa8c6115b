//! Property-based tests for the engine invariants.

use cnpj_core::identifier::ROOT_LEN;
use cnpj_core::{unformat, Alphanumeric, AlphanumericIdEngine, Numeric, NumericIdEngine};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn root_of(formatted: &str) -> String {
    unformat::<Alphanumeric>(formatted)[..ROOT_LEN].to_string()
}

proptest! {
    #[test]
    fn generated_numeric_ids_validate(seed in any::<u64>()) {
        let engine = NumericIdEngine::new();
        let id = engine.generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(engine.validate(&id));
        prop_assert!(engine.parse(&id).unwrap().is_headquarters());
    }

    #[test]
    fn generated_alphanumeric_ids_validate(seed in any::<u64>()) {
        let engine = AlphanumericIdEngine::new();
        let id = engine.generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(engine.validate(&id));
        prop_assert!(engine.validate(&id.to_lowercase()));
    }

    #[test]
    fn repeated_symbols_never_validate(symbol in "[0-9A-Za-z]") {
        let text = symbol.repeat(14);
        prop_assert!(!NumericIdEngine::new().validate(&text));
        prop_assert!(!AlphanumericIdEngine::new().validate(&text));
    }

    #[test]
    fn derived_branches_share_root_and_count_up(seed in any::<u64>(), count in 0u32..60) {
        let engine = AlphanumericIdEngine::new();
        let main_id = engine.generate_with(&mut StdRng::seed_from_u64(seed));
        let branches = engine.derive_branches(&main_id, count).unwrap();

        prop_assert_eq!(branches.len(), count as usize);
        for (index, branch) in branches.iter().enumerate() {
            let id = engine.parse(branch).unwrap();
            prop_assert_eq!(id.root(), root_of(&main_id));
            prop_assert_eq!(id.branch(), format!("{:04}", index + 1));
        }

        let verdicts = engine.validate_branches(&main_id, &branches).unwrap();
        prop_assert_eq!(verdicts.len(), branches.len());
        prop_assert!(verdicts.iter().all(|v| v.is_valid));
    }

    #[test]
    fn validate_branches_preserves_order_and_count(
        seed in any::<u64>(),
        texts in prop::collection::vec(".{0,20}", 0..12),
    ) {
        let engine = NumericIdEngine::new();
        let main_id = engine.generate_with(&mut StdRng::seed_from_u64(seed));
        let verdicts = engine.validate_branches(&main_id, &texts).unwrap();

        prop_assert_eq!(verdicts.len(), texts.len());
        for (index, verdict) in verdicts.iter().enumerate() {
            prop_assert_eq!(verdict.position, index + 1);
            prop_assert_eq!(&verdict.original_text, &texts[index]);
        }
    }

    #[test]
    fn unformat_is_idempotent(text in ".{0,40}") {
        let once = unformat::<Numeric>(&text);
        prop_assert_eq!(unformat::<Numeric>(&once), once.clone());

        let once = unformat::<Alphanumeric>(&text);
        prop_assert_eq!(unformat::<Alphanumeric>(&once), once.clone());
    }

    #[test]
    fn validate_never_panics(text in ".{0,40}") {
        let _ = NumericIdEngine::new().validate(&text);
        let _ = AlphanumericIdEngine::new().validate(&text);
    }
}
