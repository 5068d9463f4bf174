use proptest::prelude::*;
use sdk::errors::{EngineError, RepromptErrorExt};
use sdk::types::Turn;

// Every error variant yields a non-empty, static user hint that never echoes
// the (possibly sensitive) message it was built from.
proptest! {
    #[test]
    fn test_error_user_hint_completeness(error_str in "[a-zA-Z0-9 ]{8,40}") {
        let errs = vec![
            EngineError::Config(error_str.clone()),
            EngineError::InferenceUnavailable(error_str.clone()),
            EngineError::Policy(error_str.clone()),
            EngineError::UnknownTemplate(error_str.clone()),
        ];

        for err in errs {
            let hint = err.user_hint();
            prop_assert!(!hint.is_empty());
            prop_assert!(!hint.contains(error_str.as_str()));
        }
    }
}

proptest! {
    #[test]
    fn test_turn_content_preserved(content in "\\PC*") {
        let turn = Turn::system(content.clone());
        prop_assert_eq!(turn.content(), content.as_str());

        let json = serde_json::to_string(&turn).unwrap();
        let parsed: Turn = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, turn);
    }
}
