//! Unit tests for the Identifiers module

use core_kernel::{PolicyId, QuoteId};
use uuid::Uuid;

mod quote_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(QuoteId::new(), QuoteId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = QuoteId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = QuoteId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = QuoteId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_display_includes_prefix() {
        let id = QuoteId::new();
        assert!(id.to_string().starts_with("QT-"));
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let id = QuoteId::new();
        let with_prefix: QuoteId = id.to_string().parse().unwrap();
        let bare: QuoteId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(with_prefix, id);
        assert_eq!(bare, id);
    }

    #[test]
    fn test_parse_invalid_string_errors() {
        assert!("not-a-uuid".parse::<QuoteId>().is_err());
    }
}

mod policy_id_tests {
    use super::*;

    #[test]
    fn test_display_includes_prefix() {
        let id = PolicyId::new();
        assert!(id.to_string().starts_with("POL-"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = PolicyId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));

        let back: PolicyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
