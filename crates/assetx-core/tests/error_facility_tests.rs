mod common;

use assetx_core::errors::{AssetError, ExError, ExErrorKind};

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = AssetError::NotFound {
        asset_id: "1003".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("1003"));
    assert_eq!(ex_err.message(), "The asset 1003 does not exist");
}

#[test]
fn test_already_exists_distinct_from_not_found() {
    let err = AssetError::AlreadyExists {
        asset_id: "1001".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::AlreadyExists);
    assert_eq!(ex_err.code(), "ERR_ALREADY_EXISTS");
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity_id(), Some("1001"));
}

#[test]
fn test_invalid_input_kinds() {
    let id_err: ExError = AssetError::InvalidAssetId {
        reason: "Asset id cannot be empty".to_string(),
    }
    .into();
    let invoke_err: ExError = AssetError::InvalidInvocation {
        reason: "unknown function 'x'".to_string(),
    }
    .into();

    assert_eq!(id_err.code(), "ERR_INVALID_INPUT");
    assert_eq!(invoke_err.code(), "ERR_INVALID_INPUT");
    assert_eq!(invoke_err.op(), Some("invoke"));
}

#[test]
fn test_serialization_keeps_asset_id() {
    let ex_err: ExError = AssetError::Serialization {
        asset_id: "1001".to_string(),
        reason: "expected value".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.entity_id(), Some("1001"));
}

#[test]
fn test_backend_error_round_trips_unchanged() {
    let original = common::backend_failure();
    let wrapped = AssetError::from(original.clone());

    assert_eq!(wrapped.to_string(), original.to_string());
    let unwrapped: ExError = wrapped.into();
    assert_eq!(unwrapped, original);
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::ChecksumMismatch, "ERR_CHECKSUM_MISMATCH"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
