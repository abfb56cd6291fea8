use commandex_core::errors::{CommandexError, ExError, ExErrorKind};
use commandex_core_types::RequestId;

#[test]
fn test_every_domain_error_maps_to_a_kind() {
    let cases = vec![
        (
            CommandexError::CommandNotFound { name: "a".into() },
            ExErrorKind::NotFound,
        ),
        (
            CommandexError::CommandAlreadyExists { name: "a".into() },
            ExErrorKind::AlreadyExists,
        ),
        (
            CommandexError::InvalidCommandName { reason: "x".into() },
            ExErrorKind::InvalidInput,
        ),
        (
            CommandexError::MissingCommandType { name: "a".into() },
            ExErrorKind::InvalidInput,
        ),
        (
            CommandexError::InvalidGoal { reason: "x".into() },
            ExErrorKind::InvalidInput,
        ),
        (
            CommandexError::InvalidConfig { reason: "x".into() },
            ExErrorKind::InvalidConfig,
        ),
        (
            CommandexError::Serialization { message: "x".into() },
            ExErrorKind::Serialization,
        ),
        (
            CommandexError::Internal { message: "x".into() },
            ExErrorKind::Internal,
        ),
    ];

    for (err, kind) in cases {
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), kind);
        assert!(ex.code().starts_with("ERR_"));
    }
}

#[test]
fn test_codes_are_stable() {
    assert_eq!(ExErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
    assert_eq!(ExErrorKind::InvalidConfig.code(), "ERR_INVALID_CONFIG");
    assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
    assert_eq!(ExErrorKind::AlreadyExists.code(), "ERR_ALREADY_EXISTS");
    assert_eq!(ExErrorKind::Io.code(), "ERR_IO");
    assert_eq!(ExErrorKind::Serialization.code(), "ERR_SERIALIZATION");
    assert_eq!(ExErrorKind::Unavailable.code(), "ERR_UNAVAILABLE");
    assert_eq!(ExErrorKind::Internal.code(), "ERR_INTERNAL");
}

#[test]
fn test_builder_carries_context() {
    let request_id = RequestId::from_string("req-9".to_string());
    let ex: ExError = CommandexError::CommandAlreadyExists {
        name: "newCommand".into(),
    }
    .into();
    let ex = ex
        .with_op("command_create")
        .with_goal_id("build")
        .with_request_id(request_id.clone());

    assert_eq!(ex.op(), Some("command_create"));
    assert_eq!(ex.command_name(), Some("newCommand"));
    assert_eq!(ex.goal_id(), Some("build"));
    assert_eq!(ex.request_id(), Some(&request_id));
    assert_eq!(ex.message(), "Command already exists");
}
