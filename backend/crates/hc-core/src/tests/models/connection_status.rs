use crate::ConnectionStatus;

#[test]
fn test_connection_status_as_str() {
    assert_eq!(ConnectionStatus::NotConnected.as_str(), "NONE");
    assert_eq!(ConnectionStatus::Pending.as_str(), "PENDING");
    assert_eq!(ConnectionStatus::Connected.as_str(), "CONNECTED");
    assert_eq!(ConnectionStatus::Invalid.as_str(), "INVALID");
}

#[test]
fn test_connect_only_allowed_when_not_connected() {
    assert!(ConnectionStatus::NotConnected.allows_connect());
    assert!(!ConnectionStatus::Pending.allows_connect());
    assert!(!ConnectionStatus::Connected.allows_connect());
    assert!(!ConnectionStatus::Invalid.allows_connect());
}

#[test]
fn test_message_only_allowed_when_connected() {
    assert!(ConnectionStatus::Connected.allows_message());
    assert!(!ConnectionStatus::NotConnected.allows_message());
    assert!(!ConnectionStatus::Pending.allows_message());
    assert!(!ConnectionStatus::Invalid.allows_message());
}

#[test]
fn test_connect_labels() {
    assert_eq!(ConnectionStatus::Pending.connect_label(), "Request Sent");
    assert_eq!(ConnectionStatus::Connected.connect_label(), "Connected");
    assert_eq!(ConnectionStatus::NotConnected.connect_label(), "Connect");
    assert_eq!(ConnectionStatus::Invalid.connect_label(), "Connect");
}

#[test]
fn test_serializes_as_upper_case_names() {
    let rendered = serde_json::to_string(&ConnectionStatus::NotConnected).unwrap();
    assert_eq!(rendered, "\"NONE\"");
}
