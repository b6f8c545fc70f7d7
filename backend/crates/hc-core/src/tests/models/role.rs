use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "USER");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
}

#[test]
fn test_role_from_str_is_case_insensitive() {
    for raw in ["admin", "Admin", "ADMIN", "aDmIn"] {
        assert_eq!(Role::from_str(raw).unwrap(), Role::Admin, "{raw}");
    }
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert!(Role::from_str("moderator").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_from_str_rejects_near_misses() {
    assert!(Role::from_str(" admin").is_err());
    assert!(Role::from_str("administrator").is_err());
}
