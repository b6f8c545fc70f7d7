use crate::Route;

use std::str::FromStr;

#[test]
fn test_route_paths_round_trip() {
    for route in [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::VerifyOtp,
        Route::Profile,
        Route::UpdateProfile,
        Route::Admin,
        Route::Chat(9),
    ] {
        assert_eq!(Route::from_str(&route.path()).unwrap(), route);
    }
}

#[test]
fn test_chat_route_requires_numeric_id() {
    assert_eq!(Route::Chat(12).path(), "/chat/12");
    assert!(Route::from_str("/chat/abc").is_err());
    assert!(Route::from_str("/nowhere").is_err());
}
