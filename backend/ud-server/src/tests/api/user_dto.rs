use crate::UserDto;

use ud_core::User;

use chrono::{TimeZone, Utc};

#[test]
fn test_user_dto_serializes_expected_shape() {
    let user = User {
        id: 3,
        name: "Joanna".to_string(),
        email: "joanna@example.com".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
    };

    let json = serde_json::to_value(UserDto::from(user)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": 3,
            "name": "Joanna",
            "email": "joanna@example.com",
            "created_at": "2025-01-02 03:04:05",
        })
    );
}
