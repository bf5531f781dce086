use super::*;

// =============================================================
// Notification
// =============================================================

#[test]
fn notification_accepts_numeric_id_and_type_field() {
    let n: Notification = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Maintenance",
        "content": "Tonight",
        "type": "system"
    }))
    .expect("notification");
    assert_eq!(n.id, "7");
    assert_eq!(n.kind, "system");
    assert!(n.extra.is_empty());
}

#[test]
fn notification_keeps_unknown_fields_for_save() {
    let n: Notification = serde_json::from_value(serde_json::json!({
        "id": "n-1",
        "title": "t",
        "createdAt": "2025-01-01"
    }))
    .expect("notification");
    assert_eq!(n.extra.get("createdAt"), Some(&serde_json::json!("2025-01-01")));

    let out = serde_json::to_value(&n).expect("serialize");
    assert_eq!(out["type"], "");
    assert_eq!(out["createdAt"], "2025-01-01");
}

#[test]
fn notification_rejects_object_id() {
    let res = serde_json::from_value::<Notification>(serde_json::json!({ "id": { "x": 1 } }));
    assert!(res.is_err());
}

// =============================================================
// UserStats
// =============================================================

#[test]
fn user_stats_defaults_missing_fields() {
    let stats: UserStats = serde_json::from_str(r#"{ "growthData": [] }"#).expect("stats");
    assert_eq!(stats, UserStats::default());
}

#[test]
fn user_stats_reads_camel_case() {
    let stats: UserStats = serde_json::from_value(serde_json::json!({
        "totalUsers": 120,
        "newUsersToday": 4,
        "growthData": [{ "month": "Jan", "users": 10 }],
        "subscriptionData": [{ "name": "Premium", "value": 30 }]
    }))
    .expect("stats");
    assert_eq!(stats.total_users, 120);
    assert_eq!(stats.new_users_today, 4);
    assert_eq!(stats.growth_data[0].month, "Jan");
    assert_eq!(stats.subscription_data[0].value, 30);
}

// =============================================================
// Misc
// =============================================================

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").expect("body");
    assert!(body.message.is_none());
}

#[test]
fn news_article_reads_published_at() {
    let a: NewsArticle = serde_json::from_value(serde_json::json!({
        "id": 3, "title": "Q3", "author": "desk", "publishedAt": "2025-02-02"
    }))
    .expect("article");
    assert_eq!(a.published_at.as_deref(), Some("2025-02-02"));
}
