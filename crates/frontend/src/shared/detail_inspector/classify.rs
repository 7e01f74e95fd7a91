use serde_json::Value;

/// Layout chosen for a tapped item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Invite,
    Friend,
    Ticket,
    Order,
    Generic,
}

type Predicate = fn(&Value) -> bool;

/// Evaluated top to bottom, first match wins. The last row always matches.
pub const CLASSIFIERS: &[(Predicate, DetailKind)] = &[
    (is_invite, DetailKind::Invite),
    (is_friend, DetailKind::Friend),
    (is_ticket, DetailKind::Ticket),
    (is_order, DetailKind::Order),
    (always, DetailKind::Generic),
];

pub fn classify(item: &Value) -> DetailKind {
    CLASSIFIERS
        .iter()
        .find(|(matches, _)| matches(item))
        .map(|(_, kind)| *kind)
        .unwrap_or(DetailKind::Generic)
}

/// Present and not null / false / "" / 0
fn truthy(item: &Value, key: &str) -> bool {
    match item.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

fn is_invite(item: &Value) -> bool {
    item.get("type").and_then(Value::as_str) == Some("invite")
}

fn is_friend(item: &Value) -> bool {
    item.get("category").and_then(Value::as_str) == Some("Social Connection")
}

fn is_ticket(item: &Value) -> bool {
    truthy(item, "seat") || truthy(item, "qrCode")
}

fn is_order(item: &Value) -> bool {
    truthy(item, "orderNumber")
}

fn always(_: &Value) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_examples() {
        assert_eq!(classify(&json!({"seat": "A4", "qrCode": "x"})), DetailKind::Ticket);
        assert_eq!(classify(&json!({"orderNumber": "#123"})), DetailKind::Order);
        assert_eq!(classify(&json!({})), DetailKind::Generic);
        assert_eq!(
            classify(&json!({"type": "invite", "seat": "A4"})),
            DetailKind::Invite
        );
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            classify(&json!({"category": "Social Connection", "seat": "B1"})),
            DetailKind::Friend
        );
        assert_eq!(
            classify(&json!({"qrCode": "q", "orderNumber": "#9"})),
            DetailKind::Ticket
        );
        assert_eq!(
            classify(&json!({"type": "invite", "category": "Social Connection"})),
            DetailKind::Invite
        );
    }

    #[test]
    fn test_falsy_markers_fall_through() {
        assert_eq!(classify(&json!({"seat": "", "qrCode": null})), DetailKind::Generic);
        assert_eq!(classify(&json!({"orderNumber": 0})), DetailKind::Generic);
        assert_eq!(classify(&json!({"category": "Restaurant"})), DetailKind::Generic);
    }

    #[test]
    fn test_non_object_items_are_generic() {
        assert_eq!(classify(&json!("just text")), DetailKind::Generic);
        assert_eq!(classify(&Value::Null), DetailKind::Generic);
        assert_eq!(classify(&json!([1, 2])), DetailKind::Generic);
    }
}
